//! Basic authentication example.
//!
//! This example authenticates with client credentials, reads a workspace
//! and lists its open bugs page by page.
//!
//! Run with: cargo run --example basic_auth

use futures_util::StreamExt;
use tapd_rs::models::{GetBugsRequest, GetRolesRequest, GetWorkspaceInfoRequest, PriorityLabel};
use tapd_rs::{ClientConfig, TapdClient};

#[tokio::main]
async fn main() -> tapd_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // TAPD_CLIENT_ID / TAPD_CLIENT_SECRET, or TAPD_ACCESS_TOKEN
    let client = TapdClient::with_config(ClientConfig::from_env()?)?;

    let workspace_id: i64 = std::env::var("TAPD_WORKSPACE_ID")
        .expect("TAPD_WORKSPACE_ID environment variable required")
        .parse()
        .expect("TAPD_WORKSPACE_ID must be a number");

    let workspace = client
        .workspaces()
        .get_workspace_info(
            &GetWorkspaceInfoRequest {
                workspace_id: Some(workspace_id),
            },
            &[],
        )
        .await?;
    println!("Workspace {} ({})", workspace.name, workspace.id);

    let roles = client
        .users()
        .get_roles(
            &GetRolesRequest {
                workspace_id: Some(workspace_id),
            },
            &[],
        )
        .await?;
    println!("\nRoles:");
    for role in &roles {
        println!("  - {} ({})", role.name, role.id);
    }

    let count = client
        .bugs()
        .get_bugs_count(
            &GetBugsRequest {
                workspace_id: Some(workspace_id),
                priority_label: Some(PriorityLabel::High),
                ..Default::default()
            },
            &[],
        )
        .await?;
    println!("\n{count} high priority bug(s):");

    let mut bugs = client.bugs().stream_bugs(
        GetBugsRequest {
            workspace_id: Some(workspace_id),
            priority_label: Some(PriorityLabel::High),
            limit: Some(50),
            ..Default::default()
        },
        Vec::new(),
    );

    while let Some(bug) = bugs.next().await {
        let bug = bug?;
        println!("  - [{}] {} ({})", bug.status, bug.title, bug.current_owner);
    }

    Ok(())
}
