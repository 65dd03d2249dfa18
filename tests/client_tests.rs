//! Integration tests for the request pipeline and resource services.
//!
//! Every test runs against an in-process wiremock server; response bodies
//! come from `tests/fixtures/api`.
//!
//! Run with: cargo test --test client_tests

use std::fs;
use std::path::Path;
use std::sync::{Arc, Once};
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures_util::StreamExt;
use reqwest::Method;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tapd_rs::models::*;
use tapd_rs::{ClientConfig, Error, RequestOption, RetryConfig, RetryTransport, TapdClient};

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn fixture(name: &str) -> String {
    let file = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/api")
        .join(name);
    fs::read_to_string(&file).unwrap_or_else(|e| panic!("reading {}: {e}", file.display()))
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "status": 1, "data": data, "info": "success" }))
}

fn ok_fixture(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(fixture(name), "application/json")
}

async fn basic_client(server: &MockServer) -> TapdClient {
    init_logging();
    TapdClient::with_config(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_basic_auth("client-id", "client-secret"),
    )
    .unwrap()
}

async fn token_client(server: &MockServer) -> TapdClient {
    init_logging();
    TapdClient::with_config(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_access_token("client-token"),
    )
    .unwrap()
}

fn basic(id: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{id}:{secret}")))
}

/// Send one request through `client` and return every Authorization
/// header value the server saw.
async fn authorization_sent(server: &MockServer, client: &TapdClient, opts: &[RequestOption]) -> Vec<String> {
    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ok(json!({})))
        .mount(server)
        .await;

    client
        .users()
        .get_roles(&GetRolesRequest { workspace_id: Some(1) }, opts)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = requests.last().unwrap();
    request
        .headers
        .get_all("authorization")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_basic_client_without_override() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    let sent = authorization_sent(&server, &client, &[]).await;
    assert_eq!(sent, vec![basic("client-id", "client-secret")]);
}

#[tokio::test]
async fn test_basic_client_with_basic_override() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    let sent = authorization_sent(&server, &client, &[RequestOption::basic_auth("other-id", "other-secret")]).await;
    assert_eq!(sent, vec![basic("other-id", "other-secret")]);
}

#[tokio::test]
async fn test_basic_client_with_token_override() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    let sent = authorization_sent(&server, &client, &[RequestOption::access_token("call-token")]).await;
    assert_eq!(sent, vec!["Bearer call-token".to_string()]);
}

#[tokio::test]
async fn test_token_client_without_override() {
    let server = MockServer::start().await;
    let client = token_client(&server).await;

    let sent = authorization_sent(&server, &client, &[]).await;
    assert_eq!(sent, vec!["Bearer client-token".to_string()]);
}

#[tokio::test]
async fn test_token_client_with_basic_override() {
    let server = MockServer::start().await;
    let client = token_client(&server).await;

    let sent = authorization_sent(&server, &client, &[RequestOption::basic_auth("call-id", "call-secret")]).await;
    assert_eq!(sent, vec![basic("call-id", "call-secret")]);
}

#[tokio::test]
async fn test_token_client_with_token_override() {
    let server = MockServer::start().await;
    let client = token_client(&server).await;

    let sent = authorization_sent(&server, &client, &[RequestOption::access_token("call-token")]).await;
    assert_eq!(sent, vec!["Bearer call-token".to_string()]);
}

#[tokio::test]
async fn test_later_option_wins() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    let opts = [
        RequestOption::access_token("first"),
        RequestOption::access_token("second"),
    ];
    let sent = authorization_sent(&server, &client, &opts).await;
    assert_eq!(sent, vec!["Bearer second".to_string()]);
}

// =============================================================================
// Request building
// =============================================================================

#[tokio::test]
async fn test_default_and_option_headers() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "release-bot/2.0"))
        .and(header("x-request-id", "abc-123"))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .users()
        .get_roles(
            &GetRolesRequest::default(),
            &[
                RequestOption::user_agent("release-bot/2.0"),
                RequestOption::header("X-Request-Id", "abc-123"),
            ],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_header_option_is_encoding_error() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    let err = client
        .users()
        .get_roles(&GetRolesRequest::default(), &[RequestOption::header("bad header", "x")])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Encoding(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_sends_no_body() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/tasks/count"))
        .respond_with(ok_fixture("task/get_tasks_count.json"))
        .mount(&server)
        .await;

    client
        .tasks()
        .get_tasks_count(
            &GetTasksCountRequest {
                workspace_id: Some(11112222),
                name: Some("deploy".to_string()),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_post_sends_no_query() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(header("content-type", "application/json"))
        .respond_with(ok_fixture("task/create_task.json"))
        .mount(&server)
        .await;

    client
        .tasks()
        .create_task(
            &CreateTaskRequest {
                workspace_id: Some(11112222),
                name: Some("Test Task".to_string()),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_base_url_path_prefix() {
    let server = MockServer::start().await;
    init_logging();
    let client = TapdClient::with_config(
        ClientConfig::default()
            .with_base_url(format!("{}/v2", server.uri()))
            .with_access_token("token"),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/roles"))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.users().get_roles(&GetRolesRequest::default(), &[]).await.unwrap();
}

#[tokio::test]
async fn test_raw_pipeline() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/releases/count"))
        .and(query_param("workspace_id", "7"))
        .respond_with(ok(json!({ "count": 4 })))
        .mount(&server)
        .await;

    let request = client
        .new_request(Method::GET, "releases/count", &json!({ "workspace_id": 7 }), &[])
        .unwrap();
    let (count, response) = client.send::<CountResponse>(request).await.unwrap();

    assert_eq!(count.count, 4);
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.url().path(), "/releases/count");
}

// =============================================================================
// Envelope decoding
// =============================================================================

#[tokio::test]
async fn test_error_envelope() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/workspaces/get_workspace_info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": {},
            "info": "workspace_id is required"
        })))
        .mount(&server)
        .await;

    let err = client
        .workspaces()
        .get_workspace_info(&GetWorkspaceInfoRequest::default(), &[])
        .await
        .unwrap_err();

    assert!(err.is_error_response());
    assert!(!err.is_decode_error());
    let response = err.as_error_response().unwrap();
    assert_eq!(response.status(), 0);
    assert_eq!(response.message(), "workspace_id is required");
    assert_eq!(response.response().status_code(), 200);
    assert!(err.to_string().contains("workspace_id is required"));
}

#[tokio::test]
async fn test_error_envelope_on_http_error_status() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": 401,
            "data": {},
            "info": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let err = client
        .users()
        .get_roles(&GetRolesRequest::default(), &[])
        .await
        .unwrap_err();

    let response = err.as_error_response().unwrap();
    assert_eq!(response.response().status_code(), 401);
    assert_eq!(response.message(), "Unauthorized");
}

#[tokio::test]
async fn test_empty_data_decodes_to_defaults() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/workspaces/get_custom_work_calendar"))
        .respond_with(ok(json!({})))
        .mount(&server)
        .await;

    let calendar = client
        .workspaces()
        .get_custom_work_calendar(&GetCustomWorkCalendarRequest::default(), &[])
        .await
        .unwrap();
    assert_eq!(calendar, CustomWorkCalendar::default());
}

#[tokio::test]
async fn test_malformed_envelope() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client
        .users()
        .get_roles(&GetRolesRequest::default(), &[])
        .await
        .unwrap_err();
    assert!(err.is_decode_error());
    assert!(!err.is_error_response());
}

#[tokio::test]
async fn test_malformed_data() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/bugs"))
        .respond_with(ok(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let err = client
        .bugs()
        .get_bugs(&GetBugsRequest::default(), &[])
        .await
        .unwrap_err();
    assert!(err.is_decode_error());
}

// =============================================================================
// Services
// =============================================================================

#[tokio::test]
async fn test_get_bugs() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/bugs"))
        .and(query_param("workspace_id", "11112222"))
        .and(query_param("priority_label", "High"))
        .respond_with(ok_fixture("bug/get_bugs.json"))
        .expect(1)
        .mount(&server)
        .await;

    let bugs = client
        .bugs()
        .get_bugs(
            &GetBugsRequest {
                workspace_id: Some(11112222),
                priority_label: Some(PriorityLabel::High),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();

    assert_eq!(bugs.len(), 1);
    let bug = &bugs[0];
    assert_eq!(bug.id, "11111222333001000268");
    assert_eq!(bug.title, "计算不正确");
    assert_eq!(bug.description.as_deref(), Some("<strong>前置条件</div><br  />"));
    assert_eq!(bug.priority, "");
    assert_eq!(bug.severity, "");
    assert_eq!(bug.module, "");
    assert_eq!(bug.status, "closed");
    assert_eq!(bug.reporter, "测试人员");
    assert_eq!(bug.created, "2018-07-26 17:20:02");
    assert_eq!(bug.bug_type, "项目缺陷");
    assert_eq!(bug.resolved.as_deref(), Some("2018-07-26 18:09:42"));
    assert_eq!(bug.closed.as_deref(), Some("2018-08-07 10:05:19"));
    assert_eq!(bug.modified, "2024-12-23 10:49:16");
    assert_eq!(bug.last_modify, "李四");
    assert_eq!(bug.auditer, "");
    assert_eq!(bug.de, "张三;");
    assert_eq!(bug.fixer, "张三");
    assert_eq!(bug.release_id, None);
}

#[tokio::test]
async fn test_create_task() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_json(json!({
            "workspace_id": 11112222,
            "name": "Test Task",
            "description": "This is a test task",
            "creator": "testuser"
        })))
        .respond_with(ok_fixture("task/create_task.json"))
        .expect(1)
        .mount(&server)
        .await;

    let task = client
        .tasks()
        .create_task(
            &CreateTaskRequest {
                workspace_id: Some(11112222),
                name: Some("Test Task".to_string()),
                description: Some("This is a test task".to_string()),
                creator: Some("testuser".to_string()),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();

    assert_eq!(task.id, "1111112222001138994");
    assert_eq!(task.name, "Test Task");
    assert_eq!(task.status, "open");
    assert_eq!(task.task_status(), Some(TaskStatus::Open));
    assert_eq!(task.created, "2025-06-26 21:49:02");
}

#[tokio::test]
async fn test_get_tasks_count() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/tasks/count"))
        .and(query_param("workspace_id", "11112222"))
        .and(query_param("status", "open|done"))
        .respond_with(ok_fixture("task/get_tasks_count.json"))
        .expect(1)
        .mount(&server)
        .await;

    let count = client
        .tasks()
        .get_tasks_count(
            &GetTasksCountRequest {
                workspace_id: Some(11112222),
                status: Some(Enum::new([TaskStatus::Open, TaskStatus::Done])),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();
    assert_eq!(count, 36);
}

#[tokio::test]
async fn test_get_task_changes() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/task_changes"))
        .and(query_param("workspace_id", "11112222"))
        .respond_with(ok_fixture("task/get_task_changes.json"))
        .mount(&server)
        .await;

    let changes = client
        .tasks()
        .get_task_changes(
            &GetTaskChangesRequest {
                workspace_id: Some(11112222),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();

    let change = changes
        .iter()
        .find(|c| c.id == "1111112222001019140")
        .unwrap();
    let remain = change.field_changes.iter().find(|f| f.field == "remain").unwrap();
    assert_eq!(remain.value_before, "1");
    assert_eq!(remain.value_after, "0");
    assert_eq!(remain.field_label, "剩余工时");

    let completed = change
        .field_changes
        .iter()
        .find(|f| f.field == "effort_completed")
        .unwrap();
    assert_eq!(completed.value_before, "0");
    assert_eq!(completed.value_after, "1");
    assert_eq!(completed.field_label, "完成工时");
}

#[tokio::test]
async fn test_get_task_changes_count() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/task_changes/count"))
        .and(query_param("workspace_id", "11112222"))
        .respond_with(ok_fixture("task/get_task_changes_count.json"))
        .mount(&server)
        .await;

    let count = client
        .tasks()
        .get_task_changes_count(
            &GetTaskChangesCountRequest {
                workspace_id: Some(11112222),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();
    assert_eq!(count, 189);
}

#[tokio::test]
async fn test_get_iterations() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/iterations"))
        .and(query_param("workspace_id", "111"))
        .and(query_param("order", "created desc"))
        .respond_with(ok_fixture("iteration/get_iterations.json"))
        .mount(&server)
        .await;

    let iterations = client
        .iterations()
        .get_iterations(
            &GetIterationsRequest {
                workspace_id: Some(111),
                order: Some(Order::desc("created")),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();

    let iteration = &iterations[0];
    assert_eq!(iteration.id, "1111112222001002270");
    assert_eq!(iteration.name, "迭代1");
    assert_eq!(iteration.workspace_id, "111");
    assert_eq!(iteration.start_date, "2024-12-01");
    assert_eq!(iteration.end_date, "2024-12-31");
    assert_eq!(iteration.status, "open");
    assert_eq!(iteration.creator, "张三");
    assert_eq!(iteration.entity_type, "iteration");
    assert_eq!(iteration.parent_id, "0");
    assert_eq!(iteration.ancestor_id, "1111112222001002270");
    assert_eq!(iteration.path, "1111112222001002270:");
    assert_eq!(iteration.workitem_type_id, "1111112222001000057");
    assert_eq!(iteration.templated_id, "1111112222001000062");
    assert_eq!(iteration.description, None);
}

#[tokio::test]
async fn test_get_workitem_types() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/iterations/workitem_types"))
        .and(query_param("workspace_id", "111"))
        .respond_with(ok_fixture("iteration/get_workitem_types.json"))
        .mount(&server)
        .await;

    let types = client
        .iterations()
        .get_workitem_types(&GetWorkitemTypesRequest { workspace_id: Some(111) }, &[])
        .await
        .unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "默认类别");
    assert_eq!(types[0].entity_type, "iteration");
}

#[tokio::test]
async fn test_get_users() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/workspaces/users"))
        .and(query_param("workspace_id", "11112222"))
        .and(query_param("user", "张三,李四"))
        .and(query_param("fields", "id,name"))
        .respond_with(ok_fixture("workspace/get_users.json"))
        .expect(1)
        .mount(&server)
        .await;

    let users = client
        .workspaces()
        .get_users(
            &GetUsersRequest {
                workspace_id: Some(11112222),
                user: Some(Multi::new(["张三".to_string(), "李四".to_string()])),
                fields: Some(Multi::new(["id".to_string(), "name".to_string()])),
            },
            &[],
        )
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].user, "张三");
    assert_eq!(users[1].role_id.len(), 2);
    assert_eq!(users[1].join_project_time, None);
}

#[tokio::test]
async fn test_get_workspace_info() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/workspaces/get_workspace_info"))
        .and(query_param("workspace_id", "11112222"))
        .respond_with(ok_fixture("workspace/get_workspace_info.json"))
        .mount(&server)
        .await;

    let workspace = client
        .workspaces()
        .get_workspace_info(
            &GetWorkspaceInfoRequest {
                workspace_id: Some(11112222),
            },
            &[],
        )
        .await
        .unwrap();
    assert_eq!(workspace.id, "11112222");
    assert_eq!(workspace.name, "示例项目");
    assert_eq!(workspace.company_id, "20000000");
    assert_eq!(workspace.begin_date, None);
}

#[tokio::test]
async fn test_get_member_activity_log() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/workspaces/member_activity_log"))
        .and(query_param("workspace_id", "11112222"))
        .and(query_param("operate_type", "download"))
        .and(query_param("operator_object", "attachment"))
        .respond_with(ok_fixture("workspace/get_member_activity_log.json"))
        .mount(&server)
        .await;

    let page = client
        .workspaces()
        .get_member_activity_log(
            &GetMemberActivityLogRequest {
                workspace_id: Some(11112222),
                operate_type: Some(OperateType::Download),
                operator_object: Some(OperateObject::Attachment),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();

    assert_eq!(page.total_items, 1);
    assert_eq!(page.per_page, "20");
    assert_eq!(page.records[0].operation(), Some(OperateType::Download));
    assert_eq!(page.records[0].object(), Some(OperateObject::Attachment));
    assert_eq!(page.operate_types.get("download").map(String::as_str), Some("下载"));
}

#[tokio::test]
async fn test_create_comment() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/comments"))
        .and(body_json(json!({
            "workspace_id": 11112222,
            "description": "<p>123</p>",
            "author": "张三",
            "entry_type": "tasks",
            "entry_id": 1111112222001116478i64
        })))
        .respond_with(ok_fixture("comment/create_comment.json"))
        .expect(1)
        .mount(&server)
        .await;

    let comment = client
        .comments()
        .create_comment(
            &CreateCommentRequest {
                workspace_id: Some(11112222),
                description: Some("<p>123</p>".to_string()),
                author: Some("张三".to_string()),
                entry_type: Some(CommentEntryType::Tasks),
                entry_id: Some(1111112222001116478),
                ..Default::default()
            },
            &[],
        )
        .await
        .unwrap();

    assert_eq!(comment.id, "1111112222001036008");
    assert_eq!(comment.comment_entry_type(), Some(CommentEntryType::Tasks));
}

#[tokio::test]
async fn test_get_roles() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .and(query_param("workspace_id", "11112222"))
        .respond_with(ok_fixture("user/get_roles.json"))
        .mount(&server)
        .await;

    let roles = client
        .users()
        .get_roles(&GetRolesRequest { workspace_id: Some(11112222) }, &[])
        .await
        .unwrap();

    assert_eq!(
        roles,
        vec![
            UserRole {
                id: "1000000000000000001".to_string(),
                name: "管理员".to_string(),
            },
            UserRole {
                id: "1000000000000000002".to_string(),
                name: "开发人员".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_get_roles_numeric_order() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ok(json!({ "10": "测试", "9": "开发", "custom": "访客", "100": "管理员" })))
        .mount(&server)
        .await;

    let roles = client
        .users()
        .get_roles(&GetRolesRequest { workspace_id: Some(1) }, &[])
        .await
        .unwrap();

    let ids: Vec<_> = roles.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "10", "100", "custom"]);
}

// =============================================================================
// Transport and pagination
// =============================================================================

#[tokio::test]
async fn test_retry_transport_recovers() {
    let server = MockServer::start().await;
    init_logging();

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ok(json!({ "1": "管理员" })))
        .mount(&server)
        .await;

    let retry = RetryConfig::default()
        .with_initial_backoff(Duration::from_millis(1))
        .with_max_backoff(Duration::from_millis(5));
    let transport = RetryTransport::new(reqwest::Client::new(), retry);
    let client = TapdClient::with_transport(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_access_token("token"),
        Arc::new(transport),
    )
    .unwrap();

    let roles = client.users().get_roles(&GetRolesRequest::default(), &[]).await.unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_retry_transport_discards_error_bodies() {
    let server = MockServer::start().await;
    init_logging();

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(502).set_body_string("x".repeat(64 * 1024)))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ok(json!({ "1": "管理员" })))
        .mount(&server)
        .await;

    let retry = RetryConfig::default()
        .with_initial_backoff(Duration::from_millis(1))
        .with_max_backoff(Duration::from_millis(5));
    let http = reqwest::Client::builder().pool_max_idle_per_host(1).build().unwrap();
    let client = TapdClient::with_transport(
        ClientConfig::default()
            .with_base_url(server.uri())
            .with_access_token("token"),
        Arc::new(RetryTransport::new(http, retry)),
    )
    .unwrap();

    let roles = client.users().get_roles(&GetRolesRequest::default(), &[]).await.unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_core_client_does_not_retry() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client
        .users()
        .get_roles(&GetRolesRequest::default(), &[])
        .await
        .unwrap_err();
    assert!(err.is_decode_error());
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

fn bug_page(ids: &[&str]) -> ResponseTemplate {
    let items: Vec<_> = ids
        .iter()
        .map(|id| json!({ "Bug": { "id": id, "title": format!("bug {id}") } }))
        .collect();
    ok(json!(items))
}

#[tokio::test]
async fn test_stream_bugs() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/bugs"))
        .and(query_param("workspace_id", "11112222"))
        .and(query_param("limit", "2"))
        .and(query_param("page", "1"))
        .respond_with(bug_page(&["1", "2"]))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bugs"))
        .and(query_param("limit", "2"))
        .and(query_param("page", "2"))
        .respond_with(bug_page(&["3"]))
        .expect(1)
        .mount(&server)
        .await;

    let bugs: Vec<Bug> = client
        .bugs()
        .stream_bugs(
            GetBugsRequest {
                workspace_id: Some(11112222),
                limit: Some(2),
                page: Some(9),
                ..Default::default()
            },
            Vec::new(),
        )
        .map(|bug| bug.unwrap())
        .collect()
        .await;

    let ids: Vec<_> = bugs.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_stream_stops_on_error() {
    let server = MockServer::start().await;
    let client = basic_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": {},
            "info": "quota exceeded"
        })))
        .mount(&server)
        .await;

    let results: Vec<_> = client
        .tasks()
        .stream_tasks(GetTasksRequest::default(), Vec::new())
        .collect()
        .await;

    assert_eq!(results.len(), 1);
    assert!(results[0].as_ref().unwrap_err().is_error_response());
}
