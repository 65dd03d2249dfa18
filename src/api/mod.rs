//! API service modules for TAPD endpoints.
//!
//! Each service provides methods for one resource family. Every method
//! takes a typed request and a slice of per-call [`RequestOption`]s.
//!
//! [`RequestOption`]: crate::client::RequestOption

mod bugs;
mod comments;
mod iterations;
mod stories;
mod tasks;
mod users;
mod workspaces;

pub use bugs::BugsService;
pub use comments::CommentsService;
pub use iterations::IterationsService;
pub use stories::StoriesService;
pub use tasks::TasksService;
pub use users::UsersService;
pub use workspaces::WorkspacesService;
