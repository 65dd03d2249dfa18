//! Data models for the TAPD API.
//!
//! Models are organized by resource:
//!
//! - [`params`] - Query parameter encoders (`Multi`, `Enum`, `Order`)
//! - [`enums`] - Enumerated filter values
//! - [`story`] - Stories (requirements)
//! - [`bug`] - Bugs
//! - [`task`] - Tasks and their change history
//! - [`iteration`] - Iterations, categories and templates
//! - [`comment`] - Comments
//! - [`workspace`] - Workspaces, members, activity logs and calendars
//! - [`user`] - Roles
//!
//! Entity structs decode leniently: TAPD returns most values as strings and
//! omits fields freely, so missing keys fall back to defaults.

pub mod params;
pub mod enums;
pub mod story;
pub mod bug;
pub mod task;
pub mod iteration;
pub mod comment;
pub mod workspace;
pub mod user;

pub use params::*;
pub use enums::*;
pub use story::*;
pub use bug::*;
pub use task::*;
pub use iteration::*;
pub use comment::*;
pub use workspace::*;
pub use user::*;
