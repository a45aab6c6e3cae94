pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod utils;

pub use auth::Auth;
pub use guard::{Decision, GuardProps, PermissionGuard, Rendered, Requirement};
pub use models::permission::Permission;
pub use models::user::SessionUser;
