//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod permission;
pub mod report;
pub mod schedule;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use permission::{require_admin, PermissionService};
pub use report::ReportService;
pub use schedule::ScheduleService;
pub use user::UserService;
