//! Database models - SQLx-compatible structs for PostgreSQL tables

mod confirmation;
mod report;
mod schedule;
mod user;

pub use confirmation::ConfirmationModel;
pub use report::ReportModel;
pub use schedule::ScheduleModel;
pub use user::UserModel;
