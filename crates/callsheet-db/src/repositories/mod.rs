//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in callsheet-core.
//! Each repository handles database operations for a specific domain entity.

mod confirmation;
mod error;
mod report;
mod schedule;
mod user;

pub use confirmation::PgConfirmationRepository;
pub use report::PgReportRepository;
pub use schedule::PgScheduleRepository;
pub use user::PgUserRepository;
