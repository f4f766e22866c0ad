//! Domain entities - core business objects

mod confirmation;
mod report;
mod schedule;
mod user;

pub use confirmation::Confirmation;
pub use report::{Report, ReportRole, ReportStatus};
pub use schedule::{Schedule, ScheduleStatus};
pub use user::{Part, StaffRole, User, UserStatus};
