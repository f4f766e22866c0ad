//! Repository traits

mod repositories;

pub use repositories::{
    ConfirmationRepository, RepoResult, ReportRepository, ScheduleQuery, ScheduleRepository,
    UpcomingWindow, UserRepository,
};
