//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Confirmation, Report, ReportRole, Schedule, ScheduleStatus, StaffRole, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by phone number (the login identifier)
    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<User>>;

    /// Check if a phone number is already taken
    async fn phone_exists(&self, phone: &str) -> RepoResult<bool>;

    /// List users holding the given role, name ascending
    async fn find_by_role(&self, role: StaffRole) -> RepoResult<Vec<User>>;

    /// Ids of users holding the given role, for part scoping
    async fn find_ids_by_role(&self, role: StaffRole) -> RepoResult<Vec<Snowflake>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Hard delete a user, true iff a row was removed
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Schedule Repository
// ============================================================================

/// Filter for the part-scoped schedule listing
#[derive(Debug, Clone, Default)]
pub struct ScheduleQuery {
    /// Exact-date filter (`YYYY-MM-DD`)
    pub date: Option<String>,
    /// Status filter; callers supply the default set when empty
    pub statuses: Vec<ScheduleStatus>,
}

/// Date window for the upcoming-schedule view
///
/// All bounds are `YYYY-MM-DD` strings compared lexically. `month_start`
/// and `month_end` are inclusive; rows dated `today` are admitted only
/// while unassigned, strictly later rows always.
#[derive(Debug, Clone)]
pub struct UpcomingWindow {
    pub month_start: String,
    pub month_end: String,
    pub today: String,
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Find schedule by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Schedule>>;

    /// Schedules owned by the given staff set (main or sub slot),
    /// filtered by `query`, sorted by time ascending
    async fn find_owned(
        &self,
        owner_ids: &[Snowflake],
        query: ScheduleQuery,
    ) -> RepoResult<Vec<Schedule>>;

    /// Upcoming schedules for the given staff set: owned or unassigned,
    /// inside the window, sorted by (date, time) ascending
    async fn find_upcoming(
        &self,
        owner_ids: &[Snowflake],
        window: UpcomingWindow,
    ) -> RepoResult<Vec<Schedule>>;

    /// Past schedules for the given staff set: owned or unassigned,
    /// dated strictly before `today`, newest created first
    async fn find_history(
        &self,
        owner_ids: &[Snowflake],
        today: &str,
    ) -> RepoResult<Vec<Schedule>>;

    /// Create a new schedule
    async fn create(&self, schedule: &Schedule) -> RepoResult<()>;

    /// Update an existing schedule
    async fn update(&self, schedule: &Schedule) -> RepoResult<()>;

    /// Transition the given schedules to confirmed and insert the seed
    /// reports, atomically. Returns the number of schedules updated.
    /// Seed inserts skip slots that already carry a report.
    async fn confirm_many(&self, ids: &[Snowflake], seeds: &[Report]) -> RepoResult<u64>;

    /// Hard delete a schedule together with its reports and
    /// confirmations, atomically. True iff the schedule row was removed.
    async fn delete_with_dependents(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Find report by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Report>>;

    /// All reports, newest reported first
    async fn find_all(&self) -> RepoResult<Vec<Report>>;

    /// Reports submitted by the given user, newest reported first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Report>>;

    /// Reports attached to the given schedule
    async fn find_by_schedule(&self, schedule_id: Snowflake) -> RepoResult<Vec<Report>>;

    /// Insert a report, or update the existing row for the same
    /// `(schedule_id, role)` slot. Returns the stored row.
    async fn upsert(&self, report: &Report) -> RepoResult<Report>;

    /// Update an existing report
    async fn update(&self, report: &Report) -> RepoResult<()>;

    /// Hard delete a report, true iff a row was removed
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;

    /// Delete the report occupying the given schedule slot, if any
    async fn delete_by_slot(&self, schedule_id: Snowflake, role: ReportRole) -> RepoResult<bool>;
}

// ============================================================================
// Confirmation Repository
// ============================================================================

#[async_trait]
pub trait ConfirmationRepository: Send + Sync {
    /// Acknowledgment rows for the given schedule
    async fn find_by_schedule(&self, schedule_id: Snowflake) -> RepoResult<Vec<Confirmation>>;

    /// Insert an acknowledgment, or update the existing row for the same
    /// `(schedule_id, user_id)`. Returns the stored row.
    async fn upsert(&self, confirmation: &Confirmation) -> RepoResult<Confirmation>;
}
