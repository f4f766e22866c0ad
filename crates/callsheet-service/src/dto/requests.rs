//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Snowflake ids arrive as decimal strings and are parsed in the service layer.

use callsheet_core::entities::{ReportRole, ReportStatus, ScheduleStatus, StaffRole, UserStatus};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request; the `(phone, name)` pair is the credential
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 9, max = 20, message = "Phone must be 9-20 characters"))]
    pub phone: String,

    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(min = 9, max = 20, message = "Phone must be 9-20 characters"))]
    pub phone: String,

    /// Role; defaults to PHOTOGRAPHER when omitted
    pub role: Option<StaffRole>,

    #[validate(length(max = 20, message = "Gender must be at most 20 characters"))]
    pub gender: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "Main location must be at most 100 characters"))]
    pub main_location: Option<String>,

    pub has_vehicle: Option<bool>,

    #[validate(length(equal = 10, message = "Start date must be YYYY-MM-DD"))]
    pub start_date: Option<String>,

    #[validate(length(equal = 10, message = "Birth date must be YYYY-MM-DD"))]
    pub birth_date: Option<String>,

    pub status: Option<UserStatus>,

    #[validate(length(max = 1000, message = "Memo must be at most 1000 characters"))]
    pub memo: Option<String>,
}

/// Update user request
///
/// Supplied-but-empty strings are skipped by the merge; `has_vehicle`
/// is applied whenever present, including `false`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 50, message = "Name must be at most 50 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    pub role: Option<StaffRole>,

    #[validate(length(max = 20, message = "Gender must be at most 20 characters"))]
    pub gender: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "Main location must be at most 100 characters"))]
    pub main_location: Option<String>,

    pub has_vehicle: Option<bool>,

    #[validate(length(max = 10, message = "Start date must be at most 10 characters"))]
    pub start_date: Option<String>,

    #[validate(length(max = 10, message = "Birth date must be at most 10 characters"))]
    pub birth_date: Option<String>,

    pub status: Option<UserStatus>,

    #[validate(length(max = 1000, message = "Memo must be at most 1000 characters"))]
    pub memo: Option<String>,
}

// ============================================================================
// Schedule Requests
// ============================================================================

/// Create schedule request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    /// Main slot user id (Snowflake as string)
    pub main_user: Option<String>,

    /// Sub slot user id (Snowflake as string)
    pub sub_user: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Groom name must be 1-100 characters"))]
    pub groom: String,

    #[validate(length(min = 1, max = 100, message = "Bride name must be 1-100 characters"))]
    pub bride: String,

    #[validate(length(equal = 10, message = "Date must be YYYY-MM-DD"))]
    pub date: String,

    #[validate(length(min = 1, max = 16, message = "Time must be 1-16 characters"))]
    pub time: String,

    #[validate(length(max = 16, message = "Arrival time must be at most 16 characters"))]
    pub user_arrival_time: Option<String>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 200, message = "Venue must be at most 200 characters"))]
    pub venue: Option<String>,

    #[validate(length(max = 1000, message = "Memo must be at most 1000 characters"))]
    pub memo: Option<String>,

    /// Assignment status; defaults to `unassigned` when omitted
    pub status: Option<ScheduleStatus>,
}

/// Update schedule request; only supplied fields overwrite
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateScheduleRequest {
    /// Main slot user id (Snowflake as string)
    pub main_user: Option<String>,

    /// Sub slot user id (Snowflake as string)
    pub sub_user: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Groom name must be 1-100 characters"))]
    pub groom: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Bride name must be 1-100 characters"))]
    pub bride: Option<String>,

    #[validate(length(equal = 10, message = "Date must be YYYY-MM-DD"))]
    pub date: Option<String>,

    #[validate(length(min = 1, max = 16, message = "Time must be 1-16 characters"))]
    pub time: Option<String>,

    #[validate(length(max = 16, message = "Arrival time must be at most 16 characters"))]
    pub user_arrival_time: Option<String>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 200, message = "Venue must be at most 200 characters"))]
    pub venue: Option<String>,

    #[validate(length(max = 1000, message = "Memo must be at most 1000 characters"))]
    pub memo: Option<String>,

    pub status: Option<ScheduleStatus>,
}

/// Bulk confirm request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmSchedulesRequest {
    /// Schedule ids to confirm (Snowflakes as strings)
    #[validate(length(min = 1, message = "At least one schedule id is required"))]
    pub schedule_ids: Vec<String>,
}

/// Direct status patch request
#[derive(Debug, Clone, Deserialize)]
pub struct PatchScheduleStatusRequest {
    pub status: ScheduleStatus,
}

// ============================================================================
// Report Requests
// ============================================================================

/// Create (or re-submit) a progress report
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReportRequest {
    /// Owning schedule id (Snowflake as string)
    pub schedule_id: String,

    pub status: ReportStatus,

    /// Assignment slot; only admins may supply it, staff get the slot
    /// inferred from the schedule
    pub role: Option<ReportRole>,

    #[validate(length(max = 16, message = "Estimated time must be at most 16 characters"))]
    pub estimated_time: Option<String>,

    #[validate(range(min = 0, max = 3, message = "Step must be between 0 and 3"))]
    pub current_step: Option<i32>,

    #[validate(length(max = 1000, message = "Memo must be at most 1000 characters"))]
    pub memo: Option<String>,
}

/// Update report request; only supplied fields overwrite
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReportRequest {
    pub status: Option<ReportStatus>,

    #[validate(length(max = 16, message = "Estimated time must be at most 16 characters"))]
    pub estimated_time: Option<String>,

    #[validate(range(min = 0, max = 3, message = "Step must be between 0 and 3"))]
    pub current_step: Option<i32>,

    #[validate(length(max = 1000, message = "Memo must be at most 1000 characters"))]
    pub memo: Option<String>,
}
