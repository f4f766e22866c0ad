//! Test fixtures and data generators
//!
//! Provides reusable request payloads and response shapes for the
//! integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Per-run salt so seeded phone numbers stay unique across repeated runs
/// against the same database
fn run_salt() -> u64 {
    static SALT: OnceLock<u64> = OnceLock::new();
    *SALT.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
            % 100_000
    })
}

/// Generate a unique 11-digit phone number
pub fn unique_phone() -> String {
    format!("010{:05}{:03}", run_salt(), unique_suffix() % 1_000)
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub phone: String,
    pub name: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub main_location: Option<String>,
    pub has_vehicle: bool,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create user request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub phone: String,
    pub role: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub main_location: Option<String>,
    pub has_vehicle: Option<bool>,
    pub start_date: Option<String>,
    pub birth_date: Option<String>,
    pub status: Option<String>,
    pub memo: Option<String>,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Staff {suffix}"),
            phone: unique_phone(),
            role: None,
            gender: None,
            address: None,
            main_location: None,
            has_vehicle: Some(true),
            start_date: None,
            birth_date: None,
            status: None,
            memo: None,
        }
    }

    pub fn unique_with_role(role: &str) -> Self {
        let mut request = Self::unique();
        request.role = Some(role.to_string());
        request
    }
}

/// Update user request; every field optional
#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub main_location: Option<String>,
    pub has_vehicle: Option<bool>,
    pub start_date: Option<String>,
    pub birth_date: Option<String>,
    pub status: Option<String>,
    pub memo: Option<String>,
}

/// Create schedule request
#[derive(Debug, Serialize)]
pub struct CreateScheduleRequest {
    pub main_user: Option<String>,
    pub sub_user: Option<String>,
    pub groom: String,
    pub bride: String,
    pub date: String,
    pub time: String,
    pub user_arrival_time: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub memo: Option<String>,
    pub status: Option<String>,
}

impl CreateScheduleRequest {
    /// An unassigned wedding on the given date
    pub fn unique(date: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            main_user: None,
            sub_user: None,
            groom: format!("Groom {suffix}"),
            bride: format!("Bride {suffix}"),
            date: date.to_string(),
            time: "14:00".to_string(),
            user_arrival_time: None,
            location: Some("Seoul".to_string()),
            venue: Some(format!("Hall {suffix}")),
            memo: None,
            status: None,
        }
    }

    /// A wedding with the main slot filled, created in `assigned` state
    pub fn assigned(date: &str, main_user: &str) -> Self {
        let mut request = Self::unique(date);
        request.main_user = Some(main_user.to_string());
        request.status = Some("assigned".to_string());
        request
    }
}

/// Update schedule request; every field optional
#[derive(Debug, Default, Serialize)]
pub struct UpdateScheduleRequest {
    pub main_user: Option<String>,
    pub sub_user: Option<String>,
    pub groom: Option<String>,
    pub bride: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub user_arrival_time: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub memo: Option<String>,
    pub status: Option<String>,
}

/// Batch confirm request
#[derive(Debug, Serialize)]
pub struct ConfirmSchedulesRequest {
    pub schedule_ids: Vec<String>,
}

/// Schedule response
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    pub id: String,
    #[serde(default)]
    pub main_user: Option<String>,
    #[serde(default)]
    pub sub_user: Option<String>,
    pub groom: String,
    pub bride: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub user_arrival_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    pub status: String,
    #[serde(default)]
    pub main_user_name: Option<String>,
    #[serde(default)]
    pub sub_user_name: Option<String>,
    #[serde(default)]
    pub main_report_status: Option<String>,
    #[serde(default)]
    pub sub_report_status: Option<String>,
    #[serde(default)]
    pub main_report_memo: Option<String>,
    #[serde(default)]
    pub sub_report_memo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Calendar row with acknowledgement flags
#[derive(Debug, Deserialize)]
pub struct UpcomingScheduleResponse {
    pub id: String,
    #[serde(default)]
    pub main_user: Option<String>,
    #[serde(default)]
    pub sub_user: Option<String>,
    pub groom: String,
    pub bride: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub user_arrival_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    pub status: String,
    #[serde(default)]
    pub main_user_name: Option<String>,
    #[serde(default)]
    pub sub_user_name: Option<String>,
    #[serde(default)]
    pub main_report_status: Option<String>,
    #[serde(default)]
    pub sub_report_status: Option<String>,
    pub main_user_confirmed: bool,
    pub sub_user_confirmed: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Batch confirm response
#[derive(Debug, Deserialize)]
pub struct ConfirmSchedulesResponse {
    pub success: bool,
    pub updated_count: u64,
}

/// Delete outcome
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Create report request
#[derive(Debug, Serialize)]
pub struct CreateReportRequest {
    pub schedule_id: String,
    pub status: String,
    pub role: Option<String>,
    pub estimated_time: Option<String>,
    pub current_step: Option<i32>,
    pub memo: Option<String>,
}

impl CreateReportRequest {
    /// A departure report for the given schedule, role left to the server
    pub fn departure(schedule_id: &str) -> Self {
        Self {
            schedule_id: schedule_id.to_string(),
            status: "departure".to_string(),
            role: None,
            estimated_time: Some("30m".to_string()),
            current_step: Some(2),
            memo: None,
        }
    }
}

/// Update report request; every field optional
#[derive(Debug, Default, Serialize)]
pub struct UpdateReportRequest {
    pub status: Option<String>,
    pub estimated_time: Option<String>,
    pub current_step: Option<i32>,
    pub memo: Option<String>,
}

/// Report response
#[derive(Debug, Deserialize)]
pub struct ReportResponse {
    pub id: String,
    pub schedule_id: String,
    pub user_id: String,
    pub role: String,
    pub status: String,
    #[serde(default)]
    pub estimated_time: Option<String>,
    pub current_step: i32,
    #[serde(default)]
    pub memo: Option<String>,
    pub reported_at: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Acknowledgement response
#[derive(Debug, Deserialize)]
pub struct ConfirmationResponse {
    pub id: String,
    pub schedule_id: String,
    pub user_id: String,
    pub confirmed: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
