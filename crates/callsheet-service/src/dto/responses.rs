//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use callsheet_common::SessionToken;
use callsheet_core::entities::{ReportRole, ReportStatus, ScheduleStatus, StaffRole, UserStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Login response with the session token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl LoginResponse {
    pub fn new(token: SessionToken, user: UserResponse) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub role: StaffRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_location: Option<String>,
    pub has_vehicle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Schedule Responses
// ============================================================================

/// Schedule response
///
/// `main_user`/`sub_user` always carry the raw ids; resolved display names
/// travel in the separately named `*_name` fields.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_user: Option<String>,
    pub groom: String,
    pub bride: String,
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub status: ScheduleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_report_status: Option<ReportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_report_status: Option<ReportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_report_memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_report_memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upcoming-view schedule response with per-slot acknowledgment flags
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingScheduleResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_user: Option<String>,
    pub groom: String,
    pub bride: String,
    pub date: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub status: ScheduleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_report_status: Option<ReportStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_report_status: Option<ReportStatus>,
    pub main_user_confirmed: bool,
    pub sub_user_confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bulk confirm result; `updated_count` counts only the valid subset
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmSchedulesResponse {
    pub success: bool,
    pub updated_count: u64,
}

/// Delete result; `false` covers both not-found and not-owned
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

// ============================================================================
// Report Responses
// ============================================================================

/// Report response
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: String,
    pub schedule_id: String,
    pub user_id: String,
    pub role: ReportRole,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    pub current_step: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Confirmation Responses
// ============================================================================

/// Acknowledgment response
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationResponse {
    pub id: String,
    pub schedule_id: String,
    pub user_id: String,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

/// Media-host configuration probe response
#[derive(Debug, Clone, Serialize)]
pub struct UploadStatusResponse {
    pub status: String,
    pub cloud_name: String,
}
