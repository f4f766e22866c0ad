//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::ReportRole;
use crate::value_objects::Snowflake;

/// Domain layer errors
///
/// Every error carries a stable kind tag (see [`DomainError::code`]) so
/// callers never have to pattern-match on message text.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Authentication
    // =========================================================================
    #[error("Authentication required")]
    AuthenticationRequired,

    // =========================================================================
    // Authorization
    // =========================================================================
    #[error("Admin privileges required")]
    AdminRequired,

    #[error("No permission: {0}")]
    PermissionDenied(String),

    // =========================================================================
    // Not Found
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Schedule not found: {0}")]
    ScheduleNotFound(Snowflake),

    #[error("Report not found: {0}")]
    ReportNotFound(Snowflake),

    // =========================================================================
    // Validation
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0} slot is not assigned on this schedule")]
    SlotUnfilled(ReportRole),

    #[error("Cannot determine report role for this user")]
    CannotDetermineRole,

    // =========================================================================
    // Conflict
    // =========================================================================
    #[error("Phone number already in use")]
    PhoneAlreadyExists,

    #[error("A report already exists for this schedule slot")]
    DuplicateReportSlot,

    // =========================================================================
    // Infrastructure (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get the stable error-kind tag for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthenticationRequired => "AUTHENTICATION_REQUIRED",

            Self::AdminRequired | Self::PermissionDenied(_) => "AUTHORIZATION_DENIED",

            Self::UserNotFound(_) | Self::ScheduleNotFound(_) | Self::ReportNotFound(_) => {
                "NOT_FOUND"
            }

            Self::ValidationError(_) | Self::SlotUnfilled(_) | Self::CannotDetermineRole => {
                "VALIDATION_FAILED"
            }

            Self::PhoneAlreadyExists | Self::DuplicateReportSlot => "CONFLICT",

            Self::DatabaseError(_) | Self::InternalError(_) => "STORE_FAILURE",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ScheduleNotFound(_) | Self::ReportNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::SlotUnfilled(_) | Self::CannotDetermineRole
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired | Self::PermissionDenied(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::PhoneAlreadyExists | Self::DuplicateReportSlot)
    }
}
