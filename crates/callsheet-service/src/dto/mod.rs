//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ConfirmSchedulesRequest, CreateReportRequest, CreateScheduleRequest, CreateUserRequest,
    LoginRequest, PatchScheduleStatusRequest, UpdateReportRequest, UpdateScheduleRequest,
    UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ConfirmSchedulesResponse, ConfirmationResponse, DeleteResponse, HealthChecks, HealthResponse,
    LoginResponse, ReadinessResponse, ReportResponse, ScheduleResponse, UpcomingScheduleResponse,
    UploadStatusResponse, UserResponse,
};

// Re-export mappers and helper structs
pub use mappers::{split_reports, ScheduleWithDetails, UpcomingScheduleWithDetails};
