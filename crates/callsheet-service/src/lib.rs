//! # callsheet-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface for API handlers
pub use dto::{
    ConfirmSchedulesRequest, ConfirmSchedulesResponse, ConfirmationResponse, CreateReportRequest,
    CreateScheduleRequest, CreateUserRequest, DeleteResponse, HealthResponse, LoginRequest,
    LoginResponse, PatchScheduleStatusRequest, ReadinessResponse, ReportResponse, ScheduleResponse,
    UpcomingScheduleResponse, UpdateReportRequest, UpdateScheduleRequest, UpdateUserRequest,
    UploadStatusResponse, UserResponse,
};
pub use services::{
    AuthService, PermissionService, ReportService, ScheduleService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
