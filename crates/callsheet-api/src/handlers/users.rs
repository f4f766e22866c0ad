//! User handlers
//!
//! Endpoints for the session profile and admin staff management.

use axum::{
    extract::{Path, State},
    Json,
};
use callsheet_service::{
    CreateUserRequest, DeleteResponse, ReportResponse, ReportService, UpdateUserRequest,
    UserResponse, UserService,
};

use crate::extractors::{AuthSession, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(&session.claims).await?;
    Ok(Json(response))
}

/// List the staff of the caller's part
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_staff(&session.claims).await?;
    Ok(Json(response))
}

/// Register a staff member in the caller's part
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(&session.claims, request).await?;
    Ok(Created(Json(response)))
}

/// Update a user's profile fields
///
/// PATCH /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    session: AuthSession,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = UserService::new(state.service_context());
    let response = service.update_user(&session.claims, user_id, request).await?;
    Ok(Json(response))
}

/// Delete a user
///
/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    session: AuthSession,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = UserService::new(state.service_context());
    let deleted = service.delete_user(&session.claims, user_id).await?;
    Ok(Json(DeleteResponse { deleted }))
}

/// Get the reports one user has submitted
///
/// GET /users/{user_id}/reports
pub async fn get_user_reports(
    State(state): State<AppState>,
    session: AuthSession,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<ReportResponse>>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = ReportService::new(state.service_context());
    let response = service.reports_by_user(&session.claims, user_id).await?;
    Ok(Json(response))
}
