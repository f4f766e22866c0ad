//! Schedule handlers
//!
//! Endpoints for schedule CRUD, the calendar views, bulk confirmation,
//! and slot acknowledgment.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use callsheet_core::entities::ScheduleStatus;
use callsheet_service::{
    ConfirmSchedulesRequest, ConfirmSchedulesResponse, ConfirmationResponse,
    CreateScheduleRequest, DeleteResponse, PatchScheduleStatusRequest, ReportResponse,
    ReportService, ScheduleResponse, ScheduleService, UpcomingScheduleResponse,
    UpdateScheduleRequest,
};

use crate::extractors::{AuthSession, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Query parameters for the schedule list
#[derive(Debug, serde::Deserialize)]
pub struct ScheduleListQuery {
    pub date: Option<String>,
    pub status: Option<ScheduleStatus>,
}

/// List the caller's part's schedules
///
/// GET /schedules
pub async fn list_schedules(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<ScheduleListQuery>,
) -> ApiResult<Json<Vec<ScheduleResponse>>> {
    let service = ScheduleService::new(state.service_context());
    let response = service
        .list_schedules(&session.claims, query.date, query.status)
        .await?;
    Ok(Json(response))
}

/// Current-month upcoming schedules with acknowledgment flags
///
/// GET /schedules/list
pub async fn upcoming_schedules(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<UpcomingScheduleResponse>>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.upcoming_schedules(&session.claims).await?;
    Ok(Json(response))
}

/// Past schedules, newest created first
///
/// GET /schedules/history
pub async fn history_schedules(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<ScheduleResponse>>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.history_schedules(&session.claims).await?;
    Ok(Json(response))
}

/// Get a single schedule
///
/// GET /schedules/{schedule_id}
pub async fn get_schedule(
    State(state): State<AppState>,
    session: AuthSession,
    Path(schedule_id): Path<String>,
) -> ApiResult<Json<ScheduleResponse>> {
    let schedule_id = schedule_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid schedule_id format"))?;

    let service = ScheduleService::new(state.service_context());
    let response = service.get_schedule(&session.claims, schedule_id).await?;
    Ok(Json(response))
}

/// Create a schedule
///
/// POST /schedules
pub async fn create_schedule(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(request): ValidatedJson<CreateScheduleRequest>,
) -> ApiResult<Created<Json<ScheduleResponse>>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.create_schedule(&session.claims, request).await?;
    Ok(Created(Json(response)))
}

/// Update a schedule
///
/// PATCH /schedules/{schedule_id}
pub async fn update_schedule(
    State(state): State<AppState>,
    session: AuthSession,
    Path(schedule_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateScheduleRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let schedule_id = schedule_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid schedule_id format"))?;

    let service = ScheduleService::new(state.service_context());
    let response = service
        .update_schedule(&session.claims, schedule_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a schedule with its reports and acknowledgments
///
/// DELETE /schedules/{schedule_id}
pub async fn delete_schedule(
    State(state): State<AppState>,
    session: AuthSession,
    Path(schedule_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let schedule_id = schedule_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid schedule_id format"))?;

    let service = ScheduleService::new(state.service_context());
    let deleted = service.delete_schedule(&session.claims, schedule_id).await?;
    Ok(Json(DeleteResponse { deleted }))
}

/// Confirm a batch of assigned schedules
///
/// POST /schedules/confirm
pub async fn confirm_schedules(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(request): ValidatedJson<ConfirmSchedulesRequest>,
) -> ApiResult<Json<ConfirmSchedulesResponse>> {
    let service = ScheduleService::new(state.service_context());
    let response = service.confirm_schedules(&session.claims, request).await?;
    Ok(Json(response))
}

/// Patch the assignment status directly
///
/// PATCH /schedules/{schedule_id}/status
pub async fn patch_schedule_status(
    State(state): State<AppState>,
    session: AuthSession,
    Path(schedule_id): Path<String>,
    Json(request): Json<PatchScheduleStatusRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let schedule_id = schedule_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid schedule_id format"))?;

    let service = ScheduleService::new(state.service_context());
    let response = service
        .patch_status(&session.claims, schedule_id, request.status)
        .await?;
    Ok(Json(response))
}

/// Acknowledge an assignment the caller holds
///
/// POST /schedules/{schedule_id}/acknowledge
pub async fn acknowledge_schedule(
    State(state): State<AppState>,
    session: AuthSession,
    Path(schedule_id): Path<String>,
) -> ApiResult<Json<ConfirmationResponse>> {
    let schedule_id = schedule_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid schedule_id format"))?;

    let service = ScheduleService::new(state.service_context());
    let response = service.acknowledge(&session.claims, schedule_id).await?;
    Ok(Json(response))
}

/// Reports attached to a schedule
///
/// GET /schedules/{schedule_id}/reports
pub async fn get_schedule_reports(
    State(state): State<AppState>,
    session: AuthSession,
    Path(schedule_id): Path<String>,
) -> ApiResult<Json<Vec<ReportResponse>>> {
    let schedule_id = schedule_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid schedule_id format"))?;

    let service = ReportService::new(state.service_context());
    let response = service
        .reports_by_schedule(&session.claims, schedule_id)
        .await?;
    Ok(Json(response))
}
