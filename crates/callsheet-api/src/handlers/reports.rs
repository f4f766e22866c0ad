//! Report handlers
//!
//! Endpoints for progress report submission and lookup.

use axum::{
    extract::{Path, State},
    Json,
};
use callsheet_service::{
    CreateReportRequest, DeleteResponse, ReportResponse, ReportService, UpdateReportRequest,
};

use crate::extractors::{AuthSession, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List reports visible to the caller
///
/// GET /reports
pub async fn list_reports(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.list_reports(&session.claims).await?;
    Ok(Json(response))
}

/// Get a single report
///
/// GET /reports/{report_id}
pub async fn get_report(
    State(state): State<AppState>,
    session: AuthSession,
    Path(report_id): Path<String>,
) -> ApiResult<Json<ReportResponse>> {
    let report_id = report_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid report_id format"))?;

    let service = ReportService::new(state.service_context());
    let response = service.get_report(&session.claims, report_id).await?;
    Ok(Json(response))
}

/// Submit a progress report
///
/// POST /reports
pub async fn create_report(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(request): ValidatedJson<CreateReportRequest>,
) -> ApiResult<Created<Json<ReportResponse>>> {
    let service = ReportService::new(state.service_context());
    let response = service.create_report(&session.claims, request).await?;
    Ok(Created(Json(response)))
}

/// Correct a report's fields
///
/// PATCH /reports/{report_id}
pub async fn update_report(
    State(state): State<AppState>,
    session: AuthSession,
    Path(report_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateReportRequest>,
) -> ApiResult<Json<ReportResponse>> {
    let report_id = report_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid report_id format"))?;

    let service = ReportService::new(state.service_context());
    let response = service
        .update_report(&session.claims, report_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a report the caller owns
///
/// DELETE /reports/{report_id}
pub async fn delete_report(
    State(state): State<AppState>,
    session: AuthSession,
    Path(report_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let report_id = report_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid report_id format"))?;

    let service = ReportService::new(state.service_context());
    let deleted = service.delete_report(&session.claims, report_id).await?;
    Ok(Json(DeleteResponse { deleted }))
}
