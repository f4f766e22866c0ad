//! Upload handlers
//!
//! Media uploads go directly to the external host; this service only
//! exposes whether that host's credentials are configured.

use axum::{extract::State, Json};
use callsheet_common::AppError;
use callsheet_service::UploadStatusResponse;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Media-host configuration probe
///
/// GET /uploads/status
pub async fn upload_status(
    State(state): State<AppState>,
) -> ApiResult<Json<UploadStatusResponse>> {
    let media = &state.config().media;

    if !media.is_ready() {
        return Err(ApiError::App(AppError::Config(
            "Media host credentials are not configured".to_string(),
        )));
    }

    Ok(Json(UploadStatusResponse {
        status: "ready".to_string(),
        cloud_name: media.cloud_name.clone().unwrap_or_default(),
    }))
}
