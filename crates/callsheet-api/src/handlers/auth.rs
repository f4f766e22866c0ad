//! Authentication handlers
//!
//! Endpoint for phone-and-name login.

use axum::{extract::State, Json};
use callsheet_service::{AuthService, LoginRequest, LoginResponse};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Login with phone number and name
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
