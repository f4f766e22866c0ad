//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use callsheet_common::Claims;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated session extracted from a JWT token
///
/// Carries the full claims set so handlers can pass role and part
/// information down to the services.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Validated claims from the bearer token
    pub claims: Claims,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_session(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid session token");
                ApiError::InvalidAuthFormat
            })?;

        // Reject tokens whose subject does not parse as an ID
        claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthSession { claims })
    }
}
