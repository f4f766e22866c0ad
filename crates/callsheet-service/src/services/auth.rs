//! Authentication service
//!
//! The `(phone, name)` pair is the only credential; a successful lookup
//! issues a stateless session token.

use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with phone and name
    ///
    /// Lookup failures and name mismatches are indistinguishable to the
    /// caller so the endpoint cannot be used as a phone oracle.
    #[instrument(skip(self, request), fields(phone = %request.phone))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_phone(&request.phone)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown phone");
                ServiceError::App(callsheet_common::AppError::InvalidCredentials)
            })?;

        if user.name != request.name {
            warn!(user_id = %user.id, "Login failed: name mismatch");
            return Err(ServiceError::App(
                callsheet_common::AppError::InvalidCredentials,
            ));
        }

        let token = self
            .ctx
            .jwt_service()
            .issue_session(user.id, &user.name, &user.phone, user.role)?;

        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginResponse::new(token, UserResponse::from(&user)))
    }
}
