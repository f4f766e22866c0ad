//! User service
//!
//! Staff account management, part-scoped listing, and the current-user
//! lookup.

use callsheet_common::Claims;
use callsheet_core::entities::User;
use callsheet_core::Snowflake;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::require_admin;

/// The only role value the delete gate accepts. No stored role equals
/// this literal, so the path stays closed for part admins.
const USER_DELETE_ROLE: &str = "ADMIN";

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated user's own record
    #[instrument(skip(self, session))]
    pub async fn get_current_user(&self, session: &Claims) -> ServiceResult<UserResponse> {
        let user_id = session.user_id()?;
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// List the staff belonging to the caller's part, name ascending
    #[instrument(skip(self, session))]
    pub async fn list_staff(&self, session: &Claims) -> ServiceResult<Vec<UserResponse>> {
        let part = require_admin(session)?;

        let users = self
            .ctx
            .user_repo()
            .find_by_role(part.staff_role())
            .await?;

        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Create a staff account
    #[instrument(skip(self, session, request), fields(phone = %request.phone))]
    pub async fn create_user(
        &self,
        session: &Claims,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require_admin(session)?;

        if self.ctx.user_repo().phone_exists(&request.phone).await? {
            return Err(ServiceError::conflict("Phone number already registered"));
        }

        let user_id = self.ctx.generate_id();
        let now = Utc::now();

        let user = User {
            id: user_id,
            name: request.name,
            phone: request.phone,
            role: request.role.unwrap_or_default(),
            gender: request.gender,
            address: request.address,
            main_location: request.main_location,
            has_vehicle: request.has_vehicle.unwrap_or(false),
            start_date: request.start_date,
            birth_date: request.birth_date,
            status: request.status,
            memo: request.memo,
            created_at: now,
            updated_at: now,
        };

        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user_id, role = %user.role, "User created");

        Ok(UserResponse::from(&user))
    }

    /// Update a staff account
    ///
    /// Supplied-but-empty strings are skipped; `has_vehicle` applies
    /// whenever present, including `false`.
    #[instrument(skip(self, session, request))]
    pub async fn update_user(
        &self,
        session: &Claims,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require_admin(session)?;

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut changed = false;

        if let Some(name) = request.name {
            if !name.is_empty() {
                user.name = name;
                changed = true;
            }
        }
        if let Some(phone) = request.phone {
            if !phone.is_empty() {
                user.phone = phone;
                changed = true;
            }
        }
        if let Some(role) = request.role {
            user.role = role;
            changed = true;
        }
        if let Some(gender) = request.gender {
            if !gender.is_empty() {
                user.gender = Some(gender);
                changed = true;
            }
        }
        if let Some(address) = request.address {
            if !address.is_empty() {
                user.address = Some(address);
                changed = true;
            }
        }
        if let Some(main_location) = request.main_location {
            if !main_location.is_empty() {
                user.main_location = Some(main_location);
                changed = true;
            }
        }
        if let Some(has_vehicle) = request.has_vehicle {
            user.has_vehicle = has_vehicle;
            changed = true;
        }
        if let Some(start_date) = request.start_date {
            if !start_date.is_empty() {
                user.start_date = Some(start_date);
                changed = true;
            }
        }
        if let Some(birth_date) = request.birth_date {
            if !birth_date.is_empty() {
                user.birth_date = Some(birth_date);
                changed = true;
            }
        }
        if let Some(status) = request.status {
            user.status = Some(status);
            changed = true;
        }
        if let Some(memo) = request.memo {
            if !memo.is_empty() {
                user.memo = Some(memo);
                changed = true;
            }
        }

        if changed {
            user.touch();
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, "User updated");
        }

        Ok(UserResponse::from(&user))
    }

    /// Delete a staff account
    ///
    /// Gated on the caller's role equalling the `ADMIN` literal rather
    /// than any `ADMIN_*` part role, so every real admin is rejected.
    #[instrument(skip(self, session))]
    pub async fn delete_user(&self, session: &Claims, user_id: Snowflake) -> ServiceResult<bool> {
        if session.role.as_str() != USER_DELETE_ROLE {
            warn!(role = %session.role, "deleteUser rejected by role gate");
            return Err(ServiceError::permission_denied("ADMIN role required"));
        }

        let deleted = self.ctx.user_repo().delete(user_id).await?;
        if deleted {
            info!(user_id = %user_id, "User deleted");
        }

        Ok(deleted)
    }
}
