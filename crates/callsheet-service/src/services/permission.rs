//! Permission service
//!
//! One part-scoping policy applied uniformly: admin operations require a
//! session carrying an admin part, and part-scoped schedule access requires
//! that part's staff to hold the main or sub slot.

use callsheet_common::Claims;
use callsheet_core::entities::{Part, Schedule};
use callsheet_core::{DomainError, Snowflake};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reject sessions that do not carry an admin part
pub fn require_admin(session: &Claims) -> ServiceResult<Part> {
    session
        .admin_part
        .ok_or(ServiceError::Domain(DomainError::AdminRequired))
}

/// Permission service for part-scoped access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ids of the staff belonging to a part
    ///
    /// The staff role value equals the part label, so admin accounts are
    /// excluded by construction.
    #[instrument(skip(self))]
    pub async fn part_staff_ids(&self, part: Part) -> ServiceResult<Vec<Snowflake>> {
        let ids = self
            .ctx
            .user_repo()
            .find_ids_by_role(part.staff_role())
            .await?;
        debug!(part = %part, staff = ids.len(), "Resolved part staff set");
        Ok(ids)
    }

    /// Check if the part's staff hold the schedule's main or sub slot
    #[instrument(skip(self, schedule), fields(schedule_id = %schedule.id))]
    pub async fn check_owned(&self, schedule: &Schedule, part: Part) -> ServiceResult<bool> {
        let staff_ids = self.part_staff_ids(part).await?;
        Ok(schedule.held_by_any(&staff_ids))
    }

    /// Check part ownership and return an error if denied
    #[instrument(skip(self, schedule), fields(schedule_id = %schedule.id))]
    pub async fn require_owned(&self, schedule: &Schedule, part: Part) -> ServiceResult<()> {
        if !self.check_owned(schedule, part).await? {
            return Err(ServiceError::permission_denied(
                "this schedule belongs to another part",
            ));
        }
        Ok(())
    }
}
