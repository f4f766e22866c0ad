//! Confirmation entity - a staff member's acknowledgment of a schedule

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Records that an assigned staff member has seen and accepted a schedule.
/// One row per `(schedule_id, user_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub id: Snowflake,
    pub schedule_id: Snowflake,
    pub user_id: Snowflake,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Confirmation {
    /// Create a new acknowledgment row
    pub fn new(id: Snowflake, schedule_id: Snowflake, user_id: Snowflake, confirmed: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            schedule_id,
            user_id,
            confirmed,
            created_at: now,
            updated_at: now,
        }
    }
}
