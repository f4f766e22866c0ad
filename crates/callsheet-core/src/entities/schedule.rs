//! Schedule entity - one wedding shoot assignment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::report::{ReportRole, ReportStatus};
use crate::value_objects::Snowflake;

/// Assignment lifecycle of a schedule
///
/// The admin-controlled states are `unassigned -> assigned -> confirmed`.
/// When an assigned staff member submits a progress report the schedule
/// status mirrors the report label, so the progress labels are carried
/// here as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Unassigned,
    Assigned,
    Confirmed,
    Pending,
    Wakeup,
    Departure,
    Arrival,
    Completed,
    Delayed,
    Canceled,
}

impl ScheduleStatus {
    /// Stored string label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unassigned => "unassigned",
            Self::Assigned => "assigned",
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Wakeup => "wakeup",
            Self::Departure => "departure",
            Self::Arrival => "arrival",
            Self::Completed => "completed",
            Self::Delayed => "delayed",
            Self::Canceled => "canceled",
        }
    }

    /// Parse from a stored label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unassigned" => Some(Self::Unassigned),
            "assigned" => Some(Self::Assigned),
            "confirmed" => Some(Self::Confirmed),
            "pending" => Some(Self::Pending),
            "wakeup" => Some(Self::Wakeup),
            "departure" => Some(Self::Departure),
            "arrival" => Some(Self::Arrival),
            "completed" => Some(Self::Completed),
            "delayed" => Some(Self::Delayed),
            "canceled" => Some(Self::Canceled),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ReportStatus> for ScheduleStatus {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Pending => Self::Pending,
            ReportStatus::Wakeup => Self::Wakeup,
            ReportStatus::Departure => Self::Departure,
            ReportStatus::Arrival => Self::Arrival,
            ReportStatus::Completed => Self::Completed,
            ReportStatus::Delayed => Self::Delayed,
            ReportStatus::Canceled => Self::Canceled,
        }
    }
}

/// Schedule entity
///
/// `main_user` and `sub_user` hold User ids as weak references; the store
/// does not enforce them. `date` is a fixed-width `YYYY-MM-DD` string and
/// is compared lexically everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub id: Snowflake,
    pub main_user: Option<Snowflake>,
    pub sub_user: Option<Snowflake>,
    pub groom: String,
    pub bride: String,
    pub date: String,
    pub time: String,
    pub user_arrival_time: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub memo: Option<String>,
    pub status: ScheduleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// Create a new Schedule with required fields, unassigned by default
    pub fn new(id: Snowflake, groom: String, bride: String, date: String, time: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            main_user: None,
            sub_user: None,
            groom,
            bride,
            date,
            time,
            user_arrival_time: None,
            location: None,
            venue: None,
            memo: None,
            status: ScheduleStatus::Unassigned,
            created_at: now,
            updated_at: now,
        }
    }

    /// The slot the given user occupies, main slot taking precedence
    #[must_use]
    pub fn slot_of(&self, user_id: Snowflake) -> Option<ReportRole> {
        if self.main_user == Some(user_id) {
            Some(ReportRole::Main)
        } else if self.sub_user == Some(user_id) {
            Some(ReportRole::Sub)
        } else {
            None
        }
    }

    /// The user occupying the given slot
    #[must_use]
    pub fn slot_user(&self, role: ReportRole) -> Option<Snowflake> {
        match role {
            ReportRole::Main => self.main_user,
            ReportRole::Sub => self.sub_user,
        }
    }

    /// Check if either slot is held by one of the given users
    #[must_use]
    pub fn held_by_any(&self, user_ids: &[Snowflake]) -> bool {
        self.main_user.is_some_and(|id| user_ids.contains(&id))
            || self.sub_user.is_some_and(|id| user_ids.contains(&id))
    }

    /// Check if the schedule can be confirmed
    #[inline]
    pub fn can_confirm(&self) -> bool {
        self.status == ScheduleStatus::Assigned
    }

    /// Update the assignment status
    pub fn set_status(&mut self, status: ScheduleStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Bump the modification timestamp after a field merge
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
