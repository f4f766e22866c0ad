//! Report entity - one staff member's progress submission for a schedule

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Which assignment slot the reporting user occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportRole {
    Main,
    Sub,
}

impl ReportRole {
    /// Stored string label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Sub => "SUB",
        }
    }

    /// Parse from a stored label
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MAIN" => Some(Self::Main),
            "SUB" => Some(Self::Sub),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress label of a report
///
/// An unordered label set rather than a strict chain: any status may
/// follow any other, `delayed` and `canceled` are reachable from
/// anywhere. No transition table is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Wakeup,
    Departure,
    Arrival,
    Completed,
    Delayed,
    Canceled,
}

impl ReportStatus {
    /// Stored string label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
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

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report entity
///
/// At most one report exists per `(schedule_id, role)` pair.
/// `current_step` is a plain 0-3 progress integer set by call sites,
/// not derived from `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Snowflake,
    pub schedule_id: Snowflake,
    pub user_id: Snowflake,
    pub role: ReportRole,
    pub status: ReportStatus,
    pub estimated_time: Option<String>,
    pub current_step: i32,
    pub memo: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Create a new Report with required fields
    pub fn new(
        id: Snowflake,
        schedule_id: Snowflake,
        user_id: Snowflake,
        role: ReportRole,
        status: ReportStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            schedule_id,
            user_id,
            role,
            status,
            estimated_time: None,
            current_step: 0,
            memo: None,
            reported_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Seed report created when a schedule is confirmed
    pub fn seeded(id: Snowflake, schedule_id: Snowflake, user_id: Snowflake, role: ReportRole) -> Self {
        Self::new(id, schedule_id, user_id, role, ReportStatus::Pending)
    }

    /// Check if the report belongs to the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Bump the modification timestamp after a field merge
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
