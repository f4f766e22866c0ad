//! Schedule database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for schedules table
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleModel {
    pub id: i64,
    pub main_user: Option<i64>,
    pub sub_user: Option<i64>,
    pub groom: String,
    pub bride: String,
    pub date: String,
    pub time: String,
    pub user_arrival_time: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub memo: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
