//! Report database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reports table
#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub schedule_id: i64,
    pub user_id: i64,
    pub role: String,
    pub status: String,
    pub estimated_time: Option<String>,
    pub current_step: i32,
    pub memo: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
