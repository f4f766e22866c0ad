//! Confirmation database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for confirmations table
#[derive(Debug, Clone, FromRow)]
pub struct ConfirmationModel {
    pub id: i64,
    pub schedule_id: i64,
    pub user_id: i64,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
