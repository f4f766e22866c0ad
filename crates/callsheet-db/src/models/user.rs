//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub main_location: Option<String>,
    pub has_vehicle: bool,
    pub start_date: Option<String>,
    pub birth_date: Option<String>,
    pub status: Option<String>,
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
