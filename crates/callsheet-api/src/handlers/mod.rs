//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod reports;
pub mod schedules;
pub mod uploads;
pub mod users;
