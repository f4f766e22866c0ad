//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, health, reports, schedules, uploads, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(schedule_routes())
        .merge(report_routes())
        .merge(upload_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:user_id", patch(users::update_user))
        .route("/users/:user_id", delete(users::delete_user))
        .route("/users/:user_id/reports", get(users::get_user_reports))
}

/// Schedule routes
fn schedule_routes() -> Router<AppState> {
    Router::new()
        // Calendar views before the id routes; static segments win matching
        .route("/schedules", get(schedules::list_schedules))
        .route("/schedules", post(schedules::create_schedule))
        .route("/schedules/list", get(schedules::upcoming_schedules))
        .route("/schedules/history", get(schedules::history_schedules))
        .route("/schedules/confirm", post(schedules::confirm_schedules))
        // Schedule CRUD
        .route("/schedules/:schedule_id", get(schedules::get_schedule))
        .route("/schedules/:schedule_id", patch(schedules::update_schedule))
        .route("/schedules/:schedule_id", delete(schedules::delete_schedule))
        .route(
            "/schedules/:schedule_id/status",
            patch(schedules::patch_schedule_status),
        )
        .route(
            "/schedules/:schedule_id/acknowledge",
            post(schedules::acknowledge_schedule),
        )
        .route(
            "/schedules/:schedule_id/reports",
            get(schedules::get_schedule_reports),
        )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(reports::list_reports))
        .route("/reports", post(reports::create_report))
        .route("/reports/:report_id", get(reports::get_report))
        .route("/reports/:report_id", patch(reports::update_report))
        .route("/reports/:report_id", delete(reports::delete_report))
}

/// Upload routes
fn upload_routes() -> Router<AppState> {
    Router::new().route("/uploads/status", get(uploads::upload_status))
}
