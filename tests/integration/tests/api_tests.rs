//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use callsheet_core::StaffRole;
use chrono::{Duration, Local};
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, login, login_as, seed_user,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn yesterday() -> String {
    (Local::now() - Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = seed_user(StaffRole::AdminPhotographer).await.unwrap();

    let login_req = LoginRequest {
        phone: admin.phone.clone(),
        name: admin.name.clone(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!auth.access_token.is_empty());
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert_eq!(auth.user.phone, admin.phone);
    assert_eq!(auth.user.role, "ADMIN_PHOTOGRAPHER");
}

#[tokio::test]
async fn test_login_unknown_phone() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        phone: unique_phone(),
        name: "Nobody".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_wrong_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let login_req = LoginRequest {
        phone: staff.phone.clone(),
        name: format!("{} x", staff.name),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_rejects_short_phone() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        phone: "123".to_string(),
        name: "Short".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (admin, token) = login_as(&server, StaffRole::AdminVideographer)
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, "ADMIN_VIDEOGRAPHER");
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.name, request.name);
    assert_eq!(user.phone, request.phone);
    // Role defaults to PHOTOGRAPHER when omitted
    assert_eq!(user.role, "PHOTOGRAPHER");
    assert!(user.has_vehicle);
}

#[tokio::test]
async fn test_create_user_duplicate_phone() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "CONFLICT");
}

#[tokio::test]
async fn test_create_user_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::Photographer).await.unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_users_scoped_to_part() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, video_token) = login_as(&server, StaffRole::AdminVideographer)
        .await
        .unwrap();
    let (_, photo_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let video_req = CreateUserRequest::unique_with_role("VIDEOGRAPHER");
    let response = server
        .post_auth("/api/v1/users", &video_token, &video_req)
        .await
        .unwrap();
    let video_staff: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let photo_req = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &photo_token, &photo_req)
        .await
        .unwrap();
    let photo_staff: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The videographer admin sees videographers only
    let response = server.get_auth("/api/v1/users", &video_token).await.unwrap();
    let listed: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(listed.iter().any(|u| u.id == video_staff.id));
    assert!(listed.iter().all(|u| u.id != photo_staff.id));
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let request = CreateUserRequest::unique();
    let response = server
        .post_auth("/api/v1/users", &token, &request)
        .await
        .unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateUserRequest {
        memo: Some("Prefers morning shoots".to_string()),
        has_vehicle: Some(false),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/users/{}", created.id), &token, &update)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.memo.as_deref(), Some("Prefers morning shoots"));
    assert!(!updated.has_vehicle);
    assert_eq!(updated.name, created.name);

    // A supplied-but-empty string leaves the field alone
    let blank = UpdateUserRequest {
        name: Some(String::new()),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/users/{}", created.id), &token, &blank)
        .await
        .unwrap();
    let unchanged: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged.name, created.name);
}

#[tokio::test]
async fn test_delete_user_refused_for_part_admins() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    // The role gate wants the bare ADMIN literal, which no stored role
    // matches, so even a part admin is turned away.
    let response = server
        .delete_auth(&format!("/api/v1/users/{}", staff.id), &token)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "AUTHORIZATION_DENIED");
}

// ============================================================================
// Schedule Tests
// ============================================================================

#[tokio::test]
async fn test_create_schedule() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let request = CreateScheduleRequest::unique("2030-05-10");
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let schedule: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(schedule.groom, request.groom);
    assert_eq!(schedule.bride, request.bride);
    assert_eq!(schedule.date, "2030-05-10");
    assert_eq!(schedule.status, "unassigned");
    assert!(schedule.main_user.is_none());
}

#[tokio::test]
async fn test_create_schedule_with_main_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-05-11", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let schedule: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(schedule.main_user.as_deref(), Some(staff.id.as_str()));
    assert_eq!(schedule.main_user_name.as_deref(), Some(staff.name.as_str()));
    assert_eq!(schedule.status, "assigned");
}

#[tokio::test]
async fn test_create_schedule_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::unique("2030-05-12");
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_get_schedule() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-05-13", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", created.id), &token)
        .await
        .unwrap();
    let schedule: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(schedule.id, created.id);
    assert_eq!(schedule.main_user_name.as_deref(), Some(staff.name.as_str()));
}

#[tokio::test]
async fn test_get_schedule_cross_part_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, photo_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, video_token) = login_as(&server, StaffRole::AdminVideographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-05-14", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &photo_token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Held by a photographer, so the videographer admin is refused
    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", created.id), &video_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_get_unassigned_schedule_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let request = CreateScheduleRequest::unique("2030-05-15");
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The detail view is ownership-only; nobody holds an unassigned row
    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_get_schedule_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/schedules/424242", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_schedules() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let assigned_req = CreateScheduleRequest::assigned("2030-06-01", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &assigned_req)
        .await
        .unwrap();
    let assigned: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let unassigned_req = CreateScheduleRequest::unique("2030-06-01");
    let response = server
        .post_auth("/api/v1/schedules", &token, &unassigned_req)
        .await
        .unwrap();
    let unassigned: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The manage view lists only rows held by the caller's part
    let response = server.get_auth("/api/v1/schedules", &token).await.unwrap();
    let listed: Vec<ScheduleResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(listed.iter().any(|s| s.id == assigned.id));
    assert!(listed.iter().all(|s| s.id != unassigned.id));
}

#[tokio::test]
async fn test_list_schedules_date_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let first_req = CreateScheduleRequest::assigned("2031-03-05", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &first_req)
        .await
        .unwrap();
    let first: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let second_req = CreateScheduleRequest::assigned("2031-03-06", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &second_req)
        .await
        .unwrap();
    let second: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/schedules?date=2031-03-05", &token)
        .await
        .unwrap();
    let listed: Vec<ScheduleResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(listed.iter().any(|s| s.id == first.id));
    assert!(listed.iter().all(|s| s.id != second.id));
}

#[tokio::test]
async fn test_list_schedules_status_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2031-04-05", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/schedules/{}/status", created.id),
            &token,
            &json!({"status": "completed"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Completed rows fall out of the default manage view
    let response = server.get_auth("/api/v1/schedules", &token).await.unwrap();
    let listed: Vec<ScheduleResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().all(|s| s.id != created.id));

    let response = server
        .get_auth("/api/v1/schedules?status=completed", &token)
        .await
        .unwrap();
    let listed: Vec<ScheduleResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|s| s.id == created.id));
}

#[tokio::test]
async fn test_upcoming_shows_unassigned_today() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminVideographer)
        .await
        .unwrap();

    let today_req = CreateScheduleRequest::unique(&today());
    let response = server
        .post_auth("/api/v1/schedules", &token, &today_req)
        .await
        .unwrap();
    let today_row: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let yesterday_req = CreateScheduleRequest::unique(&yesterday());
    let response = server
        .post_auth("/api/v1/schedules", &token, &yesterday_req)
        .await
        .unwrap();
    let yesterday_row: ScheduleResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/schedules/list", &token)
        .await
        .unwrap();
    let upcoming: Vec<UpcomingScheduleResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    let row = upcoming
        .iter()
        .find(|s| s.id == today_row.id)
        .expect("today's unassigned wedding should be on the calendar");
    assert!(!row.main_user_confirmed);
    assert!(!row.sub_user_confirmed);

    assert!(upcoming.iter().all(|s| s.id != yesterday_row.id));
}

#[tokio::test]
async fn test_history_shows_past_weddings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let past_req = CreateScheduleRequest::unique("2020-01-01");
    let response = server
        .post_auth("/api/v1/schedules", &token, &past_req)
        .await
        .unwrap();
    let past: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let today_req = CreateScheduleRequest::unique(&today());
    let response = server
        .post_auth("/api/v1/schedules", &token, &today_req)
        .await
        .unwrap();
    let current: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/schedules/history", &token)
        .await
        .unwrap();
    let history: Vec<ScheduleResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(history.iter().any(|s| s.id == past.id));
    assert!(history.iter().all(|s| s.id != current.id));
}

#[tokio::test]
async fn test_update_schedule() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-07-01", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateScheduleRequest {
        venue: Some("Grand Ballroom".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/schedules/{}", created.id), &token, &update)
        .await
        .unwrap();
    let updated: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.venue.as_deref(), Some("Grand Ballroom"));
    assert_eq!(updated.groom, created.groom);
}

#[tokio::test]
async fn test_update_unassigned_schedule_from_any_part() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, photo_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, video_token) = login_as(&server, StaffRole::AdminVideographer)
        .await
        .unwrap();

    let request = CreateScheduleRequest::unique("2030-07-02");
    let response = server
        .post_auth("/api/v1/schedules", &photo_token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // An unassigned row belongs to no part yet, so any admin may edit it
    let update = UpdateScheduleRequest {
        location: Some("Busan".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/schedules/{}", created.id),
            &video_token,
            &update,
        )
        .await
        .unwrap();
    let updated: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.location.as_deref(), Some("Busan"));
}

#[tokio::test]
async fn test_confirm_schedules_seeds_reports() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-08-01", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let confirm = ConfirmSchedulesRequest {
        schedule_ids: vec![created.id.clone()],
    };
    let response = server
        .post_auth("/api/v1/schedules/confirm", &token, &confirm)
        .await
        .unwrap();
    let outcome: ConfirmSchedulesResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.updated_count, 1);

    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", created.id), &token)
        .await
        .unwrap();
    let confirmed: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(confirmed.status, "confirmed");
    assert_eq!(confirmed.main_report_status.as_deref(), Some("pending"));

    let response = server
        .get_auth(&format!("/api/v1/schedules/{}/reports", created.id), &token)
        .await
        .unwrap();
    let reports: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].role, "MAIN");
    assert_eq!(reports[0].status, "pending");
    assert_eq!(reports[0].user_id, staff.id);
    assert_eq!(reports[0].current_step, 0);
}

#[tokio::test]
async fn test_confirm_skips_unconfirmable_schedules() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, photo_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, video_token) = login_as(&server, StaffRole::AdminVideographer)
        .await
        .unwrap();
    let video_staff = seed_user(StaffRole::Videographer).await.unwrap();

    let unassigned_req = CreateScheduleRequest::unique("2030-08-02");
    let response = server
        .post_auth("/api/v1/schedules", &photo_token, &unassigned_req)
        .await
        .unwrap();
    let unassigned: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let other_part_req = CreateScheduleRequest::assigned("2030-08-02", &video_staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &video_token, &other_part_req)
        .await
        .unwrap();
    let other_part: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Unassigned, foreign, and unknown ids are all skipped, not errors
    let confirm = ConfirmSchedulesRequest {
        schedule_ids: vec![
            unassigned.id.clone(),
            other_part.id.clone(),
            "424242".to_string(),
        ],
    };
    let response = server
        .post_auth("/api/v1/schedules/confirm", &photo_token, &confirm)
        .await
        .unwrap();
    let outcome: ConfirmSchedulesResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.updated_count, 0);

    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", other_part.id), &video_token)
        .await
        .unwrap();
    let untouched: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(untouched.status, "assigned");
}

#[tokio::test]
async fn test_reassignment_drops_slot_report() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let first_staff = seed_user(StaffRole::Photographer).await.unwrap();
    let second_staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-08-03", &first_staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let confirm = ConfirmSchedulesRequest {
        schedule_ids: vec![created.id.clone()],
    };
    let response = server
        .post_auth("/api/v1/schedules/confirm", &token, &confirm)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/schedules/{}/reports", created.id), &token)
        .await
        .unwrap();
    let reports: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reports.len(), 1);

    // Handing the main slot to someone else invalidates the old report
    let update = UpdateScheduleRequest {
        main_user: Some(second_staff.id.clone()),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/v1/schedules/{}", created.id), &token, &update)
        .await
        .unwrap();
    let updated: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.main_user.as_deref(), Some(second_staff.id.as_str()));

    let response = server
        .get_auth(&format!("/api/v1/schedules/{}/reports", created.id), &token)
        .await
        .unwrap();
    let reports: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn test_patch_schedule_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-08-04", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/schedules/{}/status", created.id),
            &token,
            &json!({"status": "canceled"}),
        )
        .await
        .unwrap();
    let updated: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.status, "canceled");
}

#[tokio::test]
async fn test_patch_status_unassigned_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();

    let request = CreateScheduleRequest::unique("2030-08-05");
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/schedules/{}/status", created.id),
            &token,
            &json!({"status": "canceled"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_schedule() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-08-06", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/schedules/{}", created.id), &token)
        .await
        .unwrap();
    let outcome: DeleteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(outcome.deleted);

    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_schedule_cross_part_reports_false() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, photo_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, video_token) = login_as(&server, StaffRole::AdminVideographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-08-07", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &photo_token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/schedules/{}", created.id), &video_token)
        .await
        .unwrap();
    let outcome: DeleteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!outcome.deleted);

    // The row is still there for its own part
    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", created.id), &photo_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_acknowledge_schedule() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-08-08", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &admin_token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let auth = login(&server, &staff).await.unwrap();
    let response = server
        .post_auth(
            &format!("/api/v1/schedules/{}/acknowledge", created.id),
            &auth.access_token,
            &(),
        )
        .await
        .unwrap();
    let confirmation: ConfirmationResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(confirmation.schedule_id, created.id);
    assert_eq!(confirmation.user_id, staff.id);
    assert!(confirmation.confirmed);

    // Acknowledging twice is harmless
    let response = server
        .post_auth(
            &format!("/api/v1/schedules/{}/acknowledge", created.id),
            &auth.access_token,
            &(),
        )
        .await
        .unwrap();
    let again: ConfirmationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(again.confirmed);
}

#[tokio::test]
async fn test_acknowledge_requires_assignment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let staff = seed_user(StaffRole::Photographer).await.unwrap();
    let (_, outsider_token) = login_as(&server, StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned("2030-08-09", &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", &admin_token, &request)
        .await
        .unwrap();
    let created: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/schedules/{}/acknowledge", created.id),
            &outsider_token,
            &(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Report Tests
// ============================================================================

/// Create an assigned schedule held by a fresh photographer and return
/// (staff, staff token, schedule)
async fn assigned_schedule(
    server: &TestServer,
    admin_token: &str,
    date: &str,
) -> (integration_tests::SeededUser, String, ScheduleResponse) {
    let staff = seed_user(StaffRole::Photographer).await.unwrap();

    let request = CreateScheduleRequest::assigned(date, &staff.id);
    let response = server
        .post_auth("/api/v1/schedules", admin_token, &request)
        .await
        .unwrap();
    let schedule: ScheduleResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let auth = login(server, &staff).await.unwrap();
    (staff, auth.access_token, schedule)
}

#[tokio::test]
async fn test_staff_report_updates_schedule() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (staff, staff_token, schedule) =
        assigned_schedule(&server, &admin_token, "2030-09-01").await;

    let request = CreateReportRequest::departure(&schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &staff_token, &request)
        .await
        .unwrap();
    let report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The slot is inferred from the caller's assignment
    assert_eq!(report.role, "MAIN");
    assert_eq!(report.user_id, staff.id);
    assert_eq!(report.status, "departure");
    assert_eq!(report.current_step, 2);

    // A staff submission drags the schedule status along
    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", schedule.id), &admin_token)
        .await
        .unwrap();
    let synced: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(synced.status, "departure");
    assert_eq!(synced.main_report_status.as_deref(), Some("departure"));
}

#[tokio::test]
async fn test_create_report_role_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, staff_token, schedule) = assigned_schedule(&server, &admin_token, "2030-09-02").await;

    let mut request = CreateReportRequest::departure(&schedule.id);
    request.role = Some("MAIN".to_string());

    let response = server
        .post_auth("/api/v1/reports", &staff_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_report_without_assignment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, _, schedule) = assigned_schedule(&server, &admin_token, "2030-09-03").await;
    let (_, outsider_token) = login_as(&server, StaffRole::Photographer).await.unwrap();

    let request = CreateReportRequest::departure(&schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &outsider_token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_admin_report_on_behalf_of_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (staff, _, schedule) = assigned_schedule(&server, &admin_token, "2030-09-04").await;

    let mut request = CreateReportRequest::departure(&schedule.id);
    request.role = Some("MAIN".to_string());
    request.status = "arrival".to_string();

    let response = server
        .post_auth("/api/v1/reports", &admin_token, &request)
        .await
        .unwrap();
    let report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The report lands on the slot holder, not the admin
    assert_eq!(report.user_id, staff.id);
    assert_eq!(report.role, "MAIN");
    assert_eq!(report.status, "arrival");

    // Admin submissions do not touch the schedule status
    let response = server
        .get_auth(&format!("/api/v1/schedules/{}", schedule.id), &admin_token)
        .await
        .unwrap();
    let unchanged: ScheduleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged.status, "assigned");
}

#[tokio::test]
async fn test_admin_report_on_empty_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, _, schedule) = assigned_schedule(&server, &admin_token, "2030-09-05").await;

    // The sub slot was never filled
    let mut request = CreateReportRequest::departure(&schedule.id);
    request.role = Some("SUB".to_string());

    let response = server
        .post_auth("/api/v1/reports", &admin_token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_report_resubmission_keeps_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, staff_token, schedule) = assigned_schedule(&server, &admin_token, "2030-09-06").await;

    let request = CreateReportRequest::departure(&schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &staff_token, &request)
        .await
        .unwrap();
    let first: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let mut request = CreateReportRequest::departure(&schedule.id);
    request.status = "arrival".to_string();
    request.current_step = Some(3);

    let response = server
        .post_auth("/api/v1/reports", &staff_token, &request)
        .await
        .unwrap();
    let second: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // One row per slot; resubmitting overwrites in place
    assert_eq!(second.id, first.id);
    assert_eq!(second.status, "arrival");
    assert_eq!(second.current_step, 3);

    let response = server
        .get_auth(
            &format!("/api/v1/schedules/{}/reports", schedule.id),
            &admin_token,
        )
        .await
        .unwrap();
    let reports: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].status, "arrival");
}

#[tokio::test]
async fn test_list_reports_scoped_to_caller() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, first_token, first_schedule) =
        assigned_schedule(&server, &admin_token, "2030-09-07").await;
    let (_, second_token, second_schedule) =
        assigned_schedule(&server, &admin_token, "2030-09-08").await;

    let request = CreateReportRequest::departure(&first_schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &first_token, &request)
        .await
        .unwrap();
    let first_report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = CreateReportRequest::departure(&second_schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &second_token, &request)
        .await
        .unwrap();
    let second_report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Staff see their own submissions only
    let response = server.get_auth("/api/v1/reports", &first_token).await.unwrap();
    let listed: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|r| r.id == first_report.id));
    assert!(listed.iter().all(|r| r.id != second_report.id));

    // Admins see everything
    let response = server.get_auth("/api/v1/reports", &admin_token).await.unwrap();
    let listed: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|r| r.id == first_report.id));
    assert!(listed.iter().any(|r| r.id == second_report.id));
}

#[tokio::test]
async fn test_get_report_owner_or_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, owner_token, schedule) = assigned_schedule(&server, &admin_token, "2030-09-09").await;
    let (_, other_token) = login_as(&server, StaffRole::Photographer).await.unwrap();

    let request = CreateReportRequest::departure(&schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &owner_token, &request)
        .await
        .unwrap();
    let report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/reports/{}", report.id), &other_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/reports/{}", report.id), &owner_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/reports/{}", report.id), &admin_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_update_report_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, staff_token, schedule) = assigned_schedule(&server, &admin_token, "2030-09-10").await;

    let request = CreateReportRequest::departure(&schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &staff_token, &request)
        .await
        .unwrap();
    let report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateReportRequest {
        status: Some("completed".to_string()),
        memo: Some("Wrapped early".to_string()),
        ..Default::default()
    };

    // Owners resubmit through POST; PATCH is the admin correction path
    let response = server
        .patch_auth(&format!("/api/v1/reports/{}", report.id), &staff_token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&format!("/api/v1/reports/{}", report.id), &admin_token, &update)
        .await
        .unwrap();
    let updated: ReportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.memo.as_deref(), Some("Wrapped early"));
}

#[tokio::test]
async fn test_delete_report_owner_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (_, staff_token, schedule) = assigned_schedule(&server, &admin_token, "2030-09-11").await;

    let request = CreateReportRequest::departure(&schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &staff_token, &request)
        .await
        .unwrap();
    let report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Not even an admin may delete someone else's report
    let response = server
        .delete_auth(&format!("/api/v1/reports/{}", report.id), &admin_token)
        .await
        .unwrap();
    let outcome: DeleteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!outcome.deleted);

    let response = server
        .delete_auth(&format!("/api/v1/reports/{}", report.id), &staff_token)
        .await
        .unwrap();
    let outcome: DeleteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(outcome.deleted);

    let response = server
        .get_auth(&format!("/api/v1/reports/{}", report.id), &staff_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_reports_by_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, admin_token) = login_as(&server, StaffRole::AdminPhotographer)
        .await
        .unwrap();
    let (staff, staff_token, schedule) =
        assigned_schedule(&server, &admin_token, "2030-09-12").await;
    let (_, other_token) = login_as(&server, StaffRole::Photographer).await.unwrap();

    let request = CreateReportRequest::departure(&schedule.id);
    let response = server
        .post_auth("/api/v1/reports", &staff_token, &request)
        .await
        .unwrap();
    let report: ReportResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/users/{}/reports", staff.id);

    let response = server.get_auth(&path, &staff_token).await.unwrap();
    let own: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(own.iter().any(|r| r.id == report.id));

    let response = server.get_auth(&path, &other_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth(&path, &admin_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_status_unconfigured() {
    if !check_test_env().await {
        return;
    }

    // The test config carries no media credentials
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/uploads/status").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(error.error.code, "CONFIG_ERROR");
}
