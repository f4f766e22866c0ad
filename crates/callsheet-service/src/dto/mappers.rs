//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use callsheet_core::entities::{Confirmation, Report, ReportRole, Schedule, User};

use super::responses::{
    ConfirmationResponse, ReportResponse, ScheduleResponse, UpcomingScheduleResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            gender: user.gender.clone(),
            address: user.address.clone(),
            main_location: user.main_location.clone(),
            has_vehicle: user.has_vehicle,
            start_date: user.start_date.clone(),
            birth_date: user.birth_date.clone(),
            status: user.status,
            memo: user.memo.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Schedule Mappers
// ============================================================================

/// Helper struct carrying one schedule with its display enrichment
pub struct ScheduleWithDetails {
    pub schedule: Schedule,
    pub main_user_name: Option<String>,
    pub sub_user_name: Option<String>,
    pub main_report: Option<Report>,
    pub sub_report: Option<Report>,
}

impl ScheduleWithDetails {
    /// Bare details without any enrichment fields resolved
    pub fn bare(schedule: Schedule) -> Self {
        Self {
            schedule,
            main_user_name: None,
            sub_user_name: None,
            main_report: None,
            sub_report: None,
        }
    }
}

impl From<ScheduleWithDetails> for ScheduleResponse {
    fn from(details: ScheduleWithDetails) -> Self {
        let schedule = details.schedule;
        Self {
            id: schedule.id.to_string(),
            main_user: schedule.main_user.map(|id| id.to_string()),
            sub_user: schedule.sub_user.map(|id| id.to_string()),
            groom: schedule.groom,
            bride: schedule.bride,
            date: schedule.date,
            time: schedule.time,
            user_arrival_time: schedule.user_arrival_time,
            location: schedule.location,
            venue: schedule.venue,
            memo: schedule.memo,
            status: schedule.status,
            main_user_name: details.main_user_name,
            sub_user_name: details.sub_user_name,
            main_report_status: details.main_report.as_ref().map(|r| r.status),
            sub_report_status: details.sub_report.as_ref().map(|r| r.status),
            main_report_memo: details.main_report.and_then(|r| r.memo),
            sub_report_memo: details.sub_report.and_then(|r| r.memo),
            created_at: schedule.created_at,
            updated_at: schedule.updated_at,
        }
    }
}

/// Helper struct for the upcoming view, adding per-slot acknowledgment flags
pub struct UpcomingScheduleWithDetails {
    pub schedule: Schedule,
    pub main_user_name: Option<String>,
    pub sub_user_name: Option<String>,
    pub main_report: Option<Report>,
    pub sub_report: Option<Report>,
    pub main_user_confirmed: bool,
    pub sub_user_confirmed: bool,
}

impl From<UpcomingScheduleWithDetails> for UpcomingScheduleResponse {
    fn from(details: UpcomingScheduleWithDetails) -> Self {
        let schedule = details.schedule;
        Self {
            id: schedule.id.to_string(),
            main_user: schedule.main_user.map(|id| id.to_string()),
            sub_user: schedule.sub_user.map(|id| id.to_string()),
            groom: schedule.groom,
            bride: schedule.bride,
            date: schedule.date,
            time: schedule.time,
            user_arrival_time: schedule.user_arrival_time,
            location: schedule.location,
            venue: schedule.venue,
            memo: schedule.memo,
            status: schedule.status,
            main_user_name: details.main_user_name,
            sub_user_name: details.sub_user_name,
            main_report_status: details.main_report.as_ref().map(|r| r.status),
            sub_report_status: details.sub_report.as_ref().map(|r| r.status),
            main_user_confirmed: details.main_user_confirmed,
            sub_user_confirmed: details.sub_user_confirmed,
            created_at: schedule.created_at,
            updated_at: schedule.updated_at,
        }
    }
}

/// Split a schedule's reports into the MAIN and SUB slots
pub fn split_reports(reports: Vec<Report>) -> (Option<Report>, Option<Report>) {
    let mut main_report = None;
    let mut sub_report = None;
    for report in reports {
        match report.role {
            ReportRole::Main => main_report = Some(report),
            ReportRole::Sub => sub_report = Some(report),
        }
    }
    (main_report, sub_report)
}

// ============================================================================
// Report Mappers
// ============================================================================

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.to_string(),
            schedule_id: report.schedule_id.to_string(),
            user_id: report.user_id.to_string(),
            role: report.role,
            status: report.status,
            estimated_time: report.estimated_time.clone(),
            current_step: report.current_step,
            memo: report.memo.clone(),
            reported_at: report.reported_at,
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self::from(&report)
    }
}

// ============================================================================
// Confirmation Mappers
// ============================================================================

impl From<&Confirmation> for ConfirmationResponse {
    fn from(confirmation: &Confirmation) -> Self {
        Self {
            id: confirmation.id.to_string(),
            schedule_id: confirmation.schedule_id.to_string(),
            user_id: confirmation.user_id.to_string(),
            confirmed: confirmation.confirmed,
            created_at: confirmation.created_at,
            updated_at: confirmation.updated_at,
        }
    }
}

impl From<Confirmation> for ConfirmationResponse {
    fn from(confirmation: Confirmation) -> Self {
        Self::from(&confirmation)
    }
}
