//! Report service
//!
//! Progress report submission and lookup. Staff submit against their own
//! slot; admins may submit on behalf of either slot holder.

use callsheet_common::Claims;
use callsheet_core::entities::{Report, ScheduleStatus};
use callsheet_core::{DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::dto::{CreateReportRequest, ReportResponse, UpdateReportRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::require_admin;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List reports: every report for an admin, own reports for staff
    #[instrument(skip(self, session))]
    pub async fn list_reports(&self, session: &Claims) -> ServiceResult<Vec<ReportResponse>> {
        let reports = if session.is_admin() {
            self.ctx.report_repo().find_all().await?
        } else {
            let user_id = session.user_id()?;
            self.ctx.report_repo().find_by_user(user_id).await?
        };

        Ok(reports.iter().map(ReportResponse::from).collect())
    }

    /// Get a single report, admin or owner only
    #[instrument(skip(self, session))]
    pub async fn get_report(
        &self,
        session: &Claims,
        report_id: Snowflake,
    ) -> ServiceResult<ReportResponse> {
        let report = self
            .ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", report_id.to_string()))?;

        if !session.is_admin() && !report.is_owned_by(session.user_id()?) {
            return Err(ServiceError::permission_denied(
                "this report belongs to another user",
            ));
        }

        Ok(ReportResponse::from(&report))
    }

    /// All reports attached to one schedule
    #[instrument(skip(self, _session))]
    pub async fn reports_by_schedule(
        &self,
        _session: &Claims,
        schedule_id: Snowflake,
    ) -> ServiceResult<Vec<ReportResponse>> {
        self.ctx
            .schedule_repo()
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Schedule", schedule_id.to_string()))?;

        let reports = self.ctx.report_repo().find_by_schedule(schedule_id).await?;
        Ok(reports.iter().map(ReportResponse::from).collect())
    }

    /// All reports submitted by one user, admin or self only
    #[instrument(skip(self, session))]
    pub async fn reports_by_user(
        &self,
        session: &Claims,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<ReportResponse>> {
        if !session.is_admin() && session.user_id()? != user_id {
            return Err(ServiceError::permission_denied(
                "cannot read another user's reports",
            ));
        }

        let reports = self.ctx.report_repo().find_by_user(user_id).await?;
        Ok(reports.iter().map(ReportResponse::from).collect())
    }

    /// Submit a progress report for a schedule slot
    ///
    /// An explicit `role` is the admin path: the report lands on whoever
    /// holds that slot. Without one the caller's own slot is used. One
    /// report per slot; resubmission overwrites. A staff submission also
    /// moves the schedule status along with the report.
    #[instrument(skip(self, session, request), fields(schedule_id = %request.schedule_id))]
    pub async fn create_report(
        &self,
        session: &Claims,
        request: CreateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        let schedule_id = request
            .schedule_id
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| ServiceError::validation("Invalid schedule id"))?;

        let mut schedule = self
            .ctx
            .schedule_repo()
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Schedule", schedule_id.to_string()))?;

        let (role, user_id) = match request.role {
            Some(role) => {
                if !session.is_admin() {
                    return Err(ServiceError::permission_denied(
                        "Only an admin may supply a report role",
                    ));
                }
                let user_id = schedule
                    .slot_user(role)
                    .ok_or(ServiceError::Domain(DomainError::SlotUnfilled(role)))?;
                (role, user_id)
            }
            None => {
                let caller = session.user_id()?;
                let role = schedule
                    .slot_of(caller)
                    .ok_or(ServiceError::Domain(DomainError::CannotDetermineRole))?;
                (role, caller)
            }
        };

        let now = Utc::now();
        let report = Report {
            id: self.ctx.generate_id(),
            schedule_id,
            user_id,
            role,
            status: request.status,
            estimated_time: request.estimated_time,
            current_step: request.current_step.unwrap_or(0),
            memo: request.memo,
            reported_at: now,
            created_at: now,
            updated_at: now,
        };

        let stored = self.ctx.report_repo().upsert(&report).await?;

        info!(report_id = %stored.id, role = %role, status = %stored.status, "Report submitted");

        if !session.is_admin() {
            schedule.set_status(ScheduleStatus::from(request.status));
            self.ctx.schedule_repo().update(&schedule).await?;
            info!(schedule_id = %schedule_id, status = %schedule.status, "Schedule status synced to report");
        }

        Ok(ReportResponse::from(&stored))
    }

    /// Admin correction of a report; only supplied fields overwrite
    ///
    /// `reported_at` keeps the original submission time.
    #[instrument(skip(self, session, request))]
    pub async fn update_report(
        &self,
        session: &Claims,
        report_id: Snowflake,
        request: UpdateReportRequest,
    ) -> ServiceResult<ReportResponse> {
        require_admin(session)?;

        let mut report = self
            .ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Report", report_id.to_string()))?;

        let mut changed = false;

        if let Some(status) = request.status {
            report.status = status;
            changed = true;
        }
        if let Some(estimated_time) = request.estimated_time {
            report.estimated_time = Some(estimated_time);
            changed = true;
        }
        if let Some(current_step) = request.current_step {
            report.current_step = current_step;
            changed = true;
        }
        if let Some(memo) = request.memo {
            report.memo = Some(memo);
            changed = true;
        }

        if changed {
            report.touch();
            self.ctx.report_repo().update(&report).await?;
            info!(report_id = %report_id, "Report updated");
        }

        Ok(ReportResponse::from(&report))
    }

    /// Delete a report, owner only
    ///
    /// Missing and unowned rows both come back as `false`.
    #[instrument(skip(self, session))]
    pub async fn delete_report(
        &self,
        session: &Claims,
        report_id: Snowflake,
    ) -> ServiceResult<bool> {
        let Some(report) = self.ctx.report_repo().find_by_id(report_id).await? else {
            warn!(report_id = %report_id, "Delete skipped: report not found");
            return Ok(false);
        };

        if !report.is_owned_by(session.user_id()?) {
            warn!(report_id = %report_id, "Delete skipped: report belongs to another user");
            return Ok(false);
        }

        let deleted = self.ctx.report_repo().delete(report_id).await?;

        if deleted {
            info!(report_id = %report_id, "Report deleted");
        }

        Ok(deleted)
    }
}
