//! Schedule service
//!
//! Part-scoped schedule CRUD, the upcoming/history calendar views, bulk
//! confirmation, and slot acknowledgment.

use callsheet_common::Claims;
use callsheet_core::entities::{Confirmation, Report, ReportRole, Schedule, ScheduleStatus};
use callsheet_core::traits::{ScheduleQuery, UpcomingWindow};
use callsheet_core::Snowflake;
use chrono::{Datelike, Local, NaiveDate, Utc};
use futures::future::try_join_all;
use tracing::{info, instrument, warn};

use crate::dto::{
    split_reports, ConfirmSchedulesRequest, ConfirmSchedulesResponse, ConfirmationResponse,
    CreateScheduleRequest, ScheduleResponse, ScheduleWithDetails, UpcomingScheduleResponse,
    UpcomingScheduleWithDetails, UpdateScheduleRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::{require_admin, PermissionService};

/// Schedule service
pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Part-filtered schedule list, time ascending
    ///
    /// Only schedules owned by the caller's part appear here; `status`
    /// defaults to the assigned/confirmed pair when omitted.
    #[instrument(skip(self, session))]
    pub async fn list_schedules(
        &self,
        session: &Claims,
        date: Option<String>,
        status: Option<ScheduleStatus>,
    ) -> ServiceResult<Vec<ScheduleResponse>> {
        let part = require_admin(session)?;
        let staff_ids = PermissionService::new(self.ctx).part_staff_ids(part).await?;

        let statuses = match status {
            Some(status) => vec![status],
            None => vec![ScheduleStatus::Assigned, ScheduleStatus::Confirmed],
        };

        let schedules = self
            .ctx
            .schedule_repo()
            .find_owned(&staff_ids, ScheduleQuery { date, statuses })
            .await?;

        self.enrich_all(schedules).await
    }

    /// Upcoming view: the current month's not-yet-passed schedules
    ///
    /// Rows dated today appear only while unassigned; strictly future
    /// days appear regardless of status. Sorted by (date, time).
    #[instrument(skip(self, session))]
    pub async fn upcoming_schedules(
        &self,
        session: &Claims,
    ) -> ServiceResult<Vec<UpcomingScheduleResponse>> {
        let part = require_admin(session)?;
        let staff_ids = PermissionService::new(self.ctx).part_staff_ids(part).await?;

        let schedules = self
            .ctx
            .schedule_repo()
            .find_upcoming(&staff_ids, current_month_window())
            .await?;

        try_join_all(
            schedules
                .into_iter()
                .map(|schedule| self.enrich_upcoming(schedule)),
        )
        .await
    }

    /// History view: part-visible schedules dated before today, newest
    /// created first
    #[instrument(skip(self, session))]
    pub async fn history_schedules(
        &self,
        session: &Claims,
    ) -> ServiceResult<Vec<ScheduleResponse>> {
        let part = require_admin(session)?;
        let staff_ids = PermissionService::new(self.ctx).part_staff_ids(part).await?;

        let schedules = self
            .ctx
            .schedule_repo()
            .find_history(&staff_ids, &today_string())
            .await?;

        self.enrich_all(schedules).await
    }

    /// Get a single schedule, part ownership required
    #[instrument(skip(self, session))]
    pub async fn get_schedule(
        &self,
        session: &Claims,
        schedule_id: Snowflake,
    ) -> ServiceResult<ScheduleResponse> {
        let part = require_admin(session)?;

        let schedule = self
            .ctx
            .schedule_repo()
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Schedule", schedule_id.to_string()))?;

        PermissionService::new(self.ctx)
            .require_owned(&schedule, part)
            .await?;

        self.enrich(schedule).await
    }

    /// Create a schedule; status defaults to unassigned
    #[instrument(skip(self, session, request))]
    pub async fn create_schedule(
        &self,
        session: &Claims,
        request: CreateScheduleRequest,
    ) -> ServiceResult<ScheduleResponse> {
        require_admin(session)?;

        let main_user = parse_slot(request.main_user.as_deref(), "main user")?;
        let sub_user = parse_slot(request.sub_user.as_deref(), "sub user")?;

        let schedule_id = self.ctx.generate_id();
        let now = Utc::now();

        let schedule = Schedule {
            id: schedule_id,
            main_user,
            sub_user,
            groom: request.groom,
            bride: request.bride,
            date: request.date,
            time: request.time,
            user_arrival_time: request.user_arrival_time,
            location: request.location,
            venue: request.venue,
            memo: request.memo,
            status: request.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.ctx.schedule_repo().create(&schedule).await?;

        info!(schedule_id = %schedule_id, date = %schedule.date, "Schedule created");

        self.enrich(schedule).await
    }

    /// Update a schedule; only supplied fields overwrite
    ///
    /// Unassigned rows are editable by any part (they have no owning part
    /// yet); once a slot is filled the owning part is required. Replacing
    /// a slot holder drops that slot's report.
    #[instrument(skip(self, session, request))]
    pub async fn update_schedule(
        &self,
        session: &Claims,
        schedule_id: Snowflake,
        request: UpdateScheduleRequest,
    ) -> ServiceResult<ScheduleResponse> {
        let part = require_admin(session)?;

        let mut schedule = self
            .ctx
            .schedule_repo()
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Schedule", schedule_id.to_string()))?;

        if schedule.status != ScheduleStatus::Unassigned {
            PermissionService::new(self.ctx)
                .require_owned(&schedule, part)
                .await?;
        }

        let old_main = schedule.main_user;
        let old_sub = schedule.sub_user;
        let mut changed = false;

        if let Some(value) = request.main_user {
            schedule.main_user = Some(parse_snowflake(&value, "main user")?);
            changed = true;
        }
        if let Some(value) = request.sub_user {
            schedule.sub_user = Some(parse_snowflake(&value, "sub user")?);
            changed = true;
        }
        if let Some(groom) = request.groom {
            schedule.groom = groom;
            changed = true;
        }
        if let Some(bride) = request.bride {
            schedule.bride = bride;
            changed = true;
        }
        if let Some(date) = request.date {
            schedule.date = date;
            changed = true;
        }
        if let Some(time) = request.time {
            schedule.time = time;
            changed = true;
        }
        if let Some(user_arrival_time) = request.user_arrival_time {
            schedule.user_arrival_time = Some(user_arrival_time);
            changed = true;
        }
        if let Some(location) = request.location {
            schedule.location = Some(location);
            changed = true;
        }
        if let Some(venue) = request.venue {
            schedule.venue = Some(venue);
            changed = true;
        }
        if let Some(memo) = request.memo {
            schedule.memo = Some(memo);
            changed = true;
        }
        if let Some(status) = request.status {
            schedule.status = status;
            changed = true;
        }

        if changed {
            schedule.touch();
            self.ctx.schedule_repo().update(&schedule).await?;
            info!(schedule_id = %schedule_id, "Schedule updated");
        }

        if schedule.main_user != old_main {
            let dropped = self
                .ctx
                .report_repo()
                .delete_by_slot(schedule_id, ReportRole::Main)
                .await?;
            if dropped {
                info!(schedule_id = %schedule_id, "Main slot report dropped after reassignment");
            }
        }
        if schedule.sub_user != old_sub {
            let dropped = self
                .ctx
                .report_repo()
                .delete_by_slot(schedule_id, ReportRole::Sub)
                .await?;
            if dropped {
                info!(schedule_id = %schedule_id, "Sub slot report dropped after reassignment");
            }
        }

        self.enrich(schedule).await
    }

    /// Bulk confirm: moves owned, currently assigned schedules to
    /// confirmed and seeds a pending report per filled slot
    ///
    /// Ids that are missing, unowned, or not in assigned status are
    /// skipped silently; the count reflects only the rows moved.
    #[instrument(skip(self, session, request), fields(requested = request.schedule_ids.len()))]
    pub async fn confirm_schedules(
        &self,
        session: &Claims,
        request: ConfirmSchedulesRequest,
    ) -> ServiceResult<ConfirmSchedulesResponse> {
        let part = require_admin(session)?;
        let staff_ids = PermissionService::new(self.ctx).part_staff_ids(part).await?;

        let mut ids = Vec::with_capacity(request.schedule_ids.len());
        for value in &request.schedule_ids {
            ids.push(parse_snowflake(value, "schedule")?);
        }

        let mut confirmable = Vec::new();
        let mut seeds = Vec::new();
        for id in ids {
            let Some(schedule) = self.ctx.schedule_repo().find_by_id(id).await? else {
                continue;
            };
            if !schedule.can_confirm() || !schedule.held_by_any(&staff_ids) {
                continue;
            }
            if let Some(user_id) = schedule.main_user {
                seeds.push(Report::seeded(
                    self.ctx.generate_id(),
                    schedule.id,
                    user_id,
                    ReportRole::Main,
                ));
            }
            if let Some(user_id) = schedule.sub_user {
                seeds.push(Report::seeded(
                    self.ctx.generate_id(),
                    schedule.id,
                    user_id,
                    ReportRole::Sub,
                ));
            }
            confirmable.push(schedule.id);
        }

        let updated_count = self
            .ctx
            .schedule_repo()
            .confirm_many(&confirmable, &seeds)
            .await?;

        info!(updated = updated_count, "Schedules confirmed");

        Ok(ConfirmSchedulesResponse {
            success: true,
            updated_count,
        })
    }

    /// Delete a schedule together with its reports and acknowledgments
    ///
    /// Not-found and not-owned both come back as `false`, never an error.
    #[instrument(skip(self, session))]
    pub async fn delete_schedule(
        &self,
        session: &Claims,
        schedule_id: Snowflake,
    ) -> ServiceResult<bool> {
        let part = require_admin(session)?;

        let Some(schedule) = self.ctx.schedule_repo().find_by_id(schedule_id).await? else {
            warn!(schedule_id = %schedule_id, "Delete skipped: schedule not found");
            return Ok(false);
        };

        if !PermissionService::new(self.ctx)
            .check_owned(&schedule, part)
            .await?
        {
            warn!(schedule_id = %schedule_id, "Delete skipped: schedule belongs to another part");
            return Ok(false);
        }

        let deleted = self
            .ctx
            .schedule_repo()
            .delete_with_dependents(schedule_id)
            .await?;

        if deleted {
            info!(schedule_id = %schedule_id, "Schedule deleted");
        }

        Ok(deleted)
    }

    /// Patch the assignment status directly, part ownership required
    #[instrument(skip(self, session))]
    pub async fn patch_status(
        &self,
        session: &Claims,
        schedule_id: Snowflake,
        status: ScheduleStatus,
    ) -> ServiceResult<ScheduleResponse> {
        let part = require_admin(session)?;

        let mut schedule = self
            .ctx
            .schedule_repo()
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Schedule", schedule_id.to_string()))?;

        PermissionService::new(self.ctx)
            .require_owned(&schedule, part)
            .await?;

        schedule.set_status(status);
        self.ctx.schedule_repo().update(&schedule).await?;

        info!(schedule_id = %schedule_id, status = %status, "Schedule status patched");

        self.enrich(schedule).await
    }

    /// Record the caller's acknowledgment of a schedule they are
    /// assigned to
    #[instrument(skip(self, session))]
    pub async fn acknowledge(
        &self,
        session: &Claims,
        schedule_id: Snowflake,
    ) -> ServiceResult<ConfirmationResponse> {
        let user_id = session.user_id()?;

        let schedule = self
            .ctx
            .schedule_repo()
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Schedule", schedule_id.to_string()))?;

        if schedule.slot_of(user_id).is_none() {
            return Err(ServiceError::permission_denied(
                "not assigned to this schedule",
            ));
        }

        let confirmation =
            Confirmation::new(self.ctx.generate_id(), schedule_id, user_id, true);
        let stored = self.ctx.confirmation_repo().upsert(&confirmation).await?;

        info!(schedule_id = %schedule_id, user_id = %user_id, "Schedule acknowledged");

        Ok(ConfirmationResponse::from(&stored))
    }

    /// Resolve display names and per-slot report fields for one schedule
    async fn enrich(&self, schedule: Schedule) -> ServiceResult<ScheduleResponse> {
        let main_user_name = self.resolve_name(schedule.main_user).await?;
        let sub_user_name = self.resolve_name(schedule.sub_user).await?;
        let reports = self.ctx.report_repo().find_by_schedule(schedule.id).await?;
        let (main_report, sub_report) = split_reports(reports);

        Ok(ScheduleResponse::from(ScheduleWithDetails {
            schedule,
            main_user_name,
            sub_user_name,
            main_report,
            sub_report,
        }))
    }

    /// Enrich concurrently across schedules, sequentially within each
    async fn enrich_all(&self, schedules: Vec<Schedule>) -> ServiceResult<Vec<ScheduleResponse>> {
        try_join_all(schedules.into_iter().map(|schedule| self.enrich(schedule))).await
    }

    async fn enrich_upcoming(
        &self,
        schedule: Schedule,
    ) -> ServiceResult<UpcomingScheduleResponse> {
        let main_user_name = self.resolve_name(schedule.main_user).await?;
        let sub_user_name = self.resolve_name(schedule.sub_user).await?;
        let reports = self.ctx.report_repo().find_by_schedule(schedule.id).await?;
        let (main_report, sub_report) = split_reports(reports);

        let confirmations = self
            .ctx
            .confirmation_repo()
            .find_by_schedule(schedule.id)
            .await?;
        let acknowledged = |slot: Option<Snowflake>| {
            slot.is_some_and(|user_id| {
                confirmations
                    .iter()
                    .any(|c| c.user_id == user_id && c.confirmed)
            })
        };
        let main_user_confirmed = acknowledged(schedule.main_user);
        let sub_user_confirmed = acknowledged(schedule.sub_user);

        Ok(UpcomingScheduleResponse::from(UpcomingScheduleWithDetails {
            schedule,
            main_user_name,
            sub_user_name,
            main_report,
            sub_report,
            main_user_confirmed,
            sub_user_confirmed,
        }))
    }

    async fn resolve_name(&self, user_id: Option<Snowflake>) -> ServiceResult<Option<String>> {
        let Some(user_id) = user_id else {
            return Ok(None);
        };
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .map(|user| user.name))
    }
}

fn parse_snowflake(value: &str, field: &str) -> ServiceResult<Snowflake> {
    value
        .parse::<i64>()
        .map(Snowflake::new)
        .map_err(|_| ServiceError::validation(format!("Invalid {field} id")))
}

fn parse_slot(value: Option<&str>, field: &str) -> ServiceResult<Option<Snowflake>> {
    value.map(|v| parse_snowflake(v, field)).transpose()
}

/// Today in the server's local calendar, `YYYY-MM-DD`
fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn current_month_window() -> UpcomingWindow {
    month_window_for(Local::now().date_naive())
}

/// Inclusive first/last day of the month containing `today`
fn month_window_for(today: NaiveDate) -> UpcomingWindow {
    let month_start = today.with_day(1).unwrap_or(today);
    let month_end = next_month_start(today).pred_opt().unwrap_or(today);

    UpcomingWindow {
        month_start: month_start.format("%Y-%m-%d").to_string(),
        month_end: month_end.format("%Y-%m-%d").to_string(),
        today: today.format("%Y-%m-%d").to_string(),
    }
}

fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
