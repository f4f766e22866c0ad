//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use callsheet_core::entities::{Report, ReportRole};
use callsheet_core::traits::{RepoResult, ReportRepository};
use callsheet_core::value_objects::Snowflake;

use crate::models::ReportModel;

use super::error::{map_db_error, report_not_found};

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Report>> {
        let result = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, schedule_id, user_id, role, status, estimated_time, current_step,
                   memo, reported_at, created_at, updated_at
            FROM reports
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Report::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Report>> {
        let results = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, schedule_id, user_id, role, status, estimated_time, current_step,
                   memo, reported_at, created_at, updated_at
            FROM reports
            ORDER BY reported_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Report>> {
        let results = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, schedule_id, user_id, role, status, estimated_time, current_step,
                   memo, reported_at, created_at, updated_at
            FROM reports
            WHERE user_id = $1
            ORDER BY reported_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_schedule(&self, schedule_id: Snowflake) -> RepoResult<Vec<Report>> {
        // MAIN sorts before SUB
        let results = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, schedule_id, user_id, role, status, estimated_time, current_step,
                   memo, reported_at, created_at, updated_at
            FROM reports
            WHERE schedule_id = $1
            ORDER BY role ASC
            ",
        )
        .bind(schedule_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, report: &Report) -> RepoResult<Report> {
        // One report per schedule slot. A second submission for the same
        // slot overwrites the submission fields and keeps the original
        // row id, closing the lookup-then-insert race.
        let result = sqlx::query_as::<_, ReportModel>(
            r"
            INSERT INTO reports (id, schedule_id, user_id, role, status, estimated_time,
                                 current_step, memo, reported_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (schedule_id, role) DO UPDATE
            SET user_id = EXCLUDED.user_id,
                status = EXCLUDED.status,
                estimated_time = EXCLUDED.estimated_time,
                current_step = EXCLUDED.current_step,
                memo = EXCLUDED.memo,
                reported_at = EXCLUDED.reported_at,
                updated_at = NOW()
            RETURNING id, schedule_id, user_id, role, status, estimated_time, current_step,
                      memo, reported_at, created_at, updated_at
            ",
        )
        .bind(report.id.into_inner())
        .bind(report.schedule_id.into_inner())
        .bind(report.user_id.into_inner())
        .bind(report.role.as_str())
        .bind(report.status.as_str())
        .bind(&report.estimated_time)
        .bind(report.current_step)
        .bind(&report.memo)
        .bind(report.reported_at)
        .bind(report.created_at)
        .bind(report.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Report::from(result))
    }

    #[instrument(skip(self))]
    async fn update(&self, report: &Report) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reports
            SET status = $2, estimated_time = $3, current_step = $4, memo = $5,
                reported_at = $6, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(report.id.into_inner())
        .bind(report.status.as_str())
        .bind(&report.estimated_time)
        .bind(report.current_step)
        .bind(&report.memo)
        .bind(report.reported_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(report_not_found(report.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM reports WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_by_slot(&self, schedule_id: Snowflake, role: ReportRole) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM reports WHERE schedule_id = $1 AND role = $2
            ",
        )
        .bind(schedule_id.into_inner())
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
