//! PostgreSQL implementation of ScheduleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use callsheet_core::entities::{Report, Schedule};
use callsheet_core::traits::{RepoResult, ScheduleQuery, ScheduleRepository, UpcomingWindow};
use callsheet_core::value_objects::Snowflake;

use crate::models::ScheduleModel;

use super::error::{map_db_error, schedule_not_found};

/// PostgreSQL implementation of ScheduleRepository
#[derive(Clone)]
pub struct PgScheduleRepository {
    pool: PgPool,
}

impl PgScheduleRepository {
    /// Create a new PgScheduleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Schedule>> {
        let result = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, main_user, sub_user, groom, bride, date, time, user_arrival_time,
                   location, venue, memo, status, created_at, updated_at
            FROM schedules
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Schedule::from))
    }

    #[instrument(skip(self))]
    async fn find_owned(
        &self,
        owner_ids: &[Snowflake],
        query: ScheduleQuery,
    ) -> RepoResult<Vec<Schedule>> {
        // Ownership-only view: a part with no staff owns nothing.
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = owner_ids.iter().map(|s| s.into_inner()).collect();
        let statuses: Vec<String> = query
            .statuses
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();

        let results = match query.date {
            Some(date) => {
                sqlx::query_as::<_, ScheduleModel>(
                    r"
                    SELECT id, main_user, sub_user, groom, bride, date, time, user_arrival_time,
                           location, venue, memo, status, created_at, updated_at
                    FROM schedules
                    WHERE (main_user = ANY($1) OR sub_user = ANY($1))
                      AND status = ANY($2)
                      AND date = $3
                    ORDER BY time ASC
                    ",
                )
                .bind(&ids)
                .bind(&statuses)
                .bind(date)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ScheduleModel>(
                    r"
                    SELECT id, main_user, sub_user, groom, bride, date, time, user_arrival_time,
                           location, venue, memo, status, created_at, updated_at
                    FROM schedules
                    WHERE (main_user = ANY($1) OR sub_user = ANY($1))
                      AND status = ANY($2)
                    ORDER BY time ASC
                    ",
                )
                .bind(&ids)
                .bind(&statuses)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Schedule::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_upcoming(
        &self,
        owner_ids: &[Snowflake],
        window: UpcomingWindow,
    ) -> RepoResult<Vec<Schedule>> {
        // Unassigned rows stay visible even when the part has no staff,
        // so an empty owner set does not short-circuit here.
        let ids: Vec<i64> = owner_ids.iter().map(|s| s.into_inner()).collect();

        let results = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, main_user, sub_user, groom, bride, date, time, user_arrival_time,
                   location, venue, memo, status, created_at, updated_at
            FROM schedules
            WHERE (main_user = ANY($1) OR sub_user = ANY($1) OR status = 'unassigned')
              AND date >= $2 AND date <= $3
              AND (date > $4 OR (date = $4 AND status = 'unassigned'))
            ORDER BY date ASC, time ASC
            ",
        )
        .bind(&ids)
        .bind(&window.month_start)
        .bind(&window.month_end)
        .bind(&window.today)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Schedule::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_history(&self, owner_ids: &[Snowflake], today: &str) -> RepoResult<Vec<Schedule>> {
        let ids: Vec<i64> = owner_ids.iter().map(|s| s.into_inner()).collect();

        let results = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, main_user, sub_user, groom, bride, date, time, user_arrival_time,
                   location, venue, memo, status, created_at, updated_at
            FROM schedules
            WHERE (main_user = ANY($1) OR sub_user = ANY($1) OR status = 'unassigned')
              AND date < $2
            ORDER BY created_at DESC
            ",
        )
        .bind(&ids)
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Schedule::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, schedule: &Schedule) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO schedules (id, main_user, sub_user, groom, bride, date, time,
                                   user_arrival_time, location, venue, memo, status,
                                   created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(schedule.id.into_inner())
        .bind(schedule.main_user.map(Snowflake::into_inner))
        .bind(schedule.sub_user.map(Snowflake::into_inner))
        .bind(&schedule.groom)
        .bind(&schedule.bride)
        .bind(&schedule.date)
        .bind(&schedule.time)
        .bind(&schedule.user_arrival_time)
        .bind(&schedule.location)
        .bind(&schedule.venue)
        .bind(&schedule.memo)
        .bind(schedule.status.as_str())
        .bind(schedule.created_at)
        .bind(schedule.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, schedule: &Schedule) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE schedules
            SET main_user = $2, sub_user = $3, groom = $4, bride = $5, date = $6,
                time = $7, user_arrival_time = $8, location = $9, venue = $10,
                memo = $11, status = $12, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(schedule.id.into_inner())
        .bind(schedule.main_user.map(Snowflake::into_inner))
        .bind(schedule.sub_user.map(Snowflake::into_inner))
        .bind(&schedule.groom)
        .bind(&schedule.bride)
        .bind(&schedule.date)
        .bind(&schedule.time)
        .bind(&schedule.user_arrival_time)
        .bind(&schedule.location)
        .bind(&schedule.venue)
        .bind(&schedule.memo)
        .bind(schedule.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(schedule_not_found(schedule.id));
        }

        Ok(())
    }

    #[instrument(skip(self, seeds))]
    async fn confirm_many(&self, ids: &[Snowflake], seeds: &[Report]) -> RepoResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let id_values: Vec<i64> = ids.iter().map(|s| s.into_inner()).collect();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Re-check the assigned status inside the transaction; the caller's
        // filter ran on an earlier read.
        let confirmed: Vec<i64> = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE schedules
            SET status = 'confirmed', updated_at = NOW()
            WHERE id = ANY($1) AND status = 'assigned'
            RETURNING id
            ",
        )
        .bind(&id_values)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for seed in seeds
            .iter()
            .filter(|r| confirmed.contains(&r.schedule_id.into_inner()))
        {
            sqlx::query(
                r"
                INSERT INTO reports (id, schedule_id, user_id, role, status, estimated_time,
                                     current_step, memo, reported_at, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ON CONFLICT (schedule_id, role) DO NOTHING
                ",
            )
            .bind(seed.id.into_inner())
            .bind(seed.schedule_id.into_inner())
            .bind(seed.user_id.into_inner())
            .bind(seed.role.as_str())
            .bind(seed.status.as_str())
            .bind(&seed.estimated_time)
            .bind(seed.current_step)
            .bind(&seed.memo)
            .bind(seed.reported_at)
            .bind(seed.created_at)
            .bind(seed.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(confirmed.len() as u64)
    }

    #[instrument(skip(self))]
    async fn delete_with_dependents(&self, id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM reports WHERE schedule_id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM confirmations WHERE schedule_id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM schedules WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
