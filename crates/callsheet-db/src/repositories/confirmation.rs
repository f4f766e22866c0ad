//! PostgreSQL implementation of ConfirmationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use callsheet_core::entities::Confirmation;
use callsheet_core::traits::{ConfirmationRepository, RepoResult};
use callsheet_core::value_objects::Snowflake;

use crate::models::ConfirmationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ConfirmationRepository
#[derive(Clone)]
pub struct PgConfirmationRepository {
    pool: PgPool,
}

impl PgConfirmationRepository {
    /// Create a new PgConfirmationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfirmationRepository for PgConfirmationRepository {
    #[instrument(skip(self))]
    async fn find_by_schedule(&self, schedule_id: Snowflake) -> RepoResult<Vec<Confirmation>> {
        let results = sqlx::query_as::<_, ConfirmationModel>(
            r"
            SELECT id, schedule_id, user_id, confirmed, created_at, updated_at
            FROM confirmations
            WHERE schedule_id = $1
            ",
        )
        .bind(schedule_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Confirmation::from).collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, confirmation: &Confirmation) -> RepoResult<Confirmation> {
        let result = sqlx::query_as::<_, ConfirmationModel>(
            r"
            INSERT INTO confirmations (id, schedule_id, user_id, confirmed, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (schedule_id, user_id) DO UPDATE
            SET confirmed = EXCLUDED.confirmed,
                updated_at = NOW()
            RETURNING id, schedule_id, user_id, confirmed, created_at, updated_at
            ",
        )
        .bind(confirmation.id.into_inner())
        .bind(confirmation.schedule_id.into_inner())
        .bind(confirmation.user_id.into_inner())
        .bind(confirmation.confirmed)
        .bind(confirmation.created_at)
        .bind(confirmation.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Confirmation::from(result))
    }
}
