//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use callsheet_core::entities::{StaffRole, User};
use callsheet_core::error::DomainError;
use callsheet_core::traits::{RepoResult, UserRepository};
use callsheet_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, phone, role, gender, address, main_location, has_vehicle,
                   start_date, birth_date, status, memo, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, phone, role, gender, address, main_location, has_vehicle,
                   start_date, birth_date, status, memo, created_at, updated_at
            FROM users
            WHERE phone = $1
            ",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn phone_exists(&self, phone: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE phone = $1)
            ",
        )
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_by_role(&self, role: StaffRole) -> RepoResult<Vec<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, phone, role, gender, address, main_location, has_vehicle,
                   start_date, birth_date, status, memo, created_at, updated_at
            FROM users
            WHERE role = $1
            ORDER BY name ASC
            ",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_ids_by_role(&self, role: StaffRole) -> RepoResult<Vec<Snowflake>> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT id FROM users WHERE role = $1
            ",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, name, phone, role, gender, address, main_location,
                               has_vehicle, start_date, birth_date, status, memo,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.name)
        .bind(&user.phone)
        .bind(user.role.as_str())
        .bind(&user.gender)
        .bind(&user.address)
        .bind(&user.main_location)
        .bind(user.has_vehicle)
        .bind(&user.start_date)
        .bind(&user.birth_date)
        .bind(user.status.map(|s| s.as_str()))
        .bind(&user.memo)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PhoneAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET name = $2, phone = $3, role = $4, gender = $5, address = $6,
                main_location = $7, has_vehicle = $8, start_date = $9,
                birth_date = $10, status = $11, memo = $12, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.name)
        .bind(&user.phone)
        .bind(user.role.as_str())
        .bind(&user.gender)
        .bind(&user.address)
        .bind(&user.main_location)
        .bind(user.has_vehicle)
        .bind(&user.start_date)
        .bind(&user.birth_date)
        .bind(user.status.map(|s| s.as_str()))
        .bind(&user.memo)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PhoneAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
