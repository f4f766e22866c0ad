//! Service context - dependency container for services
//!
//! Holds all repositories and shared services needed by the use cases.

use std::sync::Arc;

use callsheet_common::auth::JwtService;
use callsheet_core::traits::{
    ConfirmationRepository, ReportRepository, ScheduleRepository, UserRepository,
};
use callsheet_core::SnowflakeGenerator;
use callsheet_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for session tokens
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    schedule_repo: Arc<dyn ScheduleRepository>,
    report_repo: Arc<dyn ReportRepository>,
    confirmation_repo: Arc<dyn ConfirmationRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        schedule_repo: Arc<dyn ScheduleRepository>,
        report_repo: Arc<dyn ReportRepository>,
        confirmation_repo: Arc<dyn ConfirmationRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            schedule_repo,
            report_repo,
            confirmation_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the schedule repository
    pub fn schedule_repo(&self) -> &dyn ScheduleRepository {
        self.schedule_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the confirmation repository
    pub fn confirmation_repo(&self) -> &dyn ConfirmationRepository {
        self.confirmation_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> callsheet_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    schedule_repo: Option<Arc<dyn ScheduleRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    confirmation_repo: Option<Arc<dyn ConfirmationRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            schedule_repo: None,
            report_repo: None,
            confirmation_repo: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn schedule_repo(mut self, repo: Arc<dyn ScheduleRepository>) -> Self {
        self.schedule_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn confirmation_repo(mut self, repo: Arc<dyn ConfirmationRepository>) -> Self {
        self.confirmation_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.schedule_repo.ok_or_else(|| super::error::ServiceError::validation("schedule_repo is required"))?,
            self.report_repo.ok_or_else(|| super::error::ServiceError::validation("report_repo is required"))?,
            self.confirmation_repo.ok_or_else(|| super::error::ServiceError::validation("confirmation_repo is required"))?,
            self.jwt_service.ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator.ok_or_else(|| super::error::ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
