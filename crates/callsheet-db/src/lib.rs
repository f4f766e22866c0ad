//! # callsheet-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `callsheet-core`. It handles:
//!
//! - Connection pool management
//! - Schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use callsheet_db::pool::{create_pool, DatabaseConfig};
//! use callsheet_db::repositories::PgUserRepository;
//! use callsheet_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgConfirmationRepository, PgReportRepository, PgScheduleRepository, PgUserRepository,
};
