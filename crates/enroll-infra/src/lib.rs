//! # Enroll Infrastructure
//!
//! Concrete implementations of the ports defined in `enroll-core`.
//! This crate contains the user store backends and the authentication
//! primitives (password hashing, token issuance).
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL user store via SeaORM
//! - `auth` - Argon2 password hashing + JWT token issuance

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::InMemoryUserStore;

#[cfg(feature = "auth")]
pub use auth::{Argon2Config, Argon2PasswordService, JwtConfig, JwtTokenIssuer};

// Re-exports - Postgres
pub use database::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresUserStore};
