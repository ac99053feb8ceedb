//! # BYOV Infrastructure
//!
//! Concrete implementations of the ports defined in `byov-core`.
//! This crate contains the document store adapters (users, posts, likes and
//! preferences), the cache and the authentication provider.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL document store via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod cache;
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use database::{
    InMemoryLikeRepository, InMemoryPostRepository, InMemoryPreferenceRepository,
    InMemoryRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtAuthProvider, JwtConfig, JwtTokenService};
