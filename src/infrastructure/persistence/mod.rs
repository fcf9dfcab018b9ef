//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! parameterized statements.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage and retrieval

pub mod pg_user_repository;
pub mod pool;

pub use pg_user_repository::PgUserRepository;
pub use pool::create_pool;
