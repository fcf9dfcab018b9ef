//! Application layer services implementing business logic.
//!
//! Services consume repository traits and turn repository outcomes into
//! [`crate::error::AppError`] for the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD orchestration

pub mod services;
