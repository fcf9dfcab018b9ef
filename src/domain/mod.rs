//! Domain layer containing the user entity and the persistence port.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions and their outcome types
//! - [`context`] - Per-request execution context handed to every repository call
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Store-specific error vocabulary never crosses into this layer; repositories
//!   report [`repositories::RepositoryError`] instead

pub mod context;
pub mod entities;
pub mod repositories;
