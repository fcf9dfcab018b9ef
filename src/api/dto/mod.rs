//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Request DTOs
//! stay unconstrained; [`crate::api::validation`] turns them into domain values.

pub mod health;
pub mod user;
