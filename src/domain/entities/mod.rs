//! Core domain entities.
//!
//! - [`User`] - A persisted user row
//! - [`UserName`] - A name that already satisfies the naming rules

pub mod user;

pub use user::{NAME_RULES, NameRules, User, UserName};
