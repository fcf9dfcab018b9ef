//! Helpers shared by the persistence layer.
//!
//! - [`db_error`] - Driver error classification

pub mod db_error;
