//! Request validation: raw path and body input in, typed values out.
//!
//! Everything here runs before any persistence call. A failure becomes an
//! [`AppError::Validation`] whose detail names the violated rule, for example
//! `name failed on the 'length' rule: name must be at most 20 characters`.

use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use std::borrow::Cow;
use validator::ValidationError;

use crate::api::dto::user::UserRequest;
use crate::domain::entities::UserName;
use crate::error::AppError;

/// Renders a rule violation as the diagnostic string returned to clients.
fn describe(field: &str, err: &ValidationError) -> String {
    match &err.message {
        Some(message) => format!("{field} failed on the '{}' rule: {message}", err.code),
        None => format!("{field} failed on the '{}' rule", err.code),
    }
}

/// Parses a path segment as a 32-bit user id.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `raw` is not a base-10 integer within
/// the `i32` range.
pub fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|_| {
        let mut err = ValidationError::new("numeric")
            .with_message(Cow::Borrowed("user_id must be a 32-bit integer"));
        err.add_param(Cow::Borrowed("value"), &raw);
        AppError::bad_id(describe("user_id", &err))
    })
}

/// Extracts and parses the `user_id` path parameter.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the parameter is missing, not valid
/// UTF-8, or not a 32-bit integer.
pub fn parse_path_id(path: Result<Path<String>, PathRejection>) -> Result<i32, AppError> {
    let Path(raw) = path.map_err(|rejection| AppError::bad_id(rejection.body_text()))?;
    parse_user_id(&raw)
}

/// Extracts the JSON body and validates its `name`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the body is not a JSON object with a
/// string `name`, or if the name breaks a naming rule.
pub fn parse_user_body(
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<UserName, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::bad_name(rejection.body_text()))?;

    UserName::parse(request.name).map_err(|err| AppError::bad_name(describe("name", &err)))
}
