//! DTOs for the user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

pub const DELETED_MSG: &str = "Deleted successfully";

/// Request body for `POST /user` and `PUT /user/{user_id}`.
///
/// `name` is optional here so that an absent name surfaces as a `required`
/// rule violation instead of a deserialization failure. Unknown fields such
/// as `user_id` are ignored.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
}

/// Wire representation of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: i32,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
        }
    }
}

/// Confirmation body returned by `DELETE /user/{user_id}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
