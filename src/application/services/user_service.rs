//! User CRUD service.

use std::sync::Arc;

use crate::domain::context::RequestContext;
use crate::domain::entities::{User, UserName};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for creating, reading, updating and deleting users.
///
/// Inputs arrive already validated; the service only drives the repository and
/// classifies its outcome. No call is retried.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    context: RequestContext,
}

impl UserService {
    /// Creates a service whose statements run without a deadline.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self::with_context(repository, RequestContext::background())
    }

    /// Creates a service that hands `context` to every repository call.
    pub fn with_context(repository: Arc<dyn UserRepository>, context: RequestContext) -> Self {
        Self {
            repository,
            context,
        }
    }

    /// Stores a new user and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    #[tracing::instrument(name = "users.service.create", skip(self, name), fields(name = %name))]
    pub async fn create_user(&self, name: &UserName) -> Result<User, AppError> {
        let user = self.repository.create(self.context, name).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    #[tracing::instrument(name = "users.service.get", skip(self))]
    pub async fn get_user(&self, user_id: i32) -> Result<User, AppError> {
        Ok(self.repository.find_by_id(self.context, user_id).await?)
    }

    /// Replaces the name of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    #[tracing::instrument(name = "users.service.update", skip(self, name), fields(name = %name))]
    pub async fn update_user(&self, user_id: i32, name: &UserName) -> Result<User, AppError> {
        let user = self.repository.update(self.context, user_id, name).await?;
        tracing::info!("User renamed");
        Ok(user)
    }

    /// Permanently deletes a user, returning the row as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    #[tracing::instrument(name = "users.service.delete", skip(self))]
    pub async fn delete_user(&self, user_id: i32) -> Result<User, AppError> {
        let user = self.repository.delete(self.context, user_id).await?;
        tracing::info!("User deleted");
        Ok(user)
    }

    /// Lists all users ordered by ascending id. May be empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    #[tracing::instrument(name = "users.service.list", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repository.list(self.context).await?)
    }
}
