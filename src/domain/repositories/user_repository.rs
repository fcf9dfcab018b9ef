//! Repository trait for user data access.

use crate::domain::context::RequestContext;
use crate::domain::entities::{User, UserName};
use async_trait::async_trait;

/// Outcome of a repository call that did not produce a value.
///
/// Every single-row operation resolves to exactly one of: `Ok(user)` (found),
/// [`RepositoryError::NotFound`], or [`RepositoryError::Internal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The statement matched zero rows for the requested id.
    #[error("no rows in result set")]
    NotFound,

    /// Connectivity, constraint, timeout or any other store failure.
    #[error("{detail}")]
    Internal { detail: String },
}

impl RepositoryError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

/// Repository interface for managing users.
///
/// Each method runs a single parameterized statement, so every call is atomic
/// on its own. There is no multi-statement transaction and no concurrency
/// token: concurrent updates of one row resolve as last writer wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user and returns the row with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Internal`] on database errors.
    async fn create(&self, ctx: RequestContext, name: &UserName) -> Result<User, RepositoryError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row has this id.
    /// Returns [`RepositoryError::Internal`] on database errors.
    async fn find_by_id(&self, ctx: RequestContext, id: i32) -> Result<User, RepositoryError>;

    /// Overwrites the name of an existing user and returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row has this id.
    /// Returns [`RepositoryError::Internal`] on database errors.
    async fn update(
        &self,
        ctx: RequestContext,
        id: i32,
        name: &UserName,
    ) -> Result<User, RepositoryError>;

    /// Permanently removes a user and returns the row as it was before deletion.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row has this id.
    /// Returns [`RepositoryError::Internal`] on database errors.
    async fn delete(&self, ctx: RequestContext, id: i32) -> Result<User, RepositoryError>;

    /// Lists every user ordered by ascending id.
    ///
    /// An empty table yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Internal`] on database errors.
    async fn list(&self, ctx: RequestContext) -> Result<Vec<User>, RepositoryError>;

    /// Removes every user.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Internal`] on database errors.
    async fn truncate(&self, ctx: RequestContext) -> Result<(), RepositoryError>;
}
