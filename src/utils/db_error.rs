use crate::domain::repositories::RepositoryError;

/// Classifies a driver error into the repository outcome vocabulary.
///
/// A statement that returned no row is the only source of
/// [`RepositoryError::NotFound`]; everything else is internal.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        other => RepositoryError::internal(other.to_string()),
    }
}
