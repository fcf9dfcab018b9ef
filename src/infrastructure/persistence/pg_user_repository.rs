//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;

use crate::domain::context::RequestContext;
use crate::domain::entities::{User, UserName};
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::utils::db_error::map_sqlx_error;

const CREATE_USER: &str = r#"
    INSERT INTO users (name)
    VALUES ($1)
    RETURNING id, name
"#;

const GET_USER: &str = r#"
    SELECT id, name
    FROM users
    WHERE id = $1
    LIMIT 1
"#;

const UPDATE_USER: &str = r#"
    UPDATE users
    SET name = $2
    WHERE id = $1
    RETURNING id, name
"#;

const DELETE_USER: &str = r#"
    DELETE FROM users
    WHERE id = $1
    RETURNING id, name
"#;

const LIST_USERS: &str = r#"
    SELECT id, name
    FROM users
    ORDER BY id
"#;

const TRUNCATE_USERS: &str = "TRUNCATE users";

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.name)
    }
}

/// PostgreSQL repository for user storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Driver errors are
/// classified here and never leave this type as `sqlx::Error`.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Drives `statement` under the deadline carried by `ctx`, if any.
async fn run<T, F>(ctx: RequestContext, statement: F) -> Result<T, RepositoryError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    let result = match ctx.timeout() {
        Some(limit) => tokio::time::timeout(limit, statement)
            .await
            .map_err(|_| RepositoryError::internal("context deadline exceeded"))?,
        None => statement.await,
    };

    result.map_err(map_sqlx_error)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, ctx: RequestContext, name: &UserName) -> Result<User, RepositoryError> {
        let row = run(
            ctx,
            sqlx::query_as::<_, UserRow>(CREATE_USER)
                .bind(name.as_str())
                .fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, ctx: RequestContext, id: i32) -> Result<User, RepositoryError> {
        let row = run(
            ctx,
            sqlx::query_as::<_, UserRow>(GET_USER)
                .bind(id)
                .fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        ctx: RequestContext,
        id: i32,
        name: &UserName,
    ) -> Result<User, RepositoryError> {
        let row = run(
            ctx,
            sqlx::query_as::<_, UserRow>(UPDATE_USER)
                .bind(id)
                .bind(name.as_str())
                .fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, ctx: RequestContext, id: i32) -> Result<User, RepositoryError> {
        let row = run(
            ctx,
            sqlx::query_as::<_, UserRow>(DELETE_USER)
                .bind(id)
                .fetch_one(self.pool.as_ref()),
        )
        .await?;

        Ok(row.into())
    }

    async fn list(&self, ctx: RequestContext) -> Result<Vec<User>, RepositoryError> {
        let rows = run(
            ctx,
            sqlx::query_as::<_, UserRow>(LIST_USERS).fetch_all(self.pool.as_ref()),
        )
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn truncate(&self, ctx: RequestContext) -> Result<(), RepositoryError> {
        run(
            ctx,
            sqlx::query(TRUNCATE_USERS).execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }
}
