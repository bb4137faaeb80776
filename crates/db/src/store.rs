//! The store seam between the todo service and PostgreSQL.
//!
//! [`TodoStore`] is the contract the service layer is written against;
//! [`PgTodoStore`] satisfies it by delegating to [`TodoRepo`].

use async_trait::async_trait;
use todos_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, TodoFilter, TodoPage, UpdateTodo};
use crate::repositories::TodoRepo;
use crate::DbPool;

/// Persistence operations over the single `todos` table.
///
/// Implementations report absence through return values (`None`, an
/// affected count of 0) and reserve `Err` for persistence failures.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a todo with default status, priority, and activity.
    async fn insert(&self, input: &CreateTodo) -> Result<Todo, sqlx::Error>;

    /// One page of active todos matching `filter`, plus the total match count.
    async fn query_page(
        &self,
        filter: &TodoFilter,
        skip: i64,
        limit: i64,
    ) -> Result<TodoPage, sqlx::Error>;

    /// An active todo by id.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error>;

    /// Apply the present fields of `input`; returns the affected row count.
    async fn update_fields(&self, id: DbId, input: &UpdateTodo) -> Result<u64, sqlx::Error>;

    /// Flag a todo inactive; returns the affected row count.
    async fn deactivate(&self, id: DbId) -> Result<u64, sqlx::Error>;
}

/// [`TodoStore`] backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn insert(&self, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        TodoRepo::create(&self.pool, input).await
    }

    async fn query_page(
        &self,
        filter: &TodoFilter,
        skip: i64,
        limit: i64,
    ) -> Result<TodoPage, sqlx::Error> {
        TodoRepo::list_page(&self.pool, filter, skip, limit).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        TodoRepo::find_by_id(&self.pool, id).await
    }

    async fn update_fields(&self, id: DbId, input: &UpdateTodo) -> Result<u64, sqlx::Error> {
        TodoRepo::update(&self.pool, id, input).await
    }

    async fn deactivate(&self, id: DbId) -> Result<u64, sqlx::Error> {
        TodoRepo::deactivate(&self.pool, id).await
    }
}
