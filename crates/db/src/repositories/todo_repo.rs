//! Repository for the `todos` table.
//!
//! Every read goes through [`active_scope`], so a deactivated row can never
//! leak into a listing or a lookup. Writes are keyed by id only.

use sqlx::PgPool;
use todos_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, TodoFilter, TodoPage, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, details, due_date, status, priority, date_of_creation, is_active";

/// Predicate that hides soft-deleted rows.
const ACTIVE_SCOPE: &str = "is_active = true";

/// Build the `WHERE` clause for a filtered read, always starting with the
/// active scope. Returns the clause and the next free bind index.
///
/// Placeholders are numbered in the order [`bind_filter!`] binds them:
/// status, priority, due date.
fn active_scope(filter: &TodoFilter) -> (String, u32) {
    let mut conditions = vec![ACTIVE_SCOPE.to_string()];
    let mut bind_idx = 1u32;

    if filter.status.is_some() {
        conditions.push(format!("status = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.priority.is_some() {
        conditions.push(format!("priority = ${bind_idx}"));
        bind_idx += 1;
    }
    if let Some(bound) = filter.due_date {
        conditions.push(format!("due_date {} ${bind_idx}", bound.sql_operator()));
        bind_idx += 1;
    }

    (format!("WHERE {}", conditions.join(" AND ")), bind_idx)
}

/// Bind the filter values onto a query in the order [`active_scope`]
/// numbered them.
macro_rules! bind_filter {
    ($query:expr, $filter:expr) => {{
        let mut q = $query;
        if let Some(status) = $filter.status {
            q = q.bind(status);
        }
        if let Some(priority) = $filter.priority {
            q = q.bind(priority);
        }
        if let Some(bound) = $filter.due_date {
            q = q.bind(bound.date());
        }
        q
    }};
}

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// `status`, `priority`, `is_active`, and `date_of_creation` take their
    /// column defaults.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (details, due_date) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.details)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// List one page of active todos matching `filter`, plus the total number
    /// of matching rows.
    ///
    /// Both queries run in one read-only `REPEATABLE READ` transaction so the
    /// page and the total come from the same snapshot. Rows are ordered by id.
    /// `skip` and `limit` are passed through untouched; PostgreSQL rejects
    /// negative values.
    pub async fn list_page(
        pool: &PgPool,
        filter: &TodoFilter,
        skip: i64,
        limit: i64,
    ) -> Result<TodoPage, sqlx::Error> {
        let (where_clause, bind_idx) = active_scope(filter);

        let page_query = format!(
            "SELECT {COLUMNS} FROM todos {where_clause} \
             ORDER BY id \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let count_query = format!("SELECT COUNT(*) FROM todos {where_clause}");

        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let items = bind_filter!(sqlx::query_as::<_, Todo>(&page_query), filter)
            .bind(limit)
            .bind(skip)
            .fetch_all(&mut *tx)
            .await?;

        let total = bind_filter!(sqlx::query_scalar::<_, i64>(&count_query), filter)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(TodoPage { items, total })
    }

    /// Find an active todo by ID. Inactive and nonexistent ids both yield
    /// `None`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1 AND {ACTIVE_SCOPE}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a todo. Only non-`None` fields are applied.
    ///
    /// Does not look at `is_active`. Returns the number of rows touched
    /// (0 if no row has this id).
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateTodo) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE todos SET \
                details = COALESCE($2, details), \
                status = COALESCE($3, status), \
                priority = COALESCE($4, priority) \
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.details.as_deref())
        .bind(input.status)
        .bind(input.priority)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Deactivate a todo (set is_active = false).
    ///
    /// Applied whatever the current state, so repeating it on an inactive row
    /// still reports one affected row. Returns 0 only for unknown ids.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET is_active = false WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
