//! Todo service: turns validated requests into store calls and every store
//! outcome into an [`Envelope`].
//!
//! No method here returns an error. Absence becomes a not-found envelope;
//! store failures are logged with their cause and replaced by a generic
//! message.

use chrono::NaiveDate;
use serde::Serialize;
use todos_core::pagination::{skip_for_page, total_pages};
use todos_core::types::DbId;
use todos_db::models::todo::{CreateTodo, Todo, TodoFilter, TodoPriority, TodoStatus, UpdateTodo};
use todos_db::store::{PgTodoStore, TodoStore};

use crate::response::{Envelope, FailureKind, NoPayload};

// ---------------------------------------------------------------------------
// Requests and payloads
// ---------------------------------------------------------------------------

/// A validated listing request. `page` is 1-based; neither `page` nor
/// `limit` is range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTodos {
    pub page: i64,
    pub limit: i64,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// `{ todo }` payload. The todo is omitted when an update's refetch finds
/// nothing.
#[derive(Debug, Clone, Serialize)]
pub struct TodoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<Todo>,
}

/// `{ todos, total, totalPages, currentPage }` payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListPayload {
    pub todos: Vec<Todo>,
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Every way a todo operation can fail. `Display` is the message the caller
/// sees; the store error, if any, is kept as the source for logging only.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("Todo with ID {0} not found")]
    NotFound(DbId),

    #[error("Todo with ID {0} not found for update")]
    NotFoundForUpdate(DbId),

    #[error("Todo with ID {0} not found for deletion")]
    NotFoundForDeletion(DbId),

    #[error("Error creating todo")]
    Create(#[source] sqlx::Error),

    #[error("Error fetching todos")]
    List(#[source] sqlx::Error),

    #[error("Error fetching todo with ID {id}")]
    Fetch {
        id: DbId,
        #[source]
        source: sqlx::Error,
    },

    #[error("Error updating todo with ID {id}")]
    Update {
        id: DbId,
        #[source]
        source: sqlx::Error,
    },

    #[error("Error deleting todo with ID {id}")]
    Delete {
        id: DbId,
        #[source]
        source: sqlx::Error,
    },
}

impl TodoError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound(_) | Self::NotFoundForUpdate(_) | Self::NotFoundForDeletion(_) => {
                FailureKind::NotFound
            }
            Self::Create(_)
            | Self::List(_)
            | Self::Fetch { .. }
            | Self::Update { .. }
            | Self::Delete { .. } => FailureKind::Persistence,
        }
    }

    /// Log the failure with its context, then reduce it to an envelope.
    fn into_envelope<T: Serialize>(self) -> Envelope<T> {
        match &self {
            Self::NotFound(id) | Self::NotFoundForUpdate(id) | Self::NotFoundForDeletion(id) => {
                tracing::debug!(todo_id = id, "{self}");
            }
            Self::Create(source) | Self::List(source) => {
                tracing::error!(error = %source, "{self}");
            }
            Self::Fetch { id, source }
            | Self::Update { id, source }
            | Self::Delete { id, source } => {
                tracing::error!(todo_id = id, error = %source, "{self}");
            }
        }
        Envelope::failure(self.kind(), self.to_string())
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Orchestrates todo operations over a [`TodoStore`].
#[derive(Debug, Clone)]
pub struct TodoService<S = PgTodoStore> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a todo with default status, priority, and activity.
    pub async fn create(&self, input: &CreateTodo) -> Envelope<TodoPayload> {
        match self.store.insert(input).await {
            Ok(todo) => {
                tracing::info!(
                    todo_id = todo.id,
                    status = %todo.status,
                    priority = %todo.priority,
                    "Todo created",
                );
                Envelope::ok_with_message(
                    "Todo created successfully",
                    Some(TodoPayload { todo: Some(todo) }),
                )
            }
            Err(source) => TodoError::Create(source).into_envelope(),
        }
    }

    /// List one page of active todos.
    pub async fn list(&self, request: &ListTodos) -> Envelope<TodoListPayload> {
        let skip = skip_for_page(request.page, request.limit);
        let filter = TodoFilter::new(
            request.status,
            request.priority,
            request.start_date,
            request.end_date,
        );

        match self.store.query_page(&filter, skip, request.limit).await {
            Ok(page) => Envelope::ok(TodoListPayload {
                todos: page.items,
                total: page.total,
                total_pages: total_pages(page.total, request.limit),
                current_page: request.page,
            }),
            Err(source) => TodoError::List(source).into_envelope(),
        }
    }

    /// Fetch one active todo.
    pub async fn get_by_id(&self, id: DbId) -> Envelope<TodoPayload> {
        match self.store.find_by_id(id).await {
            Ok(Some(todo)) => Envelope::ok(TodoPayload { todo: Some(todo) }),
            Ok(None) => TodoError::NotFound(id).into_envelope(),
            Err(source) => TodoError::Fetch { id, source }.into_envelope(),
        }
    }

    /// Apply a partial update, then return the todo as [`Self::get_by_id`]
    /// sees it afterwards.
    ///
    /// The store update does not look at activity, so an inactive id still
    /// counts as updated; its refetch then finds nothing and the payload
    /// carries no todo. The same happens if a removal lands between the two
    /// calls.
    pub async fn update(&self, id: DbId, input: &UpdateTodo) -> Envelope<TodoPayload> {
        let affected = match self.store.update_fields(id, input).await {
            Ok(affected) => affected,
            Err(source) => return TodoError::Update { id, source }.into_envelope(),
        };
        if affected == 0 {
            return TodoError::NotFoundForUpdate(id).into_envelope();
        }

        tracing::info!(
            todo_id = id,
            status = input.status.map(tracing::field::display),
            priority = input.priority.map(tracing::field::display),
            "Todo updated",
        );
        let refetched = self.get_by_id(id).await.payload.and_then(|p| p.todo);
        Envelope::ok_with_message(
            "Todo updated successfully",
            Some(TodoPayload { todo: refetched }),
        )
    }

    /// Soft-delete a todo.
    ///
    /// Does not check activity first: removing an already removed todo
    /// succeeds again because the store still reports the row as affected.
    pub async fn remove(&self, id: DbId) -> Envelope<NoPayload> {
        match self.store.deactivate(id).await {
            Ok(0) => TodoError::NotFoundForDeletion(id).into_envelope(),
            Ok(_) => {
                tracing::info!(todo_id = id, "Todo deactivated");
                Envelope::ok_with_message(format!("Todo with ID {id} deleted successfully"), None)
            }
            Err(source) => TodoError::Delete { id, source }.into_envelope(),
        }
    }
}
