use std::sync::Arc;

use todos_db::store::PgTodoStore;

use crate::config::ServerConfig;
use crate::services::TodoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: todos_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Todo service over the same pool.
    pub todos: Arc<TodoService<PgTodoStore>>,
}

impl AppState {
    pub fn new(pool: todos_db::DbPool, config: ServerConfig) -> Self {
        let todos = TodoService::new(PgTodoStore::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            todos: Arc::new(todos),
        }
    }
}
