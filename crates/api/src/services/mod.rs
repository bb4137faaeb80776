pub mod todo;

pub use todo::{ListTodos, TodoError, TodoListPayload, TodoPayload, TodoService};
