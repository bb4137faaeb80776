//! Todo entity model, its enumerations, and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todos_core::filter::{resolve_due_date_bound, DueDateBound};
use todos_core::types::{DbId, Timestamp};
use validator::Validate;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Workflow state of a todo. Any transition between values is allowed.
///
/// Maps to the PostgreSQL `todo_status` enum type.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "todo_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Paused,
    Done,
}

impl TodoStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Paused => "paused",
            Self::Done => "done",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "paused" => Some(Self::Paused),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] = &["pending", "in-progress", "paused", "done"];
}

impl std::fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a todo. Maps to the PostgreSQL `todo_priority` enum type.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "todo_priority", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TodoPriority {
    #[default]
    Normal,
    Medium,
    High,
}

impl TodoPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub const ALL: &'static [&'static str] = &["normal", "medium", "high"];
}

impl std::fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: DbId,
    pub details: String,
    pub due_date: NaiveDate,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub date_of_creation: Timestamp,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new todo. Status, priority, and activity take their
/// column defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    #[validate(length(min = 1, message = "details must not be empty"))]
    pub details: String,
    #[serde(deserialize_with = "todos_core::dates::calendar_date::deserialize")]
    pub due_date: NaiveDate,
}

/// DTO for updating an existing todo. All fields optional; `None` leaves the
/// column untouched. Due date and activity are not updatable.
///
/// `details` may be set to an empty string; non-empty details are only
/// required on creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub details: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
}

/// Filters for a paginated todo listing. Activity is not part of the filter:
/// listings only ever see active rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub due_date: Option<DueDateBound>,
}

impl TodoFilter {
    /// Build a filter from raw listing parameters, collapsing the date range
    /// into its effective bound.
    pub fn new(
        status: Option<TodoStatus>,
        priority: Option<TodoPriority>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            status,
            priority,
            due_date: resolve_due_date_bound(start_date, end_date),
        }
    }
}

/// One page of todos plus the number of rows matching the filter overall.
#[derive(Debug, Clone)]
pub struct TodoPage {
    pub items: Vec<Todo>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for s in TodoStatus::ALL {
            let status = TodoStatus::from_str(s).unwrap();
            assert_eq!(status.as_str(), *s);
        }
    }

    #[test]
    fn priority_round_trip() {
        for s in TodoPriority::ALL {
            let priority = TodoPriority::from_str(s).unwrap();
            assert_eq!(priority.as_str(), *s);
        }
    }

    #[test]
    fn unknown_values_return_none() {
        assert!(TodoStatus::from_str("in_progress").is_none());
        assert!(TodoPriority::from_str("urgent").is_none());
    }

    #[test]
    fn defaults_match_column_defaults() {
        assert_eq!(TodoStatus::default(), TodoStatus::Pending);
        assert_eq!(TodoPriority::default(), TodoPriority::Normal);
    }

    #[test]
    fn serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TodoStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let parsed: TodoStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(parsed, TodoStatus::Paused);
        assert!(serde_json::from_str::<TodoPriority>("\"urgent\"").is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", TodoStatus::InProgress), "in-progress");
        assert_eq!(format!("{}", TodoPriority::High), "high");
    }

    #[test]
    fn create_dto_discards_time_of_day() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"details":"buy milk","dueDate":"2024-01-10T18:45:00Z"}"#)
                .unwrap();
        assert_eq!(input.due_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_dto_rejects_empty_details() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"details":"","dueDate":"2024-01-10"}"#).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_dto_ignores_immutable_fields() {
        let input: UpdateTodo =
            serde_json::from_str(r#"{"status":"done","dueDate":"2030-01-01","isActive":false}"#)
                .unwrap();
        assert_eq!(input.status, Some(TodoStatus::Done));
        assert_eq!(input.details, None);
        assert_eq!(input.priority, None);
    }

    #[test]
    fn update_dto_keeps_empty_details() {
        let input: UpdateTodo = serde_json::from_str(r#"{"details":""}"#).unwrap();
        assert_eq!(input.details.as_deref(), Some(""));
    }

    #[test]
    fn filter_collapses_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let filter = TodoFilter::new(Some(TodoStatus::Pending), None, Some(start), Some(end));
        assert_eq!(filter.due_date, Some(DueDateBound::OnOrAfter(start)));
        assert_eq!(filter.status, Some(TodoStatus::Pending));
    }

    #[test]
    fn todo_serializes_camel_case() {
        let todo = Todo {
            id: 7,
            details: "buy milk".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            status: TodoStatus::InProgress,
            priority: TodoPriority::High,
            date_of_creation: chrono::Utc::now(),
            is_active: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["dueDate"], "2024-01-10");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["isActive"], true);
        assert!(json["dateOfCreation"].is_string());
    }
}
