//! Query parameter types for API handlers.

use serde::Deserialize;
use todos_core::dates::parse_calendar_date;
use todos_core::error::CoreError;
use todos_core::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
use todos_db::models::todo::{TodoPriority, TodoStatus};

use crate::services::ListTodos;

/// Raw listing parameters
/// (`?page=&limit=&status=&priority=&startDate=&endDate=`).
///
/// Empty values count as absent. `page` and `limit` are not range-checked.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ListTodosParams {
    /// Parse the numbers, enumerations, and dates into a service request.
    pub fn into_request(self) -> Result<ListTodos, CoreError> {
        let page = present(self.page)
            .map(|p| integer("page", &p))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE);
        let limit = present(self.limit)
            .map(|l| integer("limit", &l))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        let status = present(self.status)
            .map(|s| {
                TodoStatus::from_str(&s).ok_or_else(|| invalid("status", &s, TodoStatus::ALL))
            })
            .transpose()?;
        let priority = present(self.priority)
            .map(|p| {
                TodoPriority::from_str(&p).ok_or_else(|| invalid("priority", &p, TodoPriority::ALL))
            })
            .transpose()?;
        let start_date = present(self.start_date)
            .map(|d| parse_calendar_date(&d))
            .transpose()?;
        let end_date = present(self.end_date)
            .map(|d| parse_calendar_date(&d))
            .transpose()?;

        Ok(ListTodos {
            page,
            limit,
            status,
            priority,
            start_date,
            end_date,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn integer(field: &str, value: &str) -> Result<i64, CoreError> {
    value.trim().parse().map_err(|_| {
        CoreError::Validation(format!("invalid {field} '{value}' (expected an integer)"))
    })
}

fn invalid(field: &str, value: &str, allowed: &[&str]) -> CoreError {
    CoreError::Validation(format!(
        "invalid {field} '{value}' (expected one of: {})",
        allowed.join(", ")
    ))
}
