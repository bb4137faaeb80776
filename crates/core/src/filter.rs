//! Due-date predicate resolution for todo listings.
//!
//! A listing may carry a `startDate`, an `endDate`, both, or neither. Those
//! collapse into at most one bound on the due date:
//!
//! | start | end | bound                 |
//! |-------|-----|-----------------------|
//! | yes   | yes | `due_date >= start`   |
//! | no    | yes | `due_date <= end`     |
//! | yes   | no  | none                  |
//! | no    | no  | none                  |
//!
//! With both dates present the upper bound is dropped, so `end` has no effect.

use chrono::NaiveDate;

/// A single predicate on `due_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateBound {
    /// `due_date >= date`
    OnOrAfter(NaiveDate),
    /// `due_date <= date`
    OnOrBefore(NaiveDate),
}

impl DueDateBound {
    /// The date the bound compares against.
    pub fn date(&self) -> NaiveDate {
        match *self {
            Self::OnOrAfter(date) | Self::OnOrBefore(date) => date,
        }
    }

    /// SQL comparison operator for `due_date <op> $n`.
    pub fn sql_operator(&self) -> &'static str {
        match self {
            Self::OnOrAfter(_) => ">=",
            Self::OnOrBefore(_) => "<=",
        }
    }
}

/// Collapse the optional listing dates into the effective due-date bound.
pub fn resolve_due_date_bound(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Option<DueDateBound> {
    match (start, end) {
        // The upper bound is discarded here; see the module docs.
        (Some(start), Some(_end)) => Some(DueDateBound::OnOrAfter(start)),
        (None, Some(end)) => Some(DueDateBound::OnOrBefore(end)),
        (Some(_), None) | (None, None) => None,
    }
}
