//! Request and input types for the task API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Login / create-user request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Task fields gathered from the command line.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub due_date: NaiveDate,
    pub title: String,
    pub description: String,
    pub recurring_month: bool,
    pub recurring_n: bool,
    pub recurring_stop: String,
}

/// Task record submitted to `POST /api/task`.
///
/// `assign_date` is stamped at submission time, not taken from input;
/// see [`assemble_draft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub due_date: NaiveDate,
    pub assign_date: NaiveDate,
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub recurring_month: bool,
    pub recurring_n: bool,
    pub recurring_stop: String,
}

/// Build the draft for a task owned by `user_id`, assigned on `assign_date`.
#[must_use]
pub fn assemble_draft(input: &TaskInput, user_id: &str, assign_date: NaiveDate) -> TaskDraft {
    TaskDraft {
        due_date: input.due_date,
        assign_date,
        title: input.title.clone(),
        description: input.description.clone(),
        user_id: user_id.to_owned(),
        recurring_month: input.recurring_month,
        recurring_n: input.recurring_n,
        recurring_stop: input.recurring_stop.clone(),
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
