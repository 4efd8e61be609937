pub mod category;
pub mod commands;
pub mod dashboard;
pub mod profile;
pub mod session;
pub mod task;

pub use commands::*;

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::client::DataClient;
use crate::db::{connection, SqliteClient};
use crate::error::{ErrorCode, TaskflowError};
use crate::filter::{parse_selection, TaskFilter, ALL};
use crate::output;
use crate::views::Dashboard;

/// Turn a command result into an exit code, reporting the error on the way.
pub fn finish(result: Result<i32, TaskflowError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            debug!(code = e.code.as_str(), "command failed");
            if json_output {
                output::json::print(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

pub(crate) fn open_client(data_flag: Option<&Path>) -> Result<SqliteClient, TaskflowError> {
    let dir = connection::data_dir(data_flag)?;
    SqliteClient::open(&dir)
}

pub(crate) fn parse_due(value: &str) -> Result<NaiveDate, TaskflowError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        TaskflowError::validation(format!("Invalid due date '{value}'. Expected YYYY-MM-DD"))
    })
}

/// Build dashboard criteria. A category that no longer exists can still be
/// filtered on by its full id.
pub(crate) fn build_filter<C: DataClient>(
    args: &FilterArgs,
    dashboard: &Dashboard<'_, C>,
) -> Result<TaskFilter, TaskflowError> {
    let category_id = if args.category == ALL {
        None
    } else {
        match dashboard.find_category(&args.category) {
            Ok(c) => Some(c.id.clone()),
            Err(e) if e.code == ErrorCode::CategoryNotFound => Some(args.category.clone()),
            Err(e) => return Err(e),
        }
    };
    Ok(TaskFilter {
        search: args.search.clone().unwrap_or_default(),
        status: parse_selection(&args.status)?,
        priority: parse_selection(&args.priority)?,
        category_id,
    })
}
