use std::str::FromStr;

use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

use crate::error::TaskflowError;
use crate::models::Task;

const TASK_COLUMNS: &str = "id, title, description, status, priority, category_id,
                            due_date, completed_at, created_by, created_date";

pub fn insert_task(conn: &Connection, task: &Task) -> Result<(), TaskflowError> {
    conn.execute(
        "INSERT INTO tasks (id, title, description, status, priority, category_id,
                            due_date, completed_at, created_by, created_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            task.id,
            task.title,
            task.description,
            task.status.as_str(),
            task.priority.as_str(),
            task.category_id,
            task.due_date,
            task.completed_at,
            task.created_by,
            task.created_date,
        ],
    )?;
    Ok(())
}

pub fn get_task_by_id(conn: &Connection, id: &str) -> Result<Task, TaskflowError> {
    conn.query_row(
        &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
        params![id],
        row_to_task,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => TaskflowError::task_not_found(id),
        _ => TaskflowError::from(e),
    })
}

/// Insertion order; callers apply any requested sort.
pub fn list_tasks(conn: &Connection) -> Result<Vec<Task>, TaskflowError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks ORDER BY rowid ASC"
    ))?;
    let tasks = stmt
        .query_map([], row_to_task)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tasks)
}

/// Overwrite every mutable column with the values on `task`.
pub fn save_task(conn: &Connection, task: &Task) -> Result<(), TaskflowError> {
    let changed = conn.execute(
        "UPDATE tasks SET title = ?1, description = ?2, status = ?3, priority = ?4,
                category_id = ?5, due_date = ?6, completed_at = ?7
         WHERE id = ?8",
        params![
            task.title,
            task.description,
            task.status.as_str(),
            task.priority.as_str(),
            task.category_id,
            task.due_date,
            task.completed_at,
            task.id,
        ],
    )?;
    if changed == 0 {
        return Err(TaskflowError::task_not_found(&task.id));
    }
    Ok(())
}

pub fn delete_task(conn: &Connection, id: &str) -> Result<(), TaskflowError> {
    let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(TaskflowError::task_not_found(id));
    }
    Ok(())
}

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: parse_column(row, 3)?,
        priority: parse_column(row, 4)?,
        category_id: row.get(5)?,
        due_date: row.get(6)?,
        completed_at: row.get(7)?,
        created_by: row.get(8)?,
        created_date: row.get(9)?,
    })
}

/// Read a text column into one of the closed enums.
pub(crate) fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = TaskflowError>,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
