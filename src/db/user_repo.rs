use rusqlite::{params, Connection, OptionalExtension};

use crate::error::TaskflowError;
use crate::models::User;

use super::task_repo::parse_column;

pub fn create_user(conn: &Connection, user: &User) -> Result<(), TaskflowError> {
    if find_user(conn, &user.email)?.is_some() {
        return Err(TaskflowError::user_exists(&user.email));
    }
    conn.execute(
        "INSERT INTO users (email, full_name, role, created_date) VALUES (?1, ?2, ?3, ?4)",
        params![user.email, user.full_name, user.role.as_str(), user.created_date],
    )?;
    Ok(())
}

pub fn find_user(conn: &Connection, email: &str) -> Result<Option<User>, TaskflowError> {
    let user = conn
        .query_row(
            "SELECT email, full_name, role, created_date FROM users WHERE email = ?1",
            params![email],
            |row| {
                Ok(User {
                    email: row.get(0)?,
                    full_name: row.get(1)?,
                    role: parse_column(row, 2)?,
                    created_date: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(user)
}

pub fn get_user(conn: &Connection, email: &str) -> Result<User, TaskflowError> {
    find_user(conn, email)?.ok_or_else(|| TaskflowError::user_not_found(email))
}
