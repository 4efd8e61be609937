use rusqlite::Connection;

use crate::error::TaskflowError;

/// `tasks.category_id` deliberately has no foreign key: deleting a category
/// leaves its tasks pointing at the old id.
pub fn run_migrations(conn: &Connection) -> Result<(), TaskflowError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            email TEXT PRIMARY KEY,
            full_name TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'user'
                CHECK (role IN ('admin', 'user')),
            created_date TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            color TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'in_progress', 'completed', 'cancelled')),
            priority TEXT NOT NULL DEFAULT 'medium'
                CHECK (priority IN ('low', 'medium', 'high', 'urgent')),
            category_id TEXT,
            due_date TEXT,
            completed_at TEXT,
            created_by TEXT NOT NULL,
            created_date TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_created_by ON tasks(created_by);
        ",
    )?;
    Ok(())
}
