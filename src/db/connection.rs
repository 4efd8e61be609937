use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use crate::error::TaskflowError;

use super::migrations;

pub const DATA_DIR_NAME: &str = ".taskflow";
pub const HOME_ENV: &str = "TASKFLOW_HOME";

/// Find the nearest ancestor holding a `.taskflow` directory.
pub fn find_data_root() -> Result<PathBuf, TaskflowError> {
    let mut dir = env::current_dir()?;
    loop {
        let candidate = dir.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }
        if !dir.pop() {
            return Err(TaskflowError::not_initialized());
        }
    }
}

/// `--data` flag, then `TASKFLOW_HOME`, then the nearest `.taskflow` upwards.
pub fn data_dir(flag: Option<&Path>) -> Result<PathBuf, TaskflowError> {
    if let Some(dir) = explicit_data_dir(flag) {
        return Ok(dir);
    }
    find_data_root()
}

/// Where `init` creates the store: like [`data_dir`], but falls back to `./.taskflow`.
pub fn init_data_dir(flag: Option<&Path>) -> Result<PathBuf, TaskflowError> {
    if let Some(dir) = explicit_data_dir(flag) {
        return Ok(dir);
    }
    Ok(env::current_dir()?.join(DATA_DIR_NAME))
}

fn explicit_data_dir(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        env::var_os(HOME_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join("taskflow.db")
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.json")
}

/// Open an existing database. Returns error if not initialized.
pub fn open_db(data_dir: &Path) -> Result<Connection, TaskflowError> {
    let path = db_path(data_dir);
    if !path.exists() {
        return Err(TaskflowError::not_initialized());
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    debug!(path = %path.display(), "opened database");
    Ok(conn)
}

/// Create directories and database, then run migrations. Safe to repeat.
pub fn init_db(data_dir: &Path) -> Result<Connection, TaskflowError> {
    fs::create_dir_all(data_dir)?;
    let path = db_path(data_dir);
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    debug!(path = %path.display(), "initialized database");
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection, TaskflowError> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), TaskflowError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
