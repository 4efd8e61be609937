pub mod category_repo;
pub mod connection;
pub mod migrations;
pub mod sqlite_client;
pub mod task_repo;
pub mod user_repo;

pub use connection::*;
pub use sqlite_client::SqliteClient;
