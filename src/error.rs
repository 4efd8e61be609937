use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    NotAuthenticated,
    UserNotFound,
    UserExists,
    TaskNotFound,
    CategoryNotFound,
    AmbiguousRef,
    ValidationError,
    DatabaseError,
    ConfigError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserExists => "USER_EXISTS",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::AmbiguousRef => "AMBIGUOUS_REF",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

/// Every failure the data client or a view can report. Views never classify
/// these further; they hand them to the presentation layer as-is.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskflowError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskflowError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "taskflow is not initialized. Run `taskflow init --email <email>` first.",
        )
    }

    pub fn not_authenticated() -> Self {
        Self::new(
            ErrorCode::NotAuthenticated,
            "No active session. Use `taskflow login --email <email>`.",
        )
    }

    pub fn user_not_found(email: &str) -> Self {
        Self::new(ErrorCode::UserNotFound, format!("User not found: {email}"))
    }

    pub fn user_exists(email: &str) -> Self {
        Self::new(
            ErrorCode::UserExists,
            format!("User with email '{email}' already exists"),
        )
    }

    pub fn task_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {reference}"),
        )
    }

    pub fn category_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::CategoryNotFound,
            format!("Category not found: {reference}"),
        )
    }

    pub fn ambiguous_ref(reference: &str, candidates: &[String]) -> Self {
        Self::new(
            ErrorCode::AmbiguousRef,
            format!(
                "Ambiguous reference '{}'. Candidates: {}",
                reference,
                candidates.join(", ")
            ),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl From<rusqlite::Error> for TaskflowError {
    fn from(e: rusqlite::Error) -> Self {
        Self::database(e.to_string())
    }
}

impl From<serde_json::Error> for TaskflowError {
    fn from(e: serde_json::Error) -> Self {
        Self::config(e.to_string())
    }
}

impl From<std::io::Error> for TaskflowError {
    fn from(e: std::io::Error) -> Self {
        Self::config(e.to_string())
    }
}
