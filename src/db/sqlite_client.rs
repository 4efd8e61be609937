use std::cell::RefCell;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::client::DataClient;
use crate::config::Config;
use crate::error::TaskflowError;
use crate::models::{
    category, task, Category, CategoryPatch, NewCategory, NewTask, Task, TaskPatch, TaskStatus,
    User, UserRole,
};
use crate::sort::parse_sort;

use super::{category_repo, connection, task_repo, user_repo};

/// [`DataClient`] over a local SQLite file. The session (who `me()` is)
/// lives in `config.json` beside the database.
pub struct SqliteClient {
    conn: Connection,
    config: RefCell<Config>,
    config_path: Option<PathBuf>,
}

impl SqliteClient {
    pub fn open(data_dir: &Path) -> Result<Self, TaskflowError> {
        let conn = connection::open_db(data_dir)?;
        let config_path = connection::config_path(data_dir);
        let config = Config::load(&config_path)?;
        Ok(Self {
            conn,
            config: RefCell::new(config),
            config_path: Some(config_path),
        })
    }

    pub fn init(data_dir: &Path) -> Result<Self, TaskflowError> {
        let conn = connection::init_db(data_dir)?;
        let config_path = connection::config_path(data_dir);
        let config = Config::load(&config_path)?;
        Ok(Self {
            conn,
            config: RefCell::new(config),
            config_path: Some(config_path),
        })
    }

    /// Nothing touches disk; the session lives only as long as the client.
    pub fn in_memory() -> Result<Self, TaskflowError> {
        Ok(Self {
            conn: connection::open_in_memory()?,
            config: RefCell::new(Config::default()),
            config_path: None,
        })
    }

    pub fn register_user(
        &self,
        email: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<User, TaskflowError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(TaskflowError::validation(format!(
                "Invalid email '{email}'"
            )));
        }
        let user = User {
            email: email.to_string(),
            full_name: full_name.trim().to_string(),
            role,
            created_date: Utc::now(),
        };
        user_repo::create_user(&self.conn, &user)?;
        info!(email = %user.email, "registered user");
        Ok(user)
    }

    /// Open a session for an existing user.
    pub fn login(&self, email: &str) -> Result<User, TaskflowError> {
        let user = user_repo::get_user(&self.conn, email.trim())?;
        self.set_session(Some(user.email.clone()))?;
        info!(email = %user.email, "session opened");
        Ok(user)
    }

    fn set_session(&self, email: Option<String>) -> Result<(), TaskflowError> {
        let mut config = self.config.borrow_mut();
        config.session_email = email;
        if let Some(path) = &self.config_path {
            config.save(path)?;
        }
        Ok(())
    }

    fn session_email(&self) -> Result<String, TaskflowError> {
        self.config
            .borrow()
            .session_email
            .clone()
            .ok_or_else(TaskflowError::not_authenticated)
    }

    fn check_category_ref(&self, category_id: Option<&str>) -> Result<(), TaskflowError> {
        if let Some(id) = category_id {
            category_repo::get_category_by_id(&self.conn, id)?;
        }
        Ok(())
    }
}

impl DataClient for SqliteClient {
    fn list_tasks(&self, sort: Option<&str>) -> Result<Vec<Task>, TaskflowError> {
        let spec = parse_sort(sort)?;
        let mut tasks = task_repo::list_tasks(&self.conn)?;
        if let Some(spec) = spec {
            spec.sort_tasks(&mut tasks)?;
        }
        debug!(count = tasks.len(), sort = ?sort, "listed tasks");
        Ok(tasks)
    }

    fn create_task(&self, data: NewTask) -> Result<Task, TaskflowError> {
        task::validate_title(&data.title)?;
        self.check_category_ref(data.category_id.as_deref())?;
        let created_by = self.session_email()?;
        let now = Utc::now();

        // Created straight into completed counts as the transition.
        let completed_at = (data.status == TaskStatus::Completed).then_some(now);

        let new_task = Task {
            id: ulid::Ulid::new().to_string(),
            title: data.title.trim().to_string(),
            description: data.description,
            status: data.status,
            priority: data.priority,
            category_id: data.category_id,
            due_date: data.due_date,
            completed_at,
            created_by,
            created_date: now,
        };
        task_repo::insert_task(&self.conn, &new_task)?;
        info!(id = %new_task.id, "created task");
        Ok(new_task)
    }

    fn update_task(&self, id: &str, data: TaskPatch) -> Result<Task, TaskflowError> {
        if let Some(title) = &data.title {
            task::validate_title(title)?;
        }
        if let Some(category_id) = &data.category_id {
            self.check_category_ref(category_id.as_deref())?;
        }
        let mut existing = task_repo::get_task_by_id(&self.conn, id)?;
        data.apply(&mut existing);
        existing.title = existing.title.trim().to_string();
        task_repo::save_task(&self.conn, &existing)?;
        info!(id = %existing.id, status = %existing.status, "updated task");
        Ok(existing)
    }

    fn delete_task(&self, id: &str) -> Result<(), TaskflowError> {
        task_repo::delete_task(&self.conn, id)?;
        info!(id, "deleted task");
        Ok(())
    }

    fn list_categories(&self, sort: Option<&str>) -> Result<Vec<Category>, TaskflowError> {
        let spec = parse_sort(sort)?;
        let mut categories = category_repo::list_categories(&self.conn)?;
        if let Some(spec) = spec {
            spec.sort_categories(&mut categories)?;
        }
        debug!(count = categories.len(), sort = ?sort, "listed categories");
        Ok(categories)
    }

    fn create_category(&self, data: NewCategory) -> Result<Category, TaskflowError> {
        category::validate_name(&data.name)?;
        category::validate_color(&data.color)?;
        self.session_email()?;

        let new_category = Category {
            id: ulid::Ulid::new().to_string(),
            name: data.name.trim().to_string(),
            color: data.color,
        };
        category_repo::insert_category(&self.conn, &new_category)?;
        info!(id = %new_category.id, "created category");
        Ok(new_category)
    }

    fn update_category(&self, id: &str, data: CategoryPatch) -> Result<Category, TaskflowError> {
        if let Some(name) = &data.name {
            category::validate_name(name)?;
        }
        if let Some(color) = &data.color {
            category::validate_color(color)?;
        }
        let mut existing = category_repo::get_category_by_id(&self.conn, id)?;
        data.apply(&mut existing);
        existing.name = existing.name.trim().to_string();
        category_repo::save_category(&self.conn, &existing)?;
        info!(id = %existing.id, "updated category");
        Ok(existing)
    }

    fn delete_category(&self, id: &str) -> Result<(), TaskflowError> {
        category_repo::delete_category(&self.conn, id)?;
        info!(id, "deleted category");
        Ok(())
    }

    fn me(&self) -> Result<User, TaskflowError> {
        let email = self.session_email()?;
        user_repo::get_user(&self.conn, &email)
    }

    fn logout(&self) -> Result<(), TaskflowError> {
        self.set_session(None)?;
        info!("session closed");
        Ok(())
    }
}
