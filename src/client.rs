//! The data-access boundary. Views talk to storage and identity only through
//! [`DataClient`]; the shipped implementation is [`crate::db::SqliteClient`].

use crate::error::TaskflowError;
use crate::models::{Category, CategoryPatch, NewCategory, NewTask, Task, TaskPatch, User};

pub trait DataClient {
    /// `sort` is a field name, `-`-prefixed for descending. `None` keeps store order.
    fn list_tasks(&self, sort: Option<&str>) -> Result<Vec<Task>, TaskflowError>;
    fn create_task(&self, data: NewTask) -> Result<Task, TaskflowError>;
    fn update_task(&self, id: &str, data: TaskPatch) -> Result<Task, TaskflowError>;
    fn delete_task(&self, id: &str) -> Result<(), TaskflowError>;

    fn list_categories(&self, sort: Option<&str>) -> Result<Vec<Category>, TaskflowError>;
    fn create_category(&self, data: NewCategory) -> Result<Category, TaskflowError>;
    fn update_category(&self, id: &str, data: CategoryPatch) -> Result<Category, TaskflowError>;
    /// Tasks pointing at the category keep their `category_id`.
    fn delete_category(&self, id: &str) -> Result<(), TaskflowError>;

    fn me(&self) -> Result<User, TaskflowError>;
    fn logout(&self) -> Result<(), TaskflowError>;
}
