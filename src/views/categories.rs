use tracing::warn;

use crate::client::DataClient;
use crate::error::TaskflowError;
use crate::models::{Category, CategoryPatch, NewCategory, Task};
use crate::stats::task_count_by_category;

use super::resolve_ref;

pub struct CategoriesView<'c, C: DataClient> {
    client: &'c C,
    categories: Vec<Category>,
    tasks: Vec<Task>,
}

impl<'c, C: DataClient> CategoriesView<'c, C> {
    pub fn load(client: &'c C) -> Result<Self, TaskflowError> {
        let mut view = Self {
            client,
            categories: Vec::new(),
            tasks: Vec::new(),
        };
        view.refresh()?;
        Ok(view)
    }

    pub fn refresh(&mut self) -> Result<(), TaskflowError> {
        let categories = self.client.list_categories(None)?;
        let tasks = self.client.list_tasks(None)?;
        self.categories = categories;
        self.tasks = tasks;
        Ok(())
    }

    pub fn refresh_categories(&mut self) -> Result<(), TaskflowError> {
        self.categories = self.client.list_categories(None)?;
        Ok(())
    }

    fn refresh_after_write(&mut self) {
        if let Err(err) = self.refresh_categories() {
            warn!(code = err.code.as_str(), error = %err, "category list refresh failed after write");
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn task_count(&self, category_id: &str) -> usize {
        task_count_by_category(&self.tasks, category_id)
    }

    /// Every category paired with the number of tasks filed under it.
    pub fn with_counts(&self) -> Vec<(&Category, usize)> {
        self.categories
            .iter()
            .map(|c| (c, self.task_count(&c.id)))
            .collect()
    }

    pub fn find_category(&self, reference: &str) -> Result<&Category, TaskflowError> {
        resolve_ref(
            &self.categories,
            reference,
            |c| c.id.as_str(),
            |c| format!("{} ({})", c.name, c.id),
            TaskflowError::category_not_found,
        )
    }

    pub fn create(&mut self, data: NewCategory) -> Result<Category, TaskflowError> {
        let category = self.client.create_category(data)?;
        self.refresh_after_write();
        Ok(category)
    }

    pub fn update(&mut self, id: &str, data: CategoryPatch) -> Result<Category, TaskflowError> {
        let category = self.client.update_category(id, data)?;
        self.refresh_after_write();
        Ok(category)
    }

    /// Tasks filed under the category stay where they are.
    pub fn delete(&mut self, id: &str) -> Result<(), TaskflowError> {
        self.client.delete_category(id)?;
        self.refresh_after_write();
        Ok(())
    }
}
