use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::client::DataClient;
use crate::error::TaskflowError;
use crate::filter::TaskFilter;
use crate::models::{Category, NewTask, Task, TaskPatch, TaskStatus};
use crate::stats::TaskStats;

use super::resolve_ref;

/// Newest tasks first.
pub const TASK_SORT: &str = "-created_date";

/// Task list with stats, filters and task mutations.
pub struct Dashboard<'c, C: DataClient> {
    client: &'c C,
    tasks: Vec<Task>,
    categories: Vec<Category>,
    pub filter: TaskFilter,
}

impl<'c, C: DataClient> Dashboard<'c, C> {
    pub fn load(client: &'c C) -> Result<Self, TaskflowError> {
        let mut dashboard = Self {
            client,
            tasks: Vec::new(),
            categories: Vec::new(),
            filter: TaskFilter::default(),
        };
        dashboard.refresh()?;
        Ok(dashboard)
    }

    /// Both lists are fetched before either is replaced.
    pub fn refresh(&mut self) -> Result<(), TaskflowError> {
        let tasks = self.client.list_tasks(Some(TASK_SORT))?;
        let categories = self.client.list_categories(None)?;
        self.tasks = tasks;
        self.categories = categories;
        debug!(count = self.tasks.len(), "dashboard refreshed");
        Ok(())
    }

    pub fn refresh_tasks(&mut self) -> Result<(), TaskflowError> {
        self.tasks = self.client.list_tasks(Some(TASK_SORT))?;
        debug!(count = self.tasks.len(), "dashboard tasks refreshed");
        Ok(())
    }

    pub fn refresh_categories(&mut self) -> Result<(), TaskflowError> {
        self.categories = self.client.list_categories(None)?;
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Runs after a committed write. A failed reload keeps the previous
    /// list; the write itself still succeeded.
    fn refresh_after_write(&mut self) {
        if let Err(err) = self.refresh_tasks() {
            warn!(code = err.code.as_str(), error = %err, "task list refresh failed after write");
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Tasks passing the current filter, newest first.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    /// Stats always cover every task, not only the filtered ones.
    pub fn stats(&self, now: DateTime<Utc>) -> TaskStats {
        TaskStats::compute(&self.tasks, now)
    }

    /// `None` for no category and for a category that has since been deleted.
    pub fn category_of(&self, task: &Task) -> Option<&Category> {
        let id = task.category_id.as_deref()?;
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn find_task(&self, reference: &str) -> Result<&Task, TaskflowError> {
        resolve_ref(
            &self.tasks,
            reference,
            |t| t.id.as_str(),
            |t| format!("{} ({})", t.title, t.id),
            TaskflowError::task_not_found,
        )
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

    pub fn create_task(&mut self, data: NewTask) -> Result<Task, TaskflowError> {
        let task = self.client.create_task(data)?;
        self.refresh_after_write();
        Ok(task)
    }

    /// A patch moving a task into completed gets `completed_at` stamped
    /// unless it already carries one.
    pub fn update_task(&mut self, id: &str, mut data: TaskPatch) -> Result<Task, TaskflowError> {
        let entering_completed = data.status == Some(TaskStatus::Completed)
            && self
                .tasks
                .iter()
                .find(|t| t.id == id)
                .map_or(true, |t| t.status != TaskStatus::Completed);
        if entering_completed && data.completed_at.is_none() {
            data.completed_at = Some(Some(Utc::now()));
        }
        let task = self.client.update_task(id, data)?;
        self.refresh_after_write();
        Ok(task)
    }

    pub fn change_status(&mut self, id: &str, status: TaskStatus) -> Result<Task, TaskflowError> {
        let task = self
            .client
            .update_task(id, TaskPatch::status_change(status, Utc::now()))?;
        self.refresh_after_write();
        Ok(task)
    }

    /// Completed goes back to pending; anything else completes.
    pub fn toggle(&mut self, id: &str) -> Result<Task, TaskflowError> {
        let task = self.find_task(id)?;
        let (id, next) = (task.id.clone(), task.status.toggled());
        self.change_status(&id, next)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<(), TaskflowError> {
        self.client.delete_task(id)?;
        self.refresh_after_write();
        Ok(())
    }
}
