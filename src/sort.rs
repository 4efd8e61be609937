use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::TaskflowError;
use crate::models::{Category, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedDate,
    Title,
    DueDate,
    Priority,
    Status,
    Name,
}

/// A field name, optionally prefixed with `-` for descending (`-created_date`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub descending: bool,
}

impl FromStr for SortSpec {
    type Err = TaskflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (descending, name) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let field = match name {
            "created_date" => SortField::CreatedDate,
            "title" => SortField::Title,
            "due_date" => SortField::DueDate,
            "priority" => SortField::Priority,
            "status" => SortField::Status,
            "name" => SortField::Name,
            _ => {
                return Err(TaskflowError::validation(format!(
                    "Unknown sort field '{name}'"
                )))
            }
        };
        Ok(Self { field, descending })
    }
}

impl SortSpec {
    fn directed(&self, ordering: Ordering) -> Ordering {
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }

    /// Stable: ties keep the order the store returned.
    pub fn sort_tasks(&self, tasks: &mut [Task]) -> Result<(), TaskflowError> {
        let key: fn(&Task, &Task) -> Ordering = match self.field {
            SortField::CreatedDate => |a, b| a.created_date.cmp(&b.created_date),
            SortField::Title => |a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::DueDate => |a, b| a.due_date.cmp(&b.due_date),
            SortField::Priority => |a, b| a.priority.cmp(&b.priority),
            SortField::Status => |a, b| a.status.cmp(&b.status),
            SortField::Name => {
                return Err(TaskflowError::validation("Tasks cannot be sorted by 'name'"))
            }
        };
        tasks.sort_by(|a, b| self.directed(key(a, b)));
        Ok(())
    }

    pub fn sort_categories(&self, categories: &mut [Category]) -> Result<(), TaskflowError> {
        match self.field {
            SortField::Name => {
                categories.sort_by(|a, b| {
                    self.directed(a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                });
                Ok(())
            }
            _ => Err(TaskflowError::validation(
                "Categories can only be sorted by 'name'",
            )),
        }
    }
}

/// `None` keeps store order.
pub fn parse_sort(sort: Option<&str>) -> Result<Option<SortSpec>, TaskflowError> {
    sort.map(str::parse).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;
    use chrono::{Duration, Utc};

    fn task(id: &str, priority: TaskPriority, age_minutes: i64) -> Task {
        Task {
            id: id.into(),
            title: id.to_uppercase(),
            description: None,
            status: Default::default(),
            priority,
            category_id: None,
            due_date: None,
            completed_at: None,
            created_by: "me@example.com".into(),
            created_date: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn dash_prefix_means_descending() {
        let spec: SortSpec = "-created_date".parse().unwrap();
        assert_eq!(spec.field, SortField::CreatedDate);
        assert!(spec.descending);
        assert!(!"title".parse::<SortSpec>().unwrap().descending);
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!("-colour".parse::<SortSpec>().is_err());
    }

    #[test]
    fn newest_first() {
        let mut tasks = vec![
            task("old", TaskPriority::Low, 30),
            task("new", TaskPriority::Low, 1),
            task("mid", TaskPriority::Low, 10),
        ];
        "-created_date"
            .parse::<SortSpec>()
            .unwrap()
            .sort_tasks(&mut tasks)
            .unwrap();
        assert_eq!(ids(&tasks), ["new", "mid", "old"]);
    }

    #[test]
    fn priority_sort_is_stable() {
        let mut tasks = vec![
            task("a", TaskPriority::High, 0),
            task("b", TaskPriority::Low, 0),
            task("c", TaskPriority::High, 0),
        ];
        "priority"
            .parse::<SortSpec>()
            .unwrap()
            .sort_tasks(&mut tasks)
            .unwrap();
        assert_eq!(ids(&tasks), ["b", "a", "c"]);
    }

    #[test]
    fn categories_only_sort_by_name() {
        let mut categories = vec![
            Category {
                id: "1".into(),
                name: "work".into(),
                color: "#000".into(),
            },
            Category {
                id: "2".into(),
                name: "Home".into(),
                color: "#000".into(),
            },
        ];
        let by_name: SortSpec = "name".parse().unwrap();
        by_name.sort_categories(&mut categories).unwrap();
        assert_eq!(categories[0].name, "Home");

        let by_title: SortSpec = "title".parse().unwrap();
        assert!(by_title.sort_categories(&mut categories).is_err());
    }
}
