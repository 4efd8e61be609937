use std::str::FromStr;

use crate::models::{Task, TaskPriority, TaskStatus};

/// The keyword every selector accepts to mean "no restriction".
pub const ALL: &str = "all";

/// Dashboard filter criteria. `None` on a selector is the "all" choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub category_id: Option<String>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.status.map_or(true, |s| task.status == s)
            && self.priority.map_or(true, |p| task.priority == p)
            && self
                .category_id
                .as_deref()
                .map_or(true, |c| task.category_id.as_deref() == Some(c))
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    /// Matching tasks in their original order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Parse a selector value where `all` means no restriction.
pub fn parse_selection<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    if value == ALL {
        return Ok(None);
    }
    value.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn task(id: &str, title: &str, status: TaskStatus, priority: TaskPriority) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            description: None,
            status,
            priority,
            category_id: None,
            due_date: None,
            completed_at: None,
            created_by: "me@example.com".into(),
            created_date: Utc::now(),
        }
    }

    fn sample() -> Vec<Task> {
        let today = Utc::now().date_naive();
        let mut a = task("a", "Write report", TaskStatus::Pending, TaskPriority::High);
        a.due_date = Some(today - Duration::days(1));
        a.category_id = Some("work".into());
        let mut b = task("b", "Buy milk", TaskStatus::Completed, TaskPriority::Low);
        b.due_date = Some(today - Duration::days(1));
        b.description = Some("Semi-skimmed, from the REPORT shop".into());
        let mut c = task("c", "Plan trip", TaskStatus::InProgress, TaskPriority::High);
        c.due_date = Some(today + Duration::days(1));
        c.category_id = Some("home".into());
        vec![a, b, c]
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let tasks = sample();
        assert_eq!(ids(&TaskFilter::default().apply(&tasks)), ["a", "b", "c"]);
    }

    #[test]
    fn status_pending_returns_only_first() {
        let tasks = sample();
        let filter = TaskFilter {
            status: Some(TaskStatus::Pending),
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter.apply(&tasks)), ["a"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let tasks = sample();
        let filter = TaskFilter {
            search: "rEpOrT".into(),
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter.apply(&tasks)), ["a", "b"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let tasks = sample();
        let filter = TaskFilter {
            priority: Some(TaskPriority::High),
            category_id: Some("home".into()),
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter.apply(&tasks)), ["c"]);
    }

    #[test]
    fn specific_category_never_matches_uncategorized() {
        let tasks = sample();
        let filter = TaskFilter {
            category_id: Some("work".into()),
            ..TaskFilter::default()
        };
        let matched = filter.apply(&tasks);
        assert_eq!(ids(&matched), ["a"]);
    }

    #[test]
    fn reapplying_is_idempotent() {
        let tasks = sample();
        let filter = TaskFilter {
            search: "r".into(),
            priority: Some(TaskPriority::High),
            ..TaskFilter::default()
        };
        let once: Vec<Task> = filter.apply(&tasks).into_iter().cloned().collect();
        let twice: Vec<Task> = filter.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn all_keyword_parses_to_none() {
        assert_eq!(parse_selection::<TaskStatus>("all").unwrap(), None);
        assert_eq!(
            parse_selection::<TaskPriority>("urgent").unwrap(),
            Some(TaskPriority::Urgent)
        );
        assert!(parse_selection::<TaskStatus>("nope").is_err());
    }
}
