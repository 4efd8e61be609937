use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Task, TaskStatus};

/// Dashboard counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

impl TaskStats {
    /// `now` is taken once by the caller so every task is judged against the same instant.
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                _ => {}
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
            stats
        })
    }
}

/// Profile counters for one user's tasks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    pub total: usize,
    pub completed: usize,
    pub rate: u32,
}

impl CompletionSummary {
    pub fn compute<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let (total, completed) = tasks.into_iter().fold((0, 0), |(total, done), t| {
            (total + 1, done + usize::from(t.status == TaskStatus::Completed))
        });
        Self {
            total,
            completed,
            rate: rounded_percentage(completed, total),
        }
    }
}

pub fn task_count_by_category(tasks: &[Task], category_id: &str) -> usize {
    tasks
        .iter()
        .filter(|t| t.category_id.as_deref() == Some(category_id))
        .count()
}

pub fn completion_rate(tasks: &[Task]) -> u32 {
    CompletionSummary::compute(tasks).rate
}

/// `round(100 * part / whole)` with halves rounding up; 0 when `whole` is 0.
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part as u64, whole as u64);
    ((200 * part + whole) / (2 * whole)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn task(status: TaskStatus, due: Option<NaiveDate>) -> Task {
        Task {
            id: ulid::Ulid::new().to_string(),
            title: "task".into(),
            description: None,
            status,
            priority: Default::default(),
            category_id: None,
            due_date: due,
            completed_at: None,
            created_by: "me@example.com".into(),
            created_date: Utc::now(),
        }
    }

    #[test]
    fn counts_totals_completed_in_progress_and_overdue() {
        let now = Utc::now();
        let yesterday = Some(now.date_naive() - Duration::days(1));
        let tomorrow = Some(now.date_naive() + Duration::days(1));
        let tasks = vec![
            task(TaskStatus::Pending, yesterday),
            task(TaskStatus::Completed, yesterday),
            task(TaskStatus::InProgress, tomorrow),
        ];
        assert_eq!(
            TaskStats::compute(&tasks, now),
            TaskStats {
                total: 3,
                completed: 1,
                in_progress: 1,
                overdue: 1,
            }
        );
    }

    #[test]
    fn overdue_skips_completed_but_counts_cancelled() {
        let now = Utc::now();
        let long_ago = Some(now.date_naive() - Duration::days(30));
        let tasks = vec![
            task(TaskStatus::Completed, long_ago),
            task(TaskStatus::Cancelled, long_ago),
        ];
        assert_eq!(TaskStats::compute(&tasks, now).overdue, 1);
    }

    #[test]
    fn empty_list_has_zero_rate() {
        assert_eq!(completion_rate(&[]), 0);
        assert_eq!(TaskStats::compute(&[], Utc::now()), TaskStats::default());
    }

    #[test]
    fn two_of_four_is_fifty() {
        let tasks = vec![
            task(TaskStatus::Completed, None),
            task(TaskStatus::Completed, None),
            task(TaskStatus::Pending, None),
            task(TaskStatus::InProgress, None),
        ];
        assert_eq!(completion_rate(&tasks), 50);
    }

    #[test]
    fn rate_rounds_like_math_round() {
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(5, 5), 100);
    }

    #[test]
    fn counts_tasks_per_category() {
        let mut a = task(TaskStatus::Pending, None);
        a.category_id = Some("work".into());
        let mut b = task(TaskStatus::Completed, None);
        b.category_id = Some("work".into());
        let c = task(TaskStatus::Pending, None);
        let tasks = vec![a, b, c];
        assert_eq!(task_count_by_category(&tasks, "work"), 2);
        assert_eq!(task_count_by_category(&tasks, "home"), 0);
    }
}
