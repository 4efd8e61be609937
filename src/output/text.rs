use chrono::{DateTime, Utc};

use crate::models::{Category, Task, User, UserRole};
use crate::stats::{CompletionSummary, TaskStats};

fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

pub fn print_task(t: &Task, category: Option<&Category>, now: DateTime<Utc>) {
    println!("Task: {} ({})", t.title, t.id);
    if let Some(ref desc) = t.description {
        println!("  Description: {desc}");
    }
    println!("  Status: {}", t.status);
    println!("  Priority: {}", t.priority);
    match (category, t.category_id.as_deref()) {
        (Some(c), _) => println!("  Category: {} ({})", c.name, c.color),
        (None, Some(orphan)) => println!("  Category: {orphan} (deleted)"),
        (None, None) => {}
    }
    if let Some(due) = t.due_date {
        let marker = if t.is_overdue(now) { " OVERDUE" } else { "" };
        println!("  Due: {due}{marker}");
    }
    if let Some(completed) = t.completed_at {
        println!("  Completed: {}", completed.to_rfc3339());
    }
    println!("  Created: {} by {}", t.created_date.to_rfc3339(), t.created_by);
}

pub fn print_task_list<'a>(
    tasks: &[&Task],
    category_of: impl Fn(&Task) -> Option<&'a Category>,
    now: DateTime<Utc>,
) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for t in tasks {
        let mut extras = Vec::new();
        match (category_of(t), t.category_id.as_deref()) {
            (Some(c), _) => extras.push(format!("#{}", c.name)),
            (None, Some(orphan)) => extras.push(format!("#{} (deleted)", short_id(orphan))),
            (None, None) => {}
        }
        if let Some(due) = t.due_date {
            extras.push(format!("due {due}"));
        }
        if t.is_overdue(now) {
            extras.push("OVERDUE".to_string());
        }
        println!(
            "  [{}] {} ({}) {}{}",
            t.status,
            t.title,
            short_id(&t.id),
            t.priority,
            if extras.is_empty() {
                String::new()
            } else {
                format!(" {}", extras.join(" "))
            }
        );
    }
}

pub fn print_stats(s: &TaskStats) {
    println!(
        "Total: {}  Completed: {}  In progress: {}  Overdue: {}",
        s.total, s.completed, s.in_progress, s.overdue
    );
}

pub fn print_category(c: &Category) {
    println!("Category: {} ({})", c.name, c.id);
    println!("  Color: {}", c.color);
}

pub fn print_category_list(categories: &[(&Category, usize)]) {
    if categories.is_empty() {
        println!("No categories found.");
        return;
    }
    for (c, count) in categories {
        let noun = if *count == 1 { "task" } else { "tasks" };
        println!("  {} ({}) {} - {count} {noun}", c.name, short_id(&c.id), c.color);
    }
}

pub fn print_profile(u: &User, s: &CompletionSummary) {
    let name = if u.full_name.is_empty() { "-" } else { u.full_name.as_str() };
    let role = match u.role {
        UserRole::Admin => "Administrator",
        UserRole::User => "User",
    };
    println!("{name} <{}>", u.email);
    println!("  Role: {role}");
    println!("  Member since: {}", u.created_date.format("%Y-%m-%d"));
    println!();
    println!("Tasks created: {}", s.total);
    println!("Completed: {}", s.completed);
    println!("Completion rate: {}%", s.rate);
}
