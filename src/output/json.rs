use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::error::TaskflowError;
use crate::models::{Category, Task, User};
use crate::stats::{CompletionSummary, TaskStats};

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TaskflowError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn print(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{value}"),
    }
}

pub fn task_json(t: &Task, category: Option<&Category>, now: DateTime<Utc>) -> Value {
    let mut v = json!({
        "id": t.id,
        "title": t.title,
        "description": t.description,
        "status": t.status.as_str(),
        "priority": t.priority.as_str(),
        "category_id": t.category_id,
        "due_date": t.due_date,
        "completed_at": t.completed_at,
        "created_by": t.created_by,
        "created_date": t.created_date,
        "overdue": t.is_overdue(now)
    });
    if let Some(c) = category {
        v["category"] = category_json(c);
    }
    v
}

pub fn category_json(c: &Category) -> Value {
    json!({
        "id": c.id,
        "name": c.name,
        "color": c.color
    })
}

pub fn category_with_count_json(c: &Category, task_count: usize) -> Value {
    let mut v = category_json(c);
    v["task_count"] = json!(task_count);
    v
}

pub fn stats_json(s: &TaskStats) -> Value {
    json!({
        "total": s.total,
        "completed": s.completed,
        "in_progress": s.in_progress,
        "overdue": s.overdue
    })
}

pub fn user_json(u: &User) -> Value {
    json!({
        "email": u.email,
        "full_name": u.full_name,
        "role": u.role.as_str(),
        "created_date": u.created_date
    })
}

pub fn summary_json(s: &CompletionSummary) -> Value {
    json!({
        "total": s.total,
        "completed": s.completed,
        "completion_rate": s.rate
    })
}
