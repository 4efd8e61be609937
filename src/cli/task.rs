use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::cli::commands::TaskCommands;
use crate::client::DataClient;
use crate::error::TaskflowError;
use crate::models::{NewTask, Task, TaskPatch, TaskStatus};
use crate::output;
use crate::views::Dashboard;

use super::{build_filter, finish, open_client, parse_due, FilterArgs};

pub fn run(cmd: TaskCommands, json_output: bool, data_flag: Option<&Path>) -> i32 {
    let result = match cmd {
        TaskCommands::Add {
            title,
            description,
            priority,
            status,
            category,
            due,
        } => run_add(
            AddArgs {
                title,
                description,
                priority,
                status,
                category,
                due,
            },
            json_output,
            data_flag,
        ),
        TaskCommands::List(args) => run_list(&args, json_output, data_flag),
        TaskCommands::Show { id } => run_show(&id, json_output, data_flag),
        TaskCommands::Edit {
            id,
            title,
            description,
            priority,
            status,
            category,
            due,
            clear_description,
            clear_category,
            clear_due,
        } => run_edit(
            &id,
            EditArgs {
                title,
                description,
                priority,
                status,
                category,
                due,
                clear_description,
                clear_category,
                clear_due,
            },
            json_output,
            data_flag,
        ),
        TaskCommands::Status { id, status } => run_status(&id, &status, json_output, data_flag),
        TaskCommands::Toggle { id } => run_toggle(&id, json_output, data_flag),
        TaskCommands::Delete { id } => run_delete(&id, json_output, data_flag),
    };
    finish(result, json_output)
}

struct AddArgs {
    title: String,
    description: Option<String>,
    priority: String,
    status: String,
    category: Option<String>,
    due: Option<String>,
}

struct EditArgs {
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    status: Option<String>,
    category: Option<String>,
    due: Option<String>,
    clear_description: bool,
    clear_category: bool,
    clear_due: bool,
}

fn run_add(args: AddArgs, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command task add");
    let client = open_client(data_flag)?;
    let mut dashboard = Dashboard::load(&client)?;

    // Resolve everything before the write to fail fast
    let category_id = match args.category.as_deref() {
        Some(reference) => Some(dashboard.find_category(reference)?.id.clone()),
        None => None,
    };
    let data = NewTask {
        title: args.title,
        description: args.description,
        status: args.status.parse()?,
        priority: args.priority.parse()?,
        category_id,
        due_date: args.due.as_deref().map(parse_due).transpose()?,
    };

    let task = dashboard.create_task(data)?;
    if json_output {
        let category = dashboard.category_of(&task);
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(&task, category, Utc::now())
        })));
    } else {
        println!("Added task: {} ({})", task.title, task.id);
    }
    Ok(0)
}

fn run_list(args: &FilterArgs, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command task list");
    let client = open_client(data_flag)?;
    let mut dashboard = Dashboard::load(&client)?;
    dashboard.filter = build_filter(args, &dashboard)?;

    let now = Utc::now();
    let visible = dashboard.visible_tasks();
    if json_output {
        let tasks_json: Vec<_> = visible
            .iter()
            .map(|t| output::json::task_json(t, dashboard.category_of(t), now))
            .collect();
        output::json::print(&output::json::success(json!({ "tasks": tasks_json })));
    } else {
        output::text::print_task_list(&visible, |t| dashboard.category_of(t), now);
    }
    Ok(0)
}

fn run_show(id: &str, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command task show");
    let client = open_client(data_flag)?;
    let dashboard = Dashboard::load(&client)?;
    let task = dashboard.find_task(id)?;
    let category = dashboard.category_of(task);

    let now = Utc::now();
    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(task, category, now)
        })));
    } else {
        output::text::print_task(task, category, now);
    }
    Ok(0)
}

fn run_edit(
    id: &str,
    args: EditArgs,
    json_output: bool,
    data_flag: Option<&Path>,
) -> Result<i32, TaskflowError> {
    info!("command task edit");
    let client = open_client(data_flag)?;
    let mut dashboard = Dashboard::load(&client)?;
    let task_id = dashboard.find_task(id)?.id.clone();

    let category_id = if args.clear_category {
        Some(None)
    } else {
        match args.category.as_deref() {
            Some(reference) => Some(Some(dashboard.find_category(reference)?.id.clone())),
            None => None,
        }
    };
    let due_date = if args.clear_due {
        Some(None)
    } else {
        args.due.as_deref().map(parse_due).transpose()?.map(Some)
    };
    let description = if args.clear_description {
        Some(None)
    } else {
        args.description.map(Some)
    };

    let patch = TaskPatch {
        title: args.title,
        description,
        status: args.status.as_deref().map(str::parse).transpose()?,
        priority: args.priority.as_deref().map(str::parse).transpose()?,
        category_id,
        due_date,
        completed_at: None,
    };
    if patch.is_empty() {
        return Err(TaskflowError::validation("Nothing to change"));
    }

    let task = dashboard.update_task(&task_id, patch)?;
    print_updated(&dashboard, &task, json_output);
    Ok(0)
}

fn run_status(id: &str, status: &str, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command task status");
    let status: TaskStatus = status.parse()?;
    let client = open_client(data_flag)?;
    let mut dashboard = Dashboard::load(&client)?;
    let task_id = dashboard.find_task(id)?.id.clone();

    let task = dashboard.change_status(&task_id, status)?;
    print_updated(&dashboard, &task, json_output);
    Ok(0)
}

fn run_toggle(id: &str, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command task toggle");
    let client = open_client(data_flag)?;
    let mut dashboard = Dashboard::load(&client)?;
    let task_id = dashboard.find_task(id)?.id.clone();

    let task = dashboard.toggle(&task_id)?;
    print_updated(&dashboard, &task, json_output);
    Ok(0)
}

fn run_delete(id: &str, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command task delete");
    let client = open_client(data_flag)?;
    let mut dashboard = Dashboard::load(&client)?;
    let task = dashboard.find_task(id)?.clone();

    dashboard.delete_task(&task.id)?;
    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": { "id": task.id, "title": task.title }
        })));
    } else {
        println!("Deleted task: {} ({})", task.title, task.id);
    }
    Ok(0)
}

fn print_updated<C: DataClient>(dashboard: &Dashboard<'_, C>, task: &Task, json_output: bool) {
    if json_output {
        output::json::print(&output::json::success(json!({
            "task": output::json::task_json(task, dashboard.category_of(task), Utc::now())
        })));
    } else {
        println!("Task {} is now {}", task.id, task.status);
    }
}
