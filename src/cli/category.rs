use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::cli::commands::CategoryCommands;
use crate::error::TaskflowError;
use crate::models::{CategoryPatch, NewCategory};
use crate::output;
use crate::views::CategoriesView;

use super::{finish, open_client};

pub fn run(cmd: CategoryCommands, json_output: bool, data_flag: Option<&Path>) -> i32 {
    let result = match cmd {
        CategoryCommands::Add { name, color } => run_add(name, color, json_output, data_flag),
        CategoryCommands::List => run_list(json_output, data_flag),
        CategoryCommands::Edit { id, name, color } => {
            run_edit(&id, CategoryPatch { name, color }, json_output, data_flag)
        }
        CategoryCommands::Delete { id } => run_delete(&id, json_output, data_flag),
    };
    finish(result, json_output)
}

fn run_add(name: String, color: String, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command category add");
    let client = open_client(data_flag)?;
    let mut view = CategoriesView::load(&client)?;
    let category = view.create(NewCategory { name, color })?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "category": output::json::category_json(&category)
        })));
    } else {
        println!("Added category: {} ({})", category.name, category.id);
    }
    Ok(0)
}

fn run_list(json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command category list");
    let client = open_client(data_flag)?;
    let view = CategoriesView::load(&client)?;
    let with_counts = view.with_counts();

    if json_output {
        let categories_json: Vec<_> = with_counts
            .iter()
            .map(|(c, count)| output::json::category_with_count_json(c, *count))
            .collect();
        output::json::print(&output::json::success(json!({ "categories": categories_json })));
    } else {
        output::text::print_category_list(&with_counts);
    }
    Ok(0)
}

fn run_edit(id: &str, patch: CategoryPatch, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command category edit");
    if patch.is_empty() {
        return Err(TaskflowError::validation("Nothing to change"));
    }
    let client = open_client(data_flag)?;
    let mut view = CategoriesView::load(&client)?;
    let category_id = view.find_category(id)?.id.clone();
    let category = view.update(&category_id, patch)?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "category": output::json::category_with_count_json(&category, view.task_count(&category.id))
        })));
    } else {
        output::text::print_category(&category);
    }
    Ok(0)
}

fn run_delete(id: &str, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command category delete");
    let client = open_client(data_flag)?;
    let mut view = CategoriesView::load(&client)?;
    let category = view.find_category(id)?.clone();
    let kept = view.task_count(&category.id);

    view.delete(&category.id)?;
    if json_output {
        output::json::print(&output::json::success(json!({
            "deleted": { "id": category.id, "name": category.name },
            "tasks_kept": kept
        })));
    } else {
        println!("Deleted category: {} ({})", category.name, category.id);
        if kept > 0 {
            println!("{kept} task(s) keep their reference to it");
        }
    }
    Ok(0)
}
