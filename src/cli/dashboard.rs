use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::error::TaskflowError;
use crate::output;
use crate::views::Dashboard;

use super::{build_filter, finish, open_client, FilterArgs};

pub fn run(args: FilterArgs, json_output: bool, data_flag: Option<&Path>) -> i32 {
    finish(run_inner(&args, json_output, data_flag), json_output)
}

fn run_inner(args: &FilterArgs, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command dashboard");
    let client = open_client(data_flag)?;
    let mut dashboard = Dashboard::load(&client)?;
    dashboard.filter = build_filter(args, &dashboard)?;

    let now = Utc::now();
    let stats = dashboard.stats(now);
    let visible = dashboard.visible_tasks();

    if json_output {
        let tasks_json: Vec<_> = visible
            .iter()
            .map(|t| output::json::task_json(t, dashboard.category_of(t), now))
            .collect();
        let categories_json: Vec<_> = dashboard
            .categories()
            .iter()
            .map(output::json::category_json)
            .collect();
        output::json::print(&output::json::success(json!({
            "stats": output::json::stats_json(&stats),
            "tasks": tasks_json,
            "categories": categories_json
        })));
    } else {
        output::text::print_stats(&stats);
        println!();
        if !dashboard.filter.is_empty() {
            println!("Showing {} of {} tasks", visible.len(), stats.total);
        }
        output::text::print_task_list(&visible, |t| dashboard.category_of(t), now);
    }
    Ok(0)
}
