use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::error::TaskflowError;
use crate::output;
use crate::views::ProfileView;

use super::{finish, open_client};

pub fn run(json_output: bool, data_flag: Option<&Path>) -> i32 {
    finish(run_inner(json_output, data_flag), json_output)
}

fn run_inner(json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command profile");
    let client = open_client(data_flag)?;
    let profile = ProfileView::load(&client)?;
    let summary = profile.summary();

    if json_output {
        output::json::print(&output::json::success(json!({
            "user": output::json::user_json(profile.user()),
            "tasks": output::json::summary_json(&summary)
        })));
    } else {
        output::text::print_profile(profile.user(), &summary);
    }
    Ok(0)
}
