use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::client::DataClient;
use crate::db::{connection, SqliteClient};
use crate::error::{ErrorCode, TaskflowError};
use crate::models::UserRole;
use crate::output;

use super::{finish, open_client};

/// Idempotent for the store; registers the user unless they already exist,
/// then opens a session for them.
pub fn run_init(
    email: &str,
    name: Option<&str>,
    role: &str,
    json_output: bool,
    data_flag: Option<&Path>,
) -> i32 {
    finish(init_inner(email, name, role, json_output, data_flag), json_output)
}

fn init_inner(
    email: &str,
    name: Option<&str>,
    role: &str,
    json_output: bool,
    data_flag: Option<&Path>,
) -> Result<i32, TaskflowError> {
    info!("command init");
    let role: UserRole = role.parse()?;
    let dir = connection::init_data_dir(data_flag)?;
    let client = SqliteClient::init(&dir)?;

    let registered = match client.register_user(email, name.unwrap_or(""), role) {
        Ok(_) => true,
        Err(e) if e.code == ErrorCode::UserExists => false,
        Err(e) => return Err(e),
    };
    let user = client.login(email)?;

    if json_output {
        output::json::print(&output::json::success(json!({
            "path": dir.to_string_lossy(),
            "user": output::json::user_json(&user),
            "registered": registered
        })));
    } else {
        println!("Initialized taskflow at {}", dir.display());
        println!("Signed in as {}", user.email);
    }
    Ok(0)
}

pub fn run_login(email: &str, json_output: bool, data_flag: Option<&Path>) -> i32 {
    finish(login_inner(email, json_output, data_flag), json_output)
}

fn login_inner(email: &str, json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command login");
    let client = open_client(data_flag)?;
    let user = client.login(email)?;
    if json_output {
        output::json::print(&output::json::success(output::json::user_json(&user)));
    } else {
        println!("Signed in as {}", user.email);
    }
    Ok(0)
}

pub fn run_logout(json_output: bool, data_flag: Option<&Path>) -> i32 {
    finish(logout_inner(json_output, data_flag), json_output)
}

fn logout_inner(json_output: bool, data_flag: Option<&Path>) -> Result<i32, TaskflowError> {
    info!("command logout");
    let client = open_client(data_flag)?;
    client.logout()?;
    if json_output {
        output::json::print(&output::json::success(json!({ "logged_out": true })));
    } else {
        println!("Signed out");
    }
    Ok(0)
}
