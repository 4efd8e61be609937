use clap::Parser;
use std::process;

use taskflow::cli::commands::{Cli, Commands};
use taskflow::{cli, logging};

fn main() {
    let cli_args = Cli::parse();
    if let Err(e) = logging::init_tracing(cli_args.verbose, cli_args.quiet) {
        eprintln!("Warning: {e}");
    }

    let json_output = cli_args.json;
    let data_flag = cli_args.data.clone();
    let data_flag = data_flag.as_deref();

    let exit_code = match cli_args.command {
        Commands::Init { email, name, role } => {
            cli::session::run_init(&email, name.as_deref(), &role, json_output, data_flag)
        }
        Commands::Login { email } => cli::session::run_login(&email, json_output, data_flag),
        Commands::Logout => cli::session::run_logout(json_output, data_flag),
        Commands::Dashboard(args) => cli::dashboard::run(args, json_output, data_flag),
        Commands::Task(cmd) => cli::task::run(cmd, json_output, data_flag),
        Commands::Category(cmd) => cli::category::run(cmd, json_output, data_flag),
        Commands::Profile => cli::profile::run(json_output, data_flag),
    };

    process::exit(exit_code);
}
