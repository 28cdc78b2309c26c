use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;

use pr_review_client::errors::ErrorHandler;
use pr_review_client::structs::cli::Cli;
use pr_review_client::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();

    let mut runner = CommandRunner::new(&cli);
    match runner.run_command(cli.command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            ErrorHandler::handle_error(&error);
            ExitCode::FAILURE
        }
    }
}
