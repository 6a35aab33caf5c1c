use crate::demo::{exit_status, run_demo, run_validate, DemoArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_application::error::AppError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "Job Application Intake",
    about = "Serve the job application form or validate drafts from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a JSON application draft and print the outcome
    Validate(ValidateArgs),
    /// Walk through a scripted editing session: rejected, corrected, accepted
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let outcome = match command {
        Command::Serve(args) => return server::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Validate(args) => run_validate(args)?,
        Command::Demo(args) => run_demo(args)?,
    };
    Ok(ExitCode::from(exit_status(&outcome)))
}
