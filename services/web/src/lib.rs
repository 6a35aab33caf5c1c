mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use job_application::error::AppError;
use std::process::ExitCode;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
