mod cli;
mod infra;
mod report;
mod routes;
mod server;
mod session;

pub use session::SessionEnd;
use symptom_triage::error::AppError;

pub async fn run() -> Result<SessionEnd, AppError> {
    cli::run().await
}
