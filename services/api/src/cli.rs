use crate::server;
use crate::session::{run_analyze, run_interview, AnalyzeArgs, SessionEnd};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use symptom_triage::config::AppConfig;
use symptom_triage::error::AppError;
use symptom_triage::telemetry;
use symptom_triage::InferenceEngine;

#[derive(Parser, Debug)]
#[command(
    name = "symptom-triage",
    about = "Score reported symptoms against the triage knowledge base",
    version
)]
struct Cli {
    /// JSON knowledge catalog to use instead of the standard one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask the yes/no symptom questions and print the analysis (default command)
    Interview,
    /// Analyze symptom identifiers given on the command line
    Analyze(AnalyzeArgs),
    /// Start the HTTP service
    Serve(ServeArgs),
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

pub(crate) async fn run() -> Result<SessionEnd, AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Interview);

    let mut config = AppConfig::load()?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let engine = InferenceEngine::new(config.catalog.load()?);

    match command {
        Command::Interview => run_interview(&engine),
        Command::Analyze(args) => run_analyze(&engine, args),
        Command::Serve(args) => {
            server::run(config, args, engine).await?;
            Ok(SessionEnd::Finished)
        }
    }
}
