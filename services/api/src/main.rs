use std::process::ExitCode;
use symptom_triage_api::run;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(end) => end.exit_code(),
        Err(err) => {
            eprintln!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}
