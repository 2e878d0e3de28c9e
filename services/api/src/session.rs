use crate::infra::normalize_symptoms;
use crate::report::{render_banner, render_report};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use symptom_triage::error::AppError;
use symptom_triage::interview::{Interview, InterviewError, InterviewOutcome};
use symptom_triage::InferenceEngine;
use tracing::info;

/// Exit status used when the interview input is interrupted.
const INTERRUPTED_EXIT_CODE: u8 = 130;

/// How a command finished; mapped to the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished,
    Interrupted,
}

impl SessionEnd {
    pub fn exit_code(self) -> ExitCode {
        match self {
            SessionEnd::Finished => ExitCode::SUCCESS,
            SessionEnd::Interrupted => ExitCode::from(INTERRUPTED_EXIT_CODE),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Symptom identifiers (space or comma separated), e.g. febre tosse
    #[arg(value_delimiter = ',')]
    pub(crate) symptoms: Vec<String>,
    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_interview(engine: &InferenceEngine) -> Result<SessionEnd, AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    interview_session(engine, stdin.lock(), &mut stdout.lock())
}

fn interview_session<R: BufRead, W: Write>(
    engine: &InferenceEngine,
    input: R,
    out: &mut W,
) -> Result<SessionEnd, AppError> {
    render_banner(out)?;

    match Interview::standard().run(input, &mut *out) {
        Ok(InterviewOutcome::Completed(symptoms)) => {
            let result = engine.analyze(symptoms);
            info!(
                suggestions = result.suggestions.len(),
                urgency = result.urgency_level.label(),
                "interview analysis ready"
            );
            render_report(&result, out)?;
            Ok(SessionEnd::Finished)
        }
        Ok(InterviewOutcome::Quit) => {
            writeln!(out, "Entrevista encerrada pelo usuário.")?;
            Ok(SessionEnd::Finished)
        }
        Err(InterviewError::InputClosed) => {
            writeln!(out, "\nInterrompido pelo usuário. Encerrando…")?;
            out.flush()?;
            Ok(SessionEnd::Interrupted)
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn run_analyze(
    engine: &InferenceEngine,
    args: AnalyzeArgs,
) -> Result<SessionEnd, AppError> {
    let AnalyzeArgs { symptoms, json } = args;
    let result = engine.analyze(normalize_symptoms(symptoms));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &result).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_report(&result, &mut out)?;
    }

    Ok(SessionEnd::Finished)
}
