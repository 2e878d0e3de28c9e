//! Interactive yes/no interview that collects reported symptoms.
//!
//! The interview only gathers facts; it never scores anything. Answers map to
//! inclusion (yes) or exclusion (no / skip), and a quit answer stops the
//! session before any analysis runs.

mod questions;

pub use questions::{standard_questions, SymptomQuestion};

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::knowledge::Symptom;

pub const INVALID_ANSWER_HINT: &str =
    "Resposta inválida. Digite 's' (sim), 'n' (não), ENTER para pular ou 'q' para sair.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Skip,
    Quit,
}

impl Answer {
    /// Interpret a raw line; `None` means the answer was not understood.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" => Some(Self::Skip),
            "q" | "quit" | "sair" => Some(Self::Quit),
            "s" | "sim" | "y" | "yes" => Some(Self::Yes),
            "n" | "nao" | "não" | "no" => Some(Self::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewOutcome {
    /// Confirmed symptoms in question order.
    Completed(Vec<Symptom>),
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("interview i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before the interview finished")]
    InputClosed,
}

pub struct Interview<'a> {
    questions: &'a [SymptomQuestion],
}

impl Interview<'static> {
    pub fn standard() -> Self {
        Self::new(standard_questions())
    }
}

impl<'a> Interview<'a> {
    pub fn new(questions: &'a [SymptomQuestion]) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &'a [SymptomQuestion] {
        self.questions
    }

    pub fn run<R, W>(&self, mut input: R, mut output: W) -> Result<InterviewOutcome, InterviewError>
    where
        R: BufRead,
        W: Write,
    {
        let mut confirmed = Vec::new();

        for question in self.questions {
            match ask(question, &mut input, &mut output)? {
                Answer::Yes => confirmed.push(Symptom::from(question.symptom)),
                Answer::No | Answer::Skip => {}
                Answer::Quit => {
                    debug!(answered = confirmed.len(), "interview ended early");
                    return Ok(InterviewOutcome::Quit);
                }
            }
        }

        debug!(confirmed = confirmed.len(), "interview completed");
        Ok(InterviewOutcome::Completed(confirmed))
    }
}

fn ask<R, W>(question: &SymptomQuestion, input: &mut R, output: &mut W) -> Result<Answer, InterviewError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "{}", question.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InterviewError::InputClosed);
        }

        match Answer::parse(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "{INVALID_ANSWER_HINT}")?,
        }
    }
}
