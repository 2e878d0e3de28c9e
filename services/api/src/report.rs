use std::io::{self, Write};

use symptom_triage::InferenceResult;

const RULE_WIDTH: usize = 50;

pub(crate) fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "   Sistema Especialista de Triagem Médica")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Responda às perguntas com 's' (sim) ou 'n' (não).")?;
    writeln!(out, "Pressione ENTER para pular. Digite 'q' para encerrar.\n")
}

pub(crate) fn render_report<W: Write>(result: &InferenceResult, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{} ANÁLISE COMPLETA {}", "-".repeat(20), "-".repeat(20))?;

    let reported = if result.reported_symptoms.is_empty() {
        "(Nenhum sintoma informado)".to_string()
    } else {
        join(result.reported_symptoms.iter().map(|s| s.as_str()), ", ")
    };
    writeln!(out, "Sintomas Informados: {reported}")?;
    writeln!(
        out,
        "Nível de Urgência Sugerido: {}",
        result.urgency_level.label().to_uppercase()
    )?;

    if !result.alerts.is_empty() {
        writeln!(
            out,
            "\n{} ATENÇÃO: SINAIS DE ALERTA DETECTADOS {}",
            "!".repeat(10),
            "!".repeat(10)
        )?;
        for alert in &result.alerts {
            writeln!(out, "-> {}: {}", alert.name, alert.message)?;
        }
        writeln!(out, "{}", "!".repeat(56))?;
    }

    writeln!(out, "\n--- Sugestões de Possíveis Condições ---")?;
    if result.suggestions.is_empty() {
        writeln!(
            out,
            "Não há sugestões suficientes com base nos sintomas informados."
        )?;
    }
    for suggestion in &result.suggestions {
        let evidence = if suggestion.matched_symptoms.is_empty() {
            "(sem evidências suficientes)".to_string()
        } else {
            join(suggestion.matched_symptoms.iter().map(|s| s.as_str()), ", ")
        };

        writeln!(
            out,
            "\n[+] Condição: {} (Pontuação: {:?})",
            suggestion.condition, suggestion.score
        )?;
        writeln!(out, "    | Evidências: {evidence}")?;
        writeln!(out, "    | Cálculo: {}", suggestion.explanation.join("; "))?;
        writeln!(out, "    | Conselho: {}", suggestion.advice)?;
    }

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", result.disclaimer)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn join<'a>(parts: impl Iterator<Item = &'a str>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}
