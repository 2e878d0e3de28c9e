use super::domain::{DiagnosticRule, Evidence, RedFlagRule};

fn evidence(pairs: &[(&str, f64)]) -> Vec<Evidence> {
    pairs
        .iter()
        .map(|(symptom, weight)| Evidence::new(*symptom, *weight))
        .collect()
}

pub(super) fn standard_rules() -> Vec<DiagnosticRule> {
    vec![
        DiagnosticRule::new(
            "Resfriado Comum",
            evidence(&[
                ("coriza", 1.5),
                ("espirros", 1.2),
                ("dor_de_garganta", 1.0),
                ("tosse", 0.8),
                ("dor_de_cabeca", 0.4),
                ("fadiga", 0.6),
            ]),
        )
        .with_base_score(0.3)
        .with_advice(
            "Mantenha-se hidratado, descanse e use analgésicos leves. Procure um médico se os sintomas piorarem ou durarem mais de 10 dias.",
        ),
        DiagnosticRule::new(
            "Gripe (Influenza)",
            evidence(&[
                ("febre", 1.8),
                ("dor_muscular", 1.5),
                ("fadiga", 1.2),
                ("dor_de_cabeca", 0.8),
                ("tosse", 0.8),
                ("dor_de_garganta", 0.5),
            ]),
        )
        .with_base_score(0.2)
        .with_advice(
            "Repouso, hidratação e antitérmicos. Procure um serviço de saúde se sentir falta de ar, dor no peito ou confusão mental.",
        ),
        DiagnosticRule::new(
            "COVID-19 (Suspeita)",
            evidence(&[
                ("febre", 1.3),
                ("tosse", 1.0),
                ("perda_de_olfato", 2.5),
                ("fadiga", 0.8),
                ("dor_de_cabeca", 0.6),
                ("falta_de_ar", 1.5),
            ]),
        )
        .with_base_score(0.1)
        .with_advice(
            "Considere realizar um teste e seguir as normas de isolamento locais. Procure atendimento de urgência se tiver falta de ar ou baixa saturação de oxigênio.",
        ),
        // Cough and runny nose argue against a bacterial throat infection.
        DiagnosticRule::new(
            "Faringite/Amigdalite",
            evidence(&[
                ("dor_de_garganta", 2.0),
                ("febre", 1.0),
                ("dor_de_cabeca", 0.5),
                ("tosse", -0.8),
                ("coriza", -0.6),
            ]),
        )
        .with_base_score(0.4)
        .with_advice(
            "Faça gargarejos com água morna e sal, use analgésicos. Procure um profissional se a febre for alta, persistente ou se houver placas de pus.",
        ),
        DiagnosticRule::new(
            "Rinite Alérgica",
            evidence(&[
                ("espirros", 1.8),
                ("coriza", 1.5),
                ("coceira_nos_olhos", 1.5),
                ("chiado_no_peito", 0.5),
                ("dor_de_cabeca", 0.2),
            ]),
        )
        .with_base_score(0.2)
        .with_advice(
            "Evite o contato com alérgenos conhecidos, faça lavagem nasal. Um médico pode orientar o uso de anti-histamínicos.",
        ),
        DiagnosticRule::new(
            "Gastroenterite Aguda (Infecção Intestinal)",
            evidence(&[
                ("nausea", 1.2),
                ("vomito", 1.4),
                ("diarreia", 1.6),
                ("dor_abdominal", 1.0),
                ("febre", 0.4),
            ]),
        )
        .with_base_score(0.1)
        .with_advice(
            "Beba muito líquido (reidratação oral), faça uma dieta leve. Procure atendimento se houver sangue nas fezes, febre alta ou sinais de desidratação.",
        ),
        DiagnosticRule::new(
            "Infecção Urinária (ITU)",
            evidence(&[
                ("dor_ao_urinar", 2.0),
                ("miccao_frequente", 1.5),
                ("dor_nas_costas", 0.8),
                ("febre", 0.5),
                ("nausea", 0.3),
            ]),
        )
        .with_base_score(0.2)
        .with_advice(
            "Aumente a ingestão de líquidos. Procure um médico para realizar um exame de urina e obter o tratamento adequado.",
        ),
    ]
}

pub(super) fn standard_red_flags() -> Vec<RedFlagRule> {
    vec![
        RedFlagRule::new(
            "Sinais de Emergência Respiratória",
            ["falta_de_ar", "dor_no_peito"],
            "Procure uma emergência IMEDIATAMENTE (SAMU 192). A combinação de falta de ar e dor no peito pode indicar uma condição grave.",
        ),
        RedFlagRule::new(
            "Sinais Sugestivos de Meningite",
            ["febre", "rigidez_na_nuca", "dor_de_cabeca"],
            "Febre alta, rigidez na nuca e dor de cabeça forte são sinais de alerta. Procure uma emergência IMEDIATAMENTE.",
        ),
        RedFlagRule::new(
            "Sinais Sugestivos de Pneumonia",
            ["febre", "tosse", "falta_de_ar"],
            "A combinação de febre, tosse e falta de ar requer avaliação médica urgente.",
        ),
    ]
}
