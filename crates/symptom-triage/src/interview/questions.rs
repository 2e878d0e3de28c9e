use serde::Serialize;

/// One yes/no question bound to the symptom it confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomQuestion {
    pub symptom: &'static str,
    pub prompt: &'static str,
}

const fn question(symptom: &'static str, prompt: &'static str) -> SymptomQuestion {
    SymptomQuestion { symptom, prompt }
}

const STANDARD_QUESTIONS: [SymptomQuestion; 22] = [
    question("febre", "Você está com febre? (s/n) "),
    question("tosse", "Está com tosse? (s/n) "),
    question("dor_de_garganta", "Sente dor de garganta? (s/n) "),
    question("coriza", "Seu nariz está escorrendo ou entupido? (s/n) "),
    question("espirros", "Está espirrando com frequência? (s/n) "),
    question("fadiga", "Sente um cansaço ou fadiga fora do comum? (s/n) "),
    question("dor_de_cabeca", "Está com dor de cabeça? (s/n) "),
    question("perda_de_olfato", "Você notou perda de olfato ou paladar? (s/n) "),
    question("dor_muscular", "Sente dores no corpo ou nos músculos? (s/n) "),
    question("nausea", "Está com náusea? (s/n) "),
    question("vomito", "Teve episódios de vômito? (s/n) "),
    question("diarreia", "Está com diarreia? (s/n) "),
    question("dor_abdominal", "Sente dor na região abdominal? (s/n) "),
    question("dor_no_peito", "Está sentindo dor ou aperto no peito? (s/n) "),
    question(
        "falta_de_ar",
        "Está com dificuldade para respirar ou falta de ar? (s/n) ",
    ),
    question(
        "rigidez_na_nuca",
        "Sente o pescoço rígido, com dificuldade de movê-lo? (s/n) ",
    ),
    question("dor_ao_urinar", "Sente dor ou ardência ao urinar? (s/n) "),
    question(
        "miccao_frequente",
        "Está urinando com uma frequência muito maior que o normal? (s/n) ",
    ),
    question(
        "dor_nas_costas",
        "Sente dor na região lombar (fundo das costas)? (s/n) ",
    ),
    question(
        "erupcao_cutanea",
        "Apareceu alguma erupção ou mancha na pele? (s/n) ",
    ),
    question("coceira_nos_olhos", "Seus olhos estão coçando? (s/n) "),
    question("chiado_no_peito", "Você ouve um chiado ao respirar? (s/n) "),
];

/// Fixed question order used by the interactive interview.
pub fn standard_questions() -> &'static [SymptomQuestion] {
    &STANDARD_QUESTIONS
}
