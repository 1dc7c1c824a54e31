use crate::bank::QuestionBank;
use std::sync::Arc;

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

/// Estado de la máquina del quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress {
        current: usize,          // Índice de la pregunta actual
        selected: Option<usize>, // Respuesta provisional, aún sin confirmar
        awaiting_next: bool,     // Respuesta confirmada, falta pasar a la siguiente
    },
    Completed,
}

/// Sesión de quiz: progreso y respuestas sobre un banco compartido.
///
/// Un único dueño (la app) la muta desde el bucle de UI; no hay estado global.
/// La puntuación y el progreso se calculan al vuelo en [`queries`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    state: SessionState,
    answers: Vec<Option<usize>>, // Una casilla por pregunta, `None` = sin responder
}

impl QuizSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        let answers = vec![None; bank.count()];
        Self {
            bank,
            state: SessionState::NotStarted,
            answers,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::bank::QuestionBank;
    use crate::model::Question;
    use std::sync::Arc;

    pub const CORRECT: [usize; 6] = [3, 3, 0, 1, 2, 1];

    /// Seis preguntas de cuatro opciones con las respuestas de `CORRECT`.
    pub fn six_question_bank() -> Arc<QuestionBank> {
        let questions = CORRECT
            .iter()
            .enumerate()
            .map(|(i, &correct)| Question {
                id: i as u32 + 1,
                prompt: format!("Pregunta {}", i + 1),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_answer: correct,
                explanation: (i % 2 == 0).then(|| format!("Explicación {}", i + 1)),
                image: None,
            })
            .collect();
        Arc::new(QuestionBank::new(questions).expect("banco de test válido"))
    }
}
