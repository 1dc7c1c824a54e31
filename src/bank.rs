// src/bank.rs

use crate::error::{ConfigError, QuizError};
use crate::model::Question;
use std::collections::HashSet;

/// Banco de preguntas inmutable. Se construye una vez al arrancar y se
/// comparte (vía `Arc`) con todas las sesiones que lo lean.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Valida las preguntas y construye el banco.
    pub fn new(questions: Vec<Question>) -> Result<Self, ConfigError> {
        if questions.is_empty() {
            return Err(ConfigError::EmptyBank);
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if q.id == 0 {
                return Err(invalid(q.id, "el id debe ser positivo"));
            }
            if !seen.insert(q.id) {
                return Err(ConfigError::DuplicateId(q.id));
            }
            if q.prompt.trim().is_empty() {
                return Err(invalid(q.id, "el enunciado está vacío"));
            }
            if q.options.len() < 2 {
                return Err(invalid(q.id, "hacen falta al menos dos opciones"));
            }
            if q.correct_answer >= q.options.len() {
                return Err(invalid(
                    q.id,
                    &format!(
                        "respuesta correcta {} fuera de las {} opciones",
                        q.correct_answer,
                        q.options.len()
                    ),
                ));
            }
        }

        log::debug!("Banco de preguntas cargado: {} preguntas", questions.len());
        Ok(Self { questions })
    }

    pub fn get(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            count: self.questions.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

fn invalid(id: u32, reason: &str) -> ConfigError {
    ConfigError::InvalidQuestion {
        id,
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, options: usize, correct: usize) -> Question {
        Question {
            id,
            prompt: format!("Pregunta {id}"),
            options: (0..options).map(|i| format!("Opción {i}")).collect(),
            correct_answer: correct,
            explanation: None,
            image: None,
        }
    }

    #[test]
    fn get_returns_questions_in_order() {
        let bank = QuestionBank::new(vec![question(1, 2, 0), question(2, 3, 2)]).unwrap();
        assert_eq!(bank.count(), 2);
        assert_eq!(bank.get(0).unwrap().id, 1);
        assert_eq!(bank.get(1).unwrap().id, 2);
    }

    #[test]
    fn get_out_of_range_is_an_error() {
        let bank = QuestionBank::new(vec![question(1, 2, 0)]).unwrap();
        assert_eq!(
            bank.get(1).unwrap_err(),
            QuizError::OutOfRange { index: 1, count: 1 }
        );
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(matches!(QuestionBank::new(vec![]), Err(ConfigError::EmptyBank)));
    }

    #[test]
    fn rejects_correct_answer_outside_options() {
        let err = QuestionBank::new(vec![question(7, 4, 4)]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuestion { id: 7, .. }));
    }

    #[test]
    fn rejects_single_option_and_duplicate_ids() {
        assert!(matches!(
            QuestionBank::new(vec![question(1, 1, 0)]),
            Err(ConfigError::InvalidQuestion { id: 1, .. })
        ));
        assert!(matches!(
            QuestionBank::new(vec![question(3, 2, 0), question(3, 2, 1)]),
            Err(ConfigError::DuplicateId(3))
        ));
    }

    #[test]
    fn rejects_zero_id_and_blank_prompt() {
        assert!(QuestionBank::new(vec![question(0, 2, 0)]).is_err());
        let mut blank = question(1, 2, 0);
        blank.prompt = "   ".into();
        assert!(QuestionBank::new(vec![blank]).is_err());
    }
}
