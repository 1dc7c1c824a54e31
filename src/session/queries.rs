use super::*;
use crate::error::QuizError;
use crate::model::Question;

impl QuizSession {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, SessionState::NotStarted)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed)
    }

    pub fn is_awaiting_next(&self) -> bool {
        matches!(
            self.state,
            SessionState::InProgress {
                awaiting_next: true,
                ..
            }
        )
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { current, .. } => Some(current),
            _ => None,
        }
    }

    pub fn selected_answer(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { selected, .. } => selected,
            _ => None,
        }
    }

    /// Pregunta actual, o `None` si el quiz no está en curso
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.bank.get(i).ok())
    }

    /// `(actual + 1) / total`; solo definido mientras hay una pregunta en curso.
    pub fn progress_fraction(&self) -> Option<f32> {
        self.current_index()
            .map(|i| (i + 1) as f32 / self.bank.count() as f32)
    }

    pub fn progress_percent(&self) -> Option<f32> {
        self.progress_fraction().map(|f| f * 100.0)
    }

    /// Número de respuestas confirmadas que coinciden con la correcta
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.bank.iter())
            .filter(|(answer, q)| answer.is_some_and(|a| q.is_correct(a)))
            .count()
    }

    pub fn total_questions(&self) -> usize {
        self.bank.count()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answer_at(&self, index: usize) -> Result<Option<usize>, QuizError> {
        self.answers
            .get(index)
            .copied()
            .ok_or(QuizError::OutOfRange {
                index,
                count: self.answers.len(),
            })
    }

    /// Si la respuesta actual ya está confirmada, indica si fue correcta.
    pub fn current_answer_correct(&self) -> Option<bool> {
        match self.state {
            SessionState::InProgress {
                current,
                selected: Some(selected),
                awaiting_next: true,
            } => self.bank.get(current).ok().map(|q| q.is_correct(selected)),
            _ => None,
        }
    }
}
