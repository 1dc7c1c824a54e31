use super::*;
use crate::error::QuizError;

impl QuizSession {
    /// Empieza (o vuelve a empezar) en la primera pregunta con todas las
    /// respuestas vacías.
    pub fn start(&mut self) {
        self.answers = vec![None; self.bank.count()];
        self.state = SessionState::InProgress {
            current: 0,
            selected: None,
            awaiting_next: false,
        };
        log::debug!("Quiz iniciado con {} preguntas", self.bank.count());
    }

    /// Marca una respuesta provisional. Volver a elegir sobrescribe la anterior.
    ///
    /// Fuera de una pregunta activa, o con la respuesta ya confirmada, no hace nada.
    /// Un índice fuera de las opciones es un error de programación.
    pub fn select_answer(&mut self, index: usize) -> Result<(), QuizError> {
        let current = match self.state {
            SessionState::InProgress {
                current,
                awaiting_next: false,
                ..
            } => current,
            other => {
                log::debug!("select_answer({index}) ignorado en estado {other:?}");
                return Ok(());
            }
        };

        let options = self.bank.get(current)?.options.len();
        if index >= options {
            return Err(QuizError::InvalidArgument { index, options });
        }

        self.state = SessionState::InProgress {
            current,
            selected: Some(index),
            awaiting_next: false,
        };
        log::debug!("Pregunta {current}: opción {index} seleccionada");
        Ok(())
    }

    /// Confirma la respuesta seleccionada en `answers`.
    /// Devuelve `false` (sin tocar nada) si no había selección o ya estaba confirmada.
    pub fn submit_answer(&mut self) -> bool {
        match self.state {
            SessionState::InProgress {
                current,
                selected: Some(selected),
                awaiting_next: false,
            } => {
                self.answers[current] = Some(selected);
                self.state = SessionState::InProgress {
                    current,
                    selected: Some(selected),
                    awaiting_next: true,
                };
                log::debug!("Pregunta {current}: respuesta {selected} confirmada");
                true
            }
            other => {
                log::debug!("submit_answer ignorado en estado {other:?}");
                false
            }
        }
    }

    /// Pasa a la siguiente pregunta, o completa el quiz si era la última.
    /// Solo actúa después de confirmar la respuesta actual.
    pub fn next_question(&mut self) {
        let current = match self.state {
            SessionState::InProgress {
                current,
                awaiting_next: true,
                ..
            } => current,
            other => {
                log::debug!("next_question ignorado en estado {other:?}");
                return;
            }
        };

        let next = current + 1;
        if next >= self.bank.count() {
            self.state = SessionState::Completed;
            log::info!(
                "Quiz completado: {} de {} correctas",
                self.score(),
                self.total_questions()
            );
        } else {
            self.state = SessionState::InProgress {
                current: next,
                selected: None,
                awaiting_next: false,
            };
            log::debug!("Avanzando a la pregunta {next}");
        }
    }
}
