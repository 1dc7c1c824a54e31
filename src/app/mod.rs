use crate::data::LoadedQuiz;
use crate::model::Screen;
use crate::particles::ParticleField;
use crate::session::QuizSession;

// Submódulos
pub mod actions;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionRow, OptionState, QuestionView, RewardView};

/// Raíz de composición: la app es la única dueña de la sesión.
pub struct QuizApp {
    pub quiz: LoadedQuiz,
    pub session: QuizSession,
    pub particles: ParticleField,
    pub message: String,
}

impl QuizApp {
    pub fn new(quiz: LoadedQuiz) -> Self {
        let session = QuizSession::new(quiz.bank.clone());
        log::info!("Quiz \"{}\" listo ({} preguntas)", quiz.title, quiz.bank.count());
        Self {
            quiz,
            session,
            particles: ParticleField::default(),
            message: String::new(),
        }
    }

    /// Pantalla que toca pintar según el estado de la sesión
    pub fn screen(&self) -> Screen {
        if !self.session.is_started() {
            Screen::Landing
        } else if self.session.is_completed() {
            Screen::Reward
        } else {
            Screen::Question
        }
    }

    /// Número de partículas por pantalla; 0 desactiva el efecto.
    pub fn particle_target(&self) -> usize {
        match self.screen() {
            Screen::Landing => 15,
            Screen::Reward => 30,
            Screen::Question => match self.session.current_answer_correct() {
                Some(true) => 25,
                _ => 0,
            },
        }
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> QuizApp {
    let quiz = crate::data::read_config_embedded().expect("config embebida válida");
    QuizApp::new(quiz)
}
