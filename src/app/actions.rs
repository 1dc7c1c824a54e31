use super::*;
use egui::{Context, OpenUrl};

impl QuizApp {
    pub fn start_quiz(&mut self) {
        self.message.clear();
        self.session.start();
    }

    /// Click en una opción. Un índice inválido es un fallo de la UI: se registra y se ignora.
    pub fn choose_option(&mut self, index: usize) {
        if let Err(e) = self.session.select_answer(index) {
            log::error!("Selección rechazada: {e}");
        }
    }

    pub fn submit(&mut self) {
        if self.session.submit_answer() {
            let correcta = self.session.current_answer_correct().unwrap_or(false);
            log::info!(
                "Respuesta enviada ({}), puntuación {}/{}",
                if correcta { "correcta" } else { "incorrecta" },
                self.session.score(),
                self.session.total_questions()
            );
        }
    }

    pub fn next(&mut self) {
        self.session.next_question();
    }

    /// "Spela igen": vuelve a la pantalla de inicio
    pub fn play_again(&mut self) {
        self.message.clear();
        self.session.reset();
    }

    /// Abre el enlace del premio en una pestaña nueva
    pub fn claim_reward(&mut self, ctx: &Context) {
        if !self.is_reward_eligible() {
            log::warn!("Intento de reclamar el premio sin puntuación suficiente");
            return;
        }
        log::info!("Abriendo enlace del premio");
        ctx.open_url(OpenUrl::new_tab(&self.quiz.reward.link));
    }

    #[cfg(target_arch = "wasm32")]
    pub fn print_certificate(&mut self) {
        let printed = web_sys::window().map(|w| w.print());
        match printed {
            Some(Ok(())) => {}
            Some(Err(e)) => log::error!("window.print() falló: {e:?}"),
            None => log::error!("No hay window para imprimir"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn print_certificate(&mut self) {
        log::warn!("Imprimir certificado no está disponible en escritorio");
        self.message = self.quiz.screens.reward.print_unavailable.clone();
    }

    pub fn is_reward_eligible(&self) -> bool {
        self.session.is_completed()
            && crate::reward::is_reward_eligible(self.session.score(), &self.quiz.reward)
    }
}
