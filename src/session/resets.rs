use super::*;

impl QuizSession {
    /// Vuelve al estado inicial: sin empezar y sin respuestas
    pub fn reset(&mut self) {
        self.state = SessionState::NotStarted;
        self.answers = vec![None; self.bank.count()];
        log::debug!("Quiz reiniciado");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::fixtures::six_question_bank;

    #[test]
    fn reset_from_any_state_returns_to_not_started() {
        let mut session = QuizSession::new(six_question_bank());
        session.reset();
        assert_eq!(session.state(), SessionState::NotStarted);

        session.start();
        session.select_answer(3).unwrap();
        session.submit_answer();
        assert_eq!(session.score(), 1);

        session.reset();
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(!session.is_started());
        assert_eq!(session.score(), 0);
        assert_eq!(session.answers().len(), 6);
        assert!(session.answers().iter().all(Option::is_none));
        assert!(session.current_question().is_none());
    }
}
