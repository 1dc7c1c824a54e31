use super::*;
use crate::model::{Question, fill_template};
use crate::reward::{filled_stars, is_reward_eligible};

impl QuizApp {
    pub fn question_view(&self) -> Option<QuestionView> {
        let question = self.session.current_question()?;
        let current = self.session.current_index()?;
        let total = self.session.total_questions();
        let selected = self.session.selected_answer();
        let submitted = self.session.is_awaiting_next();
        let correcta = self.session.current_answer_correct().unwrap_or(false);

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let is_selected = selected == Some(i);
                let state = if submitted && question.is_correct(i) {
                    OptionState::Correct
                } else if submitted && is_selected {
                    OptionState::Wrong
                } else if is_selected {
                    OptionState::Selected
                } else {
                    OptionState::Idle
                };
                OptionRow {
                    index: i,
                    letter: Question::option_letter(i),
                    text: text.clone(),
                    state,
                    enabled: !submitted,
                }
            })
            .collect();

        let explanation = if submitted {
            question.explanation.clone().map(|e| (e, correcta))
        } else {
            None
        };

        Some(QuestionView {
            header: fill_template(
                &self.quiz.screens.question.header,
                &[("current", current + 1), ("total", total)],
            ),
            prompt: question.prompt.clone(),
            image: question.image.clone(),
            progress: self.session.progress_fraction().unwrap_or(0.0),
            options,
            explanation,
            can_submit: !submitted && selected.is_some(),
            can_advance: submitted,
            answered_correctly: submitted && correcta,
        })
    }

    pub fn reward_view(&self) -> RewardView {
        let score = self.session.score();
        let total = self.session.total_questions();
        RewardView {
            result: fill_template(
                &self.quiz.screens.reward.result,
                &[("score", score), ("total", total)],
            ),
            filled_stars: filled_stars(score, total),
            eligible: is_reward_eligible(score, &self.quiz.reward),
        }
    }

    pub fn landing_count_line(&self) -> String {
        fill_template(
            &self.quiz.screens.landing.questions_count,
            &[("count", self.session.total_questions())],
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_app;
    use crate::view_models::OptionState;

    #[test]
    fn no_question_view_on_landing() {
        let app = test_app();
        assert!(app.question_view().is_none());
        assert_eq!(app.landing_count_line(), "6 frågor • Mycket fint pris väntar!");
    }

    #[test]
    fn selection_is_highlighted_without_revealing_result() {
        let mut app = test_app();
        app.start_quiz();
        app.choose_option(1);
        let view = app.question_view().unwrap();
        assert_eq!(view.header, "Fråga 1 av 6");
        assert_eq!(view.options[1].state, OptionState::Selected);
        assert_eq!(view.options[3].state, OptionState::Idle);
        assert!(view.can_submit);
        assert!(!view.can_advance);
        assert!(view.explanation.is_none());
        assert!(view.options.iter().all(|o| o.enabled));
    }

    #[test]
    fn wrong_submission_marks_both_options_and_locks_buttons() {
        let mut app = test_app();
        app.start_quiz();
        app.choose_option(1);
        app.submit();
        let view = app.question_view().unwrap();
        assert_eq!(view.options[1].state, OptionState::Wrong);
        assert_eq!(view.options[3].state, OptionState::Correct);
        assert!(view.options.iter().all(|o| !o.enabled));
        assert!(!view.can_submit);
        assert!(view.can_advance);
        assert!(!view.answered_correctly);
        let (text, correcta) = view.explanation.unwrap();
        assert_eq!(text, "Jodå han är VD på Kunskapsskolan");
        assert!(!correcta);
    }

    #[test]
    fn reward_view_reflects_score() {
        let mut app = test_app();
        app.start_quiz();
        for option in [3, 3, 0, 1, 2, 0] {
            app.choose_option(option);
            app.submit();
            app.next();
        }
        let view = app.reward_view();
        assert_eq!(view.result, "Du fick 5 av 6 rätt!");
        assert_eq!(view.filled_stars, 5);
        assert!(view.eligible);
    }
}
