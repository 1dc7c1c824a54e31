// src/data.rs

use crate::bank::QuestionBank;
use crate::error::ConfigError;
use crate::model::{QuizConfig, RewardConfig, ScreenTexts};
use std::sync::Arc;

/// Variable de entorno con la ruta de un YAML alternativo (solo escritorio).
pub const CONFIG_ENV_VAR: &str = "IDUN_QUIZ_CONFIG";

const EMBEDDED_CONFIG: &str = include_str!("data/quiz_config.yaml");

/// Todo lo que la app necesita tras cargar la configuración.
#[derive(Debug, Clone)]
pub struct LoadedQuiz {
    pub title: String,
    pub description: String,
    pub bank: Arc<QuestionBank>,
    pub reward: RewardConfig,
    pub screens: ScreenTexts,
}

impl QuizConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Valida las preguntas y separa el banco del resto de la configuración
    pub fn into_loaded(self) -> Result<LoadedQuiz, ConfigError> {
        let bank = QuestionBank::new(self.questions)?;
        Ok(LoadedQuiz {
            title: self.title,
            description: self.description,
            bank: Arc::new(bank),
            reward: self.reward,
            screens: self.screens,
        })
    }
}

/// Carga el quiz desde el YAML embebido
pub fn read_config_embedded() -> Result<LoadedQuiz, ConfigError> {
    QuizConfig::from_yaml(EMBEDDED_CONFIG)?.into_loaded()
}

/// Carga el quiz desde un fichero YAML con la misma forma que el embebido
#[cfg(not(target_arch = "wasm32"))]
pub fn read_config_file(path: &std::path::Path) -> Result<LoadedQuiz, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    QuizConfig::from_yaml(&text)?.into_loaded()
}

/// En escritorio respeta `IDUN_QUIZ_CONFIG`; si no está definida usa el embebido.
pub fn load_config() -> Result<LoadedQuiz, ConfigError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            log::info!("Cargando configuración desde {path}");
            return read_config_file(std::path::Path::new(&path));
        }
    }

    read_config_embedded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_has_six_valid_questions() {
        let quiz = read_config_embedded().expect("config embebida válida");
        assert_eq!(quiz.bank.count(), 6);
        assert_eq!(quiz.reward.threshold, 5);
        let correct: Vec<usize> = quiz.bank.iter().map(|q| q.correct_answer).collect();
        assert_eq!(correct, vec![3, 3, 0, 1, 2, 1]);
    }

    #[test]
    fn screens_fall_back_to_default_copy() {
        let quiz = read_config_embedded().unwrap();
        assert_eq!(quiz.screens.question.submit, "Skicka svar");
        assert!(quiz.screens.reward.result.contains("{score}"));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let err = QuizConfig::from_yaml("title: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_question_is_rejected_on_load() {
        let yaml = r#"
title: t
description: d
questions:
  - id: 1
    prompt: p
    options: [a, b]
    correct_answer: 2
reward:
  message: m
  link: https://example.com
"#;
        let config = QuizConfig::from_yaml(yaml).expect("yaml ok");
        assert_eq!(config.reward.threshold, 5);
        assert!(matches!(
            config.into_loaded(),
            Err(ConfigError::InvalidQuestion { id: 1, .. })
        ));
    }

    #[test]
    fn partial_screen_texts_keep_other_defaults() {
        let yaml = r#"
title: t
description: d
questions:
  - id: 1
    prompt: p
    options: [a, b]
    correct_answer: 0
reward:
  message: m
  link: https://example.com
  threshold: 1
screens:
  question:
    next: Vidare
"#;
        let quiz = QuizConfig::from_yaml(yaml).unwrap().into_loaded().unwrap();
        assert_eq!(quiz.screens.question.next, "Vidare");
        assert_eq!(quiz.screens.question.submit, "Skicka svar");
        assert_eq!(quiz.reward.threshold, 1);
    }
}
