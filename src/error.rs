// src/error.rs

use thiserror::Error;

/// Violaciones del contrato del núcleo del quiz. Son errores de programación
/// (índices que la UI nunca debería producir), no condiciones recuperables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("índice de pregunta {index} fuera de rango (hay {count} preguntas)")]
    OutOfRange { index: usize, count: usize },
    #[error("opción {index} inválida: la pregunta actual tiene {options} opciones")]
    InvalidArgument { index: usize, options: usize },
}

/// Errores al cargar o validar la configuración del quiz.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se pudo parsear la configuración YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("no se pudo leer el fichero de configuración: {0}")]
    Io(#[from] std::io::Error),
    #[error("el banco de preguntas está vacío")]
    EmptyBank,
    #[error("pregunta {id} inválida: {reason}")]
    InvalidQuestion { id: u32, reason: String },
    #[error("id de pregunta duplicado: {0}")]
    DuplicateId(u32),
}
