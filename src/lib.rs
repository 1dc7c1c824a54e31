pub mod app;
pub mod bank;
pub mod data;
pub mod error;
pub mod model;
pub mod particles;
pub mod reward;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use bank::QuestionBank;
pub use error::{ConfigError, QuizError};
pub use session::{QuizSession, SessionState};
