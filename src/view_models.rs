// src/view_models.rs

/// Estado visual de un botón de opción.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected, // Elegida, aún sin enviar
    Correct,  // Tras enviar: la opción correcta
    Wrong,    // Tras enviar: la elegida, si no era la correcta
}

#[derive(Clone, Debug)]
pub struct OptionRow {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
    pub enabled: bool,
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub header: String,
    pub prompt: String,
    pub image: Option<String>,
    pub progress: f32, // 0.0..=1.0
    pub options: Vec<OptionRow>,
    /// Explicación y si la respuesta fue correcta; solo tras enviar
    pub explanation: Option<(String, bool)>,
    pub can_submit: bool,
    pub can_advance: bool,
    pub answered_correctly: bool,
}

#[derive(Clone, Debug)]
pub struct RewardView {
    pub result: String,
    pub filled_stars: usize,
    pub eligible: bool,
}

impl OptionRow {
    pub fn label(&self) -> String {
        let mark = match self.state {
            OptionState::Correct => "  ✅",
            OptionState::Wrong => "  ❌",
            OptionState::Idle | OptionState::Selected => "",
        };
        format!("{}   {}{}", self.letter, self.text, mark)
    }
}
