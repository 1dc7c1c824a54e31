use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question")]
    pub prompt: String, // Enunciado
    pub options: Vec<String>,
    pub correct_answer: usize, // Índice dentro de `options`
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_answer == option
    }

    /// Etiqueta de la opción: A, B, C...
    pub fn option_letter(index: usize) -> char {
        (b'A' + (index % 26) as u8) as char
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RewardConfig {
    pub message: String,
    pub link: String,
    #[serde(default = "default_threshold")]
    pub threshold: usize,
}

fn default_threshold() -> usize {
    5
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizConfig {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub reward: RewardConfig,
    #[serde(default)]
    pub screens: ScreenTexts,
}

/// Textos de las pantallas. Los marcadores `{count}`, `{current}`, `{total}`
/// y `{score}` se sustituyen al pintar.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScreenTexts {
    pub landing: LandingTexts,
    pub question: QuestionTexts,
    pub reward: RewardTexts,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LandingTexts {
    pub questions_count: String,
    pub begin: String,
}

impl Default for LandingTexts {
    fn default() -> Self {
        Self {
            questions_count: "{count} frågor • Mycket fint pris väntar!".into(),
            begin: "🎉 Börja quizet 🎂".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct QuestionTexts {
    pub header: String,
    pub restart: String,
    pub image_link: String,
    pub submit: String,
    pub next: String,
}

impl Default for QuestionTexts {
    fn default() -> Self {
        Self {
            header: "Fråga {current} av {total}".into(),
            restart: "🔄 Börja om".into(),
            image_link: "🖼 Visa bild".into(),
            submit: "Skicka svar".into(),
            next: "Nästa".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RewardTexts {
    pub title: String,
    pub subtitle: String,
    pub result: String,
    pub claim_button: String,
    pub claim_description: String,
    pub almost_there_title: String,
    pub almost_there_description: String,
    pub play_again: String,
    pub print_certificate: String,
    pub print_unavailable: String,
}

impl Default for RewardTexts {
    fn default() -> Self {
        Self {
            title: "🎉 Grattis Idun! 🎉".into(),
            subtitle: "Du klarade av det legendariska 15 års quizet!".into(),
            result: "Du fick {score} av {total} rätt!".into(),
            claim_button: "Få din födelsedagspresent".into(),
            claim_description: "Klicka för att besöka Biltema och få din födelsedagspresent!".into(),
            almost_there_title: "Nästan där!".into(),
            almost_there_description: "Du behöver minst 5 rätta svar för att få din födelsedagspresent! Försök igen för att låsa upp din speciella födelsedagspresent! 🎁".into(),
            play_again: "Spela igen".into(),
            print_certificate: "Skriv ut certifikat".into(),
            print_unavailable: "Utskrift är bara tillgänglig i webbläsaren.".into(),
        }
    }
}

/// Pantalla activa. Nunca se guarda: se deriva del estado de la sesión.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Question,
    Reward,
}

/// Sustituye los marcadores `{clave}` de una plantilla de texto.
pub fn fill_template(template: &str, values: &[(&str, usize)]) -> String {
    values.iter().fold(template.to_owned(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), &value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_letters_start_at_a() {
        assert_eq!(Question::option_letter(0), 'A');
        assert_eq!(Question::option_letter(3), 'D');
    }

    #[test]
    fn fill_template_replaces_every_placeholder() {
        let text = fill_template("Du fick {score} av {total} rätt!", &[("score", 5), ("total", 6)]);
        assert_eq!(text, "Du fick 5 av 6 rätt!");
    }

    #[test]
    fn question_accepts_question_key_as_prompt() {
        let yaml = "id: 1\nquestion: Hur fort?\noptions: [a, b]\ncorrect_answer: 0\n";
        let q: Question = serde_yaml::from_str(yaml).expect("yaml ok");
        assert_eq!(q.prompt, "Hur fort?");
        assert!(q.explanation.is_none());
        assert!(q.image.is_none());
    }
}
