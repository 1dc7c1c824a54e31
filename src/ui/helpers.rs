// src/ui/helpers.rs
use crate::reward::STAR_COUNT;
use crate::view_models::{OptionRow, OptionState};
use egui::{Button, Color32, RichText, Ui, Vec2};

const SELECTED_FILL: Color32 = Color32::from_rgb(0xE9, 0xD5, 0xFF);
const CORRECT_FILL: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);
const WRONG_FILL: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(RichText::new(label).size(18.0)).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón de opción coloreado según su estado. Devuelve `true` si se pulsó.
pub fn option_button(ui: &mut Ui, row: &OptionRow, width: f32) -> bool {
    let colors = match row.state {
        OptionState::Idle => None,
        OptionState::Selected => Some((SELECTED_FILL, Color32::from_rgb(0x6B, 0x21, 0xA8))),
        OptionState::Correct => Some((CORRECT_FILL, Color32::WHITE)),
        OptionState::Wrong => Some((WRONG_FILL, Color32::WHITE)),
    };

    let mut text = RichText::new(row.label()).size(16.0);
    if let Some((_, color)) = colors {
        text = text.color(color);
    }
    let mut button = Button::new(text).min_size(Vec2::new(width, 44.0));
    if let Some((fill, _)) = colors {
        button = button.fill(fill);
    }

    ui.add_enabled(row.enabled, button).clicked()
}

/// Fila de estrellas; las `filled` primeras van en dorado.
pub fn star_row(ui: &mut Ui, filled: usize) {
    ui.horizontal(|ui| {
        // centrar la fila
        let star_w = 32.0;
        ui.add_space(((ui.available_width() - star_w * STAR_COUNT as f32) / 2.0).max(0.0));
        for i in 0..STAR_COUNT {
            let color = if i < filled { Color32::GOLD } else { Color32::GRAY };
            ui.label(RichText::new("★").size(28.0).color(color));
        }
    });
}

pub fn tinted_note(ui: &mut Ui, text: &str, ok: bool) {
    let (fill, stroke) = if ok {
        (Color32::from_rgb(0xF0, 0xFD, 0xF4), Color32::from_rgb(0x4A, 0xDE, 0x80))
    } else {
        (Color32::from_rgb(0xFE, 0xF2, 0xF2), Color32::from_rgb(0xF8, 0x71, 0x71))
    };
    egui::Frame::group(ui.style())
        .fill(fill)
        .stroke(egui::Stroke::new(1.5, stroke))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(Color32::from_gray(40)));
        });
}
