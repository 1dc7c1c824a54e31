use crate::QuizApp;
use crate::ui::helpers::{big_button, star_row, tinted_note};
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_reward(app: &mut QuizApp, ctx: &Context) {
    let view = app.reward_view();

    centered_panel(ctx, 480.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            let texts = app.quiz.screens.reward.clone();

            ui.heading(RichText::new(&texts.title).size(30.0).strong());
            ui.label(RichText::new(&texts.subtitle).size(18.0));
            ui.add_space(16.0);

            ui.label(RichText::new(&view.result).size(22.0).strong());
            star_row(ui, view.filled_stars);
            ui.add_space(16.0);

            let btn_w = (ui.available_width() * 0.8).clamp(160.0, 400.0);
            if view.eligible {
                if big_button(ui, &texts.claim_button, btn_w, 48.0) {
                    app.claim_reward(ctx);
                }
                ui.label(RichText::new(&texts.claim_description).weak());
                ui.add_space(8.0);
                ui.label(&app.quiz.reward.message);
            } else {
                ui.label(RichText::new(&texts.almost_there_title).strong().color(Color32::ORANGE));
                tinted_note(ui, &texts.almost_there_description, false);
            }

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                let half = (btn_w - 8.0) / 2.0;
                ui.add_space(((ui.available_width() - btn_w) / 2.0).max(0.0));
                if big_button(ui, &texts.play_again, half, 40.0) {
                    app.play_again();
                }
                if big_button(ui, &texts.print_certificate, half, 40.0) {
                    app.print_certificate();
                }
            });

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
