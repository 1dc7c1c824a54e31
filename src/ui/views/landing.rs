use crate::QuizApp;
use crate::reward::STAR_COUNT;
use crate::ui::helpers::{big_button, star_row};
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_landing(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(&app.quiz.title).size(30.0).strong());
            ui.add_space(10.0);
            ui.label(RichText::new(&app.quiz.description).size(18.0));
            ui.add_space(18.0);

            star_row(ui, STAR_COUNT);
            ui.label(app.landing_count_line());
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.8).clamp(160.0, 360.0);
            if big_button(ui, &app.quiz.screens.landing.begin, btn_w, 48.0) {
                app.start_quiz();
            }
        });
    });
}
