use crate::QuizApp;
use crate::ui::helpers::{big_button, option_button, tinted_note};
use crate::ui::layout::centered_panel;
use egui::{Context, ProgressBar, RichText};

pub fn ui_question(app: &mut QuizApp, ctx: &Context) {
    // Fuera de una pregunta no hay nada que pintar aquí
    let Some(view) = app.question_view() else {
        return;
    };

    centered_panel(ctx, 560.0, 640.0, |ui| {
        let panel_width = ui.available_width();

        ui.label(RichText::new(&view.header).weak());
        ui.add(ProgressBar::new(view.progress).show_percentage());
        ui.add_space(12.0);

        ui.label(RichText::new(&view.prompt).size(20.0).strong());

        if let Some(image) = &view.image {
            ui.add_space(6.0);
            ui.hyperlink_to(app.quiz.screens.question.image_link.as_str(), image);
        }

        ui.add_space(12.0);
        for row in &view.options {
            if option_button(ui, row, panel_width) {
                app.choose_option(row.index);
            }
            ui.add_space(4.0);
        }

        if let Some((text, correcta)) = &view.explanation {
            ui.add_space(8.0);
            tinted_note(ui, text, *correcta);
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if view.can_submit && big_button(ui, &app.quiz.screens.question.submit, panel_width, 44.0) {
                app.submit();
            }
            if view.can_advance && big_button(ui, &app.quiz.screens.question.next, panel_width, 44.0) {
                app.next();
            }
        });
    });
}
