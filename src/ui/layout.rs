use crate::QuizApp;
use crate::model::Screen;
use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new(&app.quiz.title).strong());

            // Solo durante las preguntas: la pantalla de premio ya tiene "Spela igen"
            if app.screen() == Screen::Question {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(app.quiz.screens.question.restart.as_str()).clicked() {
                        app.play_again();
                    }
                });
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙").on_hover_text("Mörkt tema").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀").on_hover_text("Ljust tema").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
