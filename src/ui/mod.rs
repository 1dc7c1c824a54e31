mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // La pantalla se deriva de la sesión en cada frame
        match self.screen() {
            Screen::Landing => views::landing::ui_landing(self, ctx),
            Screen::Question => views::question::ui_question(self, ctx),
            Screen::Reward => views::reward::ui_reward(self, ctx),
        }

        let target = self.particle_target();
        self.particles.set_target(target);
        self.particles.show(ctx);
    }
}
