// src/app.rs
//
// Module App (racine) : état (etat.rs) + vue (vue.rs) + impl eframe::App.
// Enter est géré dans vue.rs, là où le champ a le focus.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée (comme le bouton "C").
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
