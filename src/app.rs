// src/app.rs
//
// Sphère de Bloch — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs, vue.rs, sphere.rs, rebond.rs)
// - Ré-exporter AppBloch (pour main.rs: use crate::app::AppBloch;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod rebond;
pub mod sphere;
pub mod vue;

// Ré-export pratique : `use crate::app::AppBloch;`
pub use etat::AppBloch;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppBloch {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Horloge + lecture différée : si une lecture attend, on redemande une image à l’échéance.
        let maintenant = ctx.input(|i| i.time);
        if let Some(attente) = self.tic(maintenant) {
            ctx.request_repaint_after(Duration::from_secs_f64(attente));
        }

        // Raccourci global minimal : ESC = fermer la fenêtre d’info.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.echap();
        }

        // Thème egui suivant le thème de la scène
        let sombre = ctx.style().visuals.dark_mode;
        if sombre != self.theme.est_sombre() {
            ctx.set_visuals(if self.theme.est_sombre() {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
        }

        self.ui(ctx);
    }
}
