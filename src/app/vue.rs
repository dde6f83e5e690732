// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Barre du haut : titre, thème, info, repli du panneau
// - Panneau latéral : curseurs θ/φ, champs de saisie, états prédéfinis, lecture
// - Centre : la sphère (glisser = rotation, molette = zoom)
//
// Note :
// - Les champs sont relus à chaque frappe ; Entrée relit aussi puis rend le focus.
// - Pas de rendu LaTeX natif : la lecture montre la source LaTeX en monospace.

use std::f64::consts::{PI, TAU};

use eframe::egui;

use super::etat::{Angle, AppBloch};
use super::sphere::{couleur_fond, dessine_scene};
use crate::noyau::bloch::Preset;

const LARGEUR_PANNEAU: f32 = 320.0;

impl AppBloch {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.ui_barre(ctx);

        if !self.panneau_replie {
            egui::SidePanel::right("panneau_controles")
                .resizable(false)
                .exact_width(LARGEUR_PANNEAU)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
                            self.ui_angles(ui);
                            ui.add_space(8.0);
                            ui.separator();
                            self.ui_presets(ui);
                            ui.add_space(8.0);
                            ui.separator();
                            self.ui_lecture(ui);
                        });
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(couleur_fond(&self.config, self.theme)))
            .show(ctx, |ui| self.ui_sphere(ui));

        self.ui_info(ctx);
    }

    fn ui_barre(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("barre").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Sphère de Bloch");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let repli = if self.panneau_replie { "◀" } else { "▶" };
                    if ui.button(repli).on_hover_text("Replier / déplier le panneau").clicked() {
                        self.basculer_panneau();
                    }
                    if ui.button("ℹ").on_hover_text("À propos").clicked() {
                        self.info_ouverte = true;
                    }
                    let theme = if self.theme.est_sombre() { "☀" } else { "🌙" };
                    if ui.button(theme).on_hover_text("Thème clair / sombre").clicked() {
                        self.basculer_theme();
                    }
                });
            });
        });
    }

    fn ui_angles(&mut self, ui: &mut egui::Ui) {
        ui.label("Angles (radians, ex: pi/2, 3*pi/4, 1.2) :");
        self.ui_angle(ui, Angle::Theta, "θ", PI);
        self.ui_angle(ui, Angle::Phi, "φ", TAU);
    }

    fn ui_angle(&mut self, ui: &mut egui::Ui, a: Angle, nom: &str, max: f64) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(format!("{nom} :"));

            // curseur
            let valeur = match a {
                Angle::Theta => &mut self.theta,
                Angle::Phi => &mut self.phi,
            };
            let resp = ui.add(
                egui::Slider::new(valeur, 0.0..=max)
                    .show_value(false)
                    .step_by(0.01),
            );
            if resp.changed() {
                self.sur_curseur(a);
            }

            // saisie
            let erreur = self.champ(a).erreur.clone();
            let couleur = erreur.as_ref().map(|_| ui.visuals().error_fg_color);
            let champ = match a {
                Angle::Theta => &mut self.champ_theta.texte,
                Angle::Phi => &mut self.champ_phi.texte,
            };
            let mut edit = egui::TextEdit::singleline(champ)
                .desired_width(ui.available_width())
                .id_salt(nom)
                .code_editor();
            if let Some(c) = couleur {
                edit = edit.text_color(c);
            }
            let mut resp = ui.add(edit);
            if let Some(msg) = erreur {
                resp = resp.on_hover_text(msg);
            }

            if resp.changed() {
                self.sur_saisie(a);
            }
            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.sur_saisie(a);
                resp.surrender_focus();
            }
        });
    }

    fn ui_presets(&mut self, ui: &mut egui::Ui) {
        ui.label("États :");
        ui.horizontal_wrapped(|ui| {
            for p in Preset::TOUS {
                let actif = self.preset == Some(p);
                let resp = ui.add_sized(
                    [44.0, 30.0],
                    egui::Button::new(p.ket()).selected(actif),
                );
                if resp.clicked() {
                    self.appliquer_preset(p);
                }
            }
        });
    }

    fn ui_lecture(&mut self, ui: &mut egui::Ui) {
        ui.label("État :");
        Self::champ_monospace(ui, "lecture_etat", &self.lecture.etat);
        ui.add_space(6.0);
        ui.label("Coordonnées (x, y, z) :");
        Self::champ_monospace(ui, "lecture_coords", &self.lecture.coordonnees);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule, cadre visuel + monospace sélectionnable
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.add(egui::Label::new(egui::RichText::new(contenu).monospace()).wrap());
                });
            });
    }

    fn ui_sphere(&mut self, ui: &mut egui::Ui) {
        let taille = ui.available_size();
        let (resp, painter) = ui.allocate_painter(taille, egui::Sense::drag());

        if resp.dragged() {
            self.camera.glisser(resp.drag_delta());
        }
        if resp.hovered() {
            let defilement = ui.input(|i| i.smooth_scroll_delta.y);
            if defilement != 0.0 {
                self.camera.zoomer(defilement);
            }
        }
        self.camera.avancer();
        if self.camera.en_mouvement() {
            ui.ctx().request_repaint();
        }

        dessine_scene(
            &painter,
            resp.rect,
            &self.camera,
            &self.config,
            self.theme,
            self.theta,
            self.phi,
        );
    }

    fn ui_info(&mut self, ctx: &egui::Context) {
        let mut ouverte = self.info_ouverte;
        egui::Window::new("Sphère de Bloch")
            .open(&mut ouverte)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Un état pur d’un qubit s’écrit");
                ui.monospace("|ψ⟩ = cos(θ/2)|0⟩ + e^{iφ} sin(θ/2)|1⟩");
                ui.label("avec θ ∈ [0, π] (angle polaire) et φ ∈ [0, 2π] (azimut).");
                ui.add_space(6.0);
                ui.label("Saisie : nombres, + - * / **, parenthèses et pi.");
                ui.label("Sphère : glisser pour tourner, molette pour zoomer.");
                ui.label("Échap ferme cette fenêtre.");
            });
        self.info_ouverte = ouverte;
    }
}
