// src/app/sphere.rs
//
// Rendu 3D de la sphère de Bloch au Painter egui (pas de GPU dédié) :
// - caméra orbitale (glisser = rotation, molette = zoom, amortissement)
// - projection perspective 3D -> écran
// - fil de fer, anneaux, axes, étiquettes, flèche d’état
//
// Repère : celui de Bloch (z vers le haut, |0⟩ au pôle nord).

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::config::{Config, ConfigCamera, Theme};
use crate::noyau::bloch::coordonnees;

/// Champ de vision vertical (degrés).
const FOV_DEG: f32 = 45.0;

/// Sensibilité de rotation (radians par point écran).
const VITESSE_ROTATION: f32 = 0.008;

/// Garde-fou : la caméra ne passe jamais exactement par un pôle.
const ELEVATION_MAX: f32 = FRAC_PI_2 - 0.01;

/// Sous ce seuil, l’inertie est considérée éteinte (plus de repaint).
const INERTIE_NEGLIGEABLE: f32 = 1e-4;

type Vec3 = [f32; 3];

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
fn normalize(a: Vec3) -> Vec3 {
    let n = dot(a, a).sqrt();
    if n == 0.0 {
        a
    } else {
        [a[0] / n, a[1] / n, a[2] / n]
    }
}
fn scale(a: Vec3, k: f32) -> Vec3 {
    [a[0] * k, a[1] * k, a[2] * k]
}

/* ------------------------ Caméra orbitale ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub azimut: f32,
    pub elevation: f32,
    pub distance: f32,
    // inertie (appliquée progressivement, comme des contrôles orbitaux amortis)
    delta_azimut: f32,
    delta_elevation: f32,
    distance_min: f32,
    distance_max: f32,
    amortissement: f32,
}

impl Camera {
    pub fn new(cfg: &ConfigCamera) -> Self {
        Self {
            // vue de trois-quarts, légèrement au-dessus de l’équateur
            azimut: FRAC_PI_4,
            elevation: 0.47,
            distance: cfg.distance_initiale,
            delta_azimut: 0.0,
            delta_elevation: 0.0,
            distance_min: cfg.distance_min,
            distance_max: cfg.distance_max,
            amortissement: cfg.amortissement,
        }
    }

    /// Glisser (points écran) : droite => la sphère tourne vers la droite.
    pub fn glisser(&mut self, delta: egui::Vec2) {
        self.delta_azimut -= delta.x * VITESSE_ROTATION;
        self.delta_elevation += delta.y * VITESSE_ROTATION;
    }

    /// Molette : positif = rapprocher. Borné à [min, max].
    pub fn zoomer(&mut self, defilement: f32) {
        let facteur = (-defilement * 0.002).exp();
        self.distance = (self.distance * facteur).clamp(self.distance_min, self.distance_max);
    }

    /// Une image : applique une fraction de l’inertie puis l’amortit.
    pub fn avancer(&mut self) {
        let f = self.amortissement;
        self.azimut += self.delta_azimut * f;
        self.elevation =
            (self.elevation + self.delta_elevation * f).clamp(-ELEVATION_MAX, ELEVATION_MAX);
        self.delta_azimut *= 1.0 - f;
        self.delta_elevation *= 1.0 - f;
    }

    pub fn en_mouvement(&self) -> bool {
        self.delta_azimut.abs() > INERTIE_NEGLIGEABLE
            || self.delta_elevation.abs() > INERTIE_NEGLIGEABLE
    }

    pub fn position(&self) -> Vec3 {
        let (se, ce) = self.elevation.sin_cos();
        let (sa, ca) = self.azimut.sin_cos();
        [
            self.distance * ce * ca,
            self.distance * ce * sa,
            self.distance * se,
        ]
    }
}

/* ------------------------ Projection ------------------------ */

/// Projection perspective figée pour une image.
pub struct Projection {
    oeil: Vec3,
    droite: Vec3,
    haut: Vec3,
    avant: Vec3,
    centre: Pos2,
    focale: f32,
}

impl Projection {
    pub fn new(camera: &Camera, rect: Rect) -> Self {
        let oeil = camera.position();
        let avant = normalize(scale(oeil, -1.0));
        let droite = normalize(cross(avant, [0.0, 0.0, 1.0]));
        let haut = cross(droite, avant);
        let focale = (rect.height().min(rect.width()) * 0.5) / (FOV_DEG.to_radians() * 0.5).tan();
        Self {
            oeil,
            droite,
            haut,
            avant,
            centre: rect.center(),
            focale,
        }
    }

    /// Point 3D -> (écran, profondeur). Profondeur > 0 devant la caméra.
    pub fn projeter(&self, p: Vec3) -> (Pos2, f32) {
        let v = sub(p, self.oeil);
        let z = dot(v, self.avant).max(1e-3);
        let x = dot(v, self.droite);
        let y = dot(v, self.haut);
        (
            egui::pos2(
                self.centre.x + x / z * self.focale,
                self.centre.y - y / z * self.focale,
            ),
            z,
        )
    }

    /// Longueur monde -> points écran, à la profondeur donnée.
    pub fn echelle(&self, longueur: f32, profondeur: f32) -> f32 {
        longueur / profondeur * self.focale
    }

    /// Distance œil-origine (profondeur du centre de la sphère).
    pub fn profondeur_centre(&self) -> f32 {
        dot(self.oeil, self.oeil).sqrt()
    }
}

/* ------------------------ Couleurs ------------------------ */

fn couleur(rgb: u32, opacite: f32) -> Color32 {
    let r = ((rgb >> 16) & 0xff) as u8;
    let g = ((rgb >> 8) & 0xff) as u8;
    let b = (rgb & 0xff) as u8;
    Color32::from_rgba_unmultiplied(r, g, b, (opacite.clamp(0.0, 1.0) * 255.0) as u8)
}

pub fn couleur_fond(cfg: &Config, theme: Theme) -> Color32 {
    couleur(cfg.sphere.fond.pour(theme), 1.0)
}

/// Atténue ce qui est derrière la sphère (profondeur > centre).
fn attenuation(proj: &Projection, z: f32) -> f32 {
    if z > proj.profondeur_centre() {
        0.45
    } else {
        1.0
    }
}

/* ------------------------ Dessin ------------------------ */

/// Polyligne 3D projetée segment par segment (opacité selon profondeur).
fn polyligne(painter: &egui::Painter, proj: &Projection, pts: &[Vec3], largeur: f32, c: Color32) {
    for w in pts.windows(2) {
        let (a, za) = proj.projeter(w[0]);
        let (b, zb) = proj.projeter(w[1]);
        let k = attenuation(proj, 0.5 * (za + zb));
        painter.line_segment([a, b], Stroke::new(largeur, c.gamma_multiply(k)));
    }
}

fn cercle(n: usize, f: impl Fn(f32) -> Vec3) -> Vec<Vec3> {
    (0..=n)
        .map(|i| f(i as f32 / n as f32 * std::f32::consts::TAU))
        .collect()
}

fn dessine_fil(painter: &egui::Painter, proj: &Projection, cfg: &Config, theme: Theme) {
    let c = couleur(
        cfg.sphere.fil.pour(theme),
        cfg.sphere.opacite_fil(theme),
    );

    // parallèles
    for i in 1..12 {
        let lat = -FRAC_PI_2 + i as f32 * std::f32::consts::PI / 12.0;
        let (sl, cl) = lat.sin_cos();
        let pts = cercle(72, |t| [cl * t.cos(), cl * t.sin(), sl]);
        polyligne(painter, proj, &pts, 0.6, c);
    }

    // méridiens
    for i in 0..12 {
        let lon = i as f32 * std::f32::consts::PI / 6.0;
        let (so, co) = lon.sin_cos();
        let pts = cercle(72, |t| [t.sin() * co, t.sin() * so, t.cos()]);
        polyligne(painter, proj, &pts, 0.6, c);
    }
}

fn dessine_anneaux(painter: &egui::Painter, proj: &Projection, cfg: &Config) {
    let c = couleur(cfg.sphere.anneau, cfg.sphere.opacite_anneau * 2.0);
    let equateur = cercle(120, |t| [t.cos(), t.sin(), 0.0]);
    let meridien = cercle(120, |t| [t.cos(), 0.0, t.sin()]);
    polyligne(painter, proj, &equateur, 1.6, c);
    polyligne(painter, proj, &meridien, 1.6, c);
}

fn dessine_axes(painter: &egui::Painter, proj: &Projection, cfg: &Config, theme: Theme) {
    let e = &cfg.etiquettes;
    let axes = [
        ([1.3, 0.0, 0.0], e.x.pour(theme)),
        ([0.0, 1.3, 0.0], e.y.pour(theme)),
        ([0.0, 0.0, 1.3], e.z.pour(theme)),
    ];
    for (bout, rgb) in axes {
        polyligne(painter, proj, &[[0.0, 0.0, 0.0], bout], 1.2, couleur(rgb, 0.6));
    }
}

fn dessine_etiquettes(painter: &egui::Painter, proj: &Projection, cfg: &Config, theme: Theme) {
    let e = &cfg.etiquettes;
    let etiquettes = [
        ("|0⟩", [0.0, 0.0, 1.25], e.z.pour(theme)),
        ("|1⟩", [0.0, 0.0, -1.25], e.z.pour(theme)),
        ("|+⟩", [1.25, 0.0, 0.0], e.x.pour(theme)),
        ("|i⟩", [0.0, 1.25, 0.0], e.y.pour(theme)),
    ];
    for (texte, p, rgb) in etiquettes {
        let (pos, z) = proj.projeter(p);
        let taille = proj.echelle(0.16, z).clamp(10.0, 28.0);
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            texte,
            FontId::proportional(taille),
            couleur(rgb, 1.0),
        );
    }
}

fn dessine_fleche(painter: &egui::Painter, proj: &Projection, cfg: &Config, theta: f64, phi: f64) {
    let f = &cfg.fleche;
    let c = coordonnees(theta, phi);
    let dir: Vec3 = normalize([c.x as f32, c.y as f32, c.z as f32]);
    let couleur_fleche = couleur(f.couleur, 1.0);

    let origine = proj.projeter([0.0, 0.0, 0.0]).0;
    let (base, zb) = proj.projeter(scale(dir, f.longueur - f.longueur_tete));
    let (pointe, zp) = proj.projeter(scale(dir, f.longueur));

    // tige
    let largeur_tige = proj.echelle(2.0 * f.rayon_tige, zb).max(1.5);
    painter.line_segment([origine, base], Stroke::new(largeur_tige, couleur_fleche));

    // tête (cône vu de profil : triangle perpendiculaire à la tige à l’écran)
    let axe = pointe - base;
    let perp = if axe.length() > 1e-3 {
        egui::vec2(-axe.y, axe.x).normalized()
    } else {
        egui::vec2(1.0, 0.0)
    };
    let demi = proj.echelle(f.largeur_tete, zb);
    painter.add(egui::Shape::convex_polygon(
        vec![base + perp * demi, pointe, base - perp * demi],
        couleur_fleche,
        Stroke::NONE,
    ));

    // bille au bout
    painter.circle_filled(pointe, proj.echelle(0.06, zp).max(2.0), couleur_fleche);
}

/// Dessine la scène complète dans `rect`.
pub fn dessine_scene(
    painter: &egui::Painter,
    rect: Rect,
    camera: &Camera,
    cfg: &Config,
    theme: Theme,
    theta: f64,
    phi: f64,
) {
    painter.rect_filled(rect, 0.0, couleur_fond(cfg, theme));

    let proj = Projection::new(camera, rect);
    dessine_fil(painter, &proj, cfg, theme);
    dessine_anneaux(painter, &proj, cfg);
    dessine_axes(painter, &proj, cfg, theme);
    dessine_fleche(painter, &proj, cfg, theta, phi);
    dessine_etiquettes(painter, &proj, cfg, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(&Config::default().camera)
    }

    fn rect() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 300.0))
    }

    #[test]
    fn origine_au_centre_de_l_ecran() {
        let proj = Projection::new(&camera(), rect());
        let (p, z) = proj.projeter([0.0, 0.0, 0.0]);
        assert!((p.x - 200.0).abs() < 1e-3 && (p.y - 150.0).abs() < 1e-3);
        assert!((z - Config::default().camera.distance_initiale).abs() < 1e-4);
    }

    #[test]
    fn pole_nord_au_dessus_du_centre() {
        let proj = Projection::new(&camera(), rect());
        let (p, _) = proj.projeter([0.0, 0.0, 1.0]);
        assert!(p.y < 150.0);
    }

    #[test]
    fn zoom_borne() {
        let mut c = camera();
        c.zoomer(1e6);
        assert_eq!(c.distance, 2.0);
        c.zoomer(-1e6);
        assert_eq!(c.distance, 8.0);
    }

    #[test]
    fn inertie_amortie_puis_eteinte() {
        let mut c = camera();
        let az0 = c.azimut;
        c.glisser(egui::vec2(50.0, 0.0));
        assert!(c.en_mouvement());
        for _ in 0..400 {
            c.avancer();
        }
        assert!(!c.en_mouvement());
        assert!(c.azimut < az0);
    }

    #[test]
    fn elevation_bornee() {
        let mut c = camera();
        c.glisser(egui::vec2(0.0, 1e6));
        for _ in 0..50 {
            c.avancer();
        }
        assert!(c.elevation <= ELEVATION_MAX);
    }
}
