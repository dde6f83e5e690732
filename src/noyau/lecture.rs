// src/noyau/lecture.rs
//
// Lecture (panneau de résultats) : vecteur d’état + coordonnées, en LaTeX.
//   cos(θ/2)|0⟩ + e^{iφ} sin(θ/2)|1⟩

use super::bloch::{coordonnees, Coordonnees};
use super::format::{format_latex, vers_fixe};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lecture {
    pub etat: String,
    pub coordonnees: String,
}

impl Lecture {
    pub fn calcule(theta: f64, phi: f64) -> Self {
        Self {
            etat: latex_etat(theta, phi),
            coordonnees: latex_coordonnees(&coordonnees(theta, phi)),
        }
    }
}

pub fn latex_etat(theta: f64, phi: f64) -> String {
    let demi = format_latex(theta / 2.0);
    let phi = format_latex(phi);
    format!(
        "\\cos\\left({demi}\\right)\\ket{{0}} + e^{{i \\cdot {phi}}}\\sin\\left({demi}\\right)\\ket{{1}}"
    )
}

pub fn latex_coordonnees(c: &Coordonnees) -> String {
    format!(
        "({},\\, {},\\, {})",
        vers_fixe(c.x, 2),
        vers_fixe(c.y, 2),
        vers_fixe(c.z, 2)
    )
}
