// src/noyau/fractions.rs
//
// Table des fractions nommées de π (17 entrées, ordre fixe).
// Chaque entrée est un coefficient exact k/d (Rational64) : valeur = k·π/d.
// Les formes canoniques (texte de saisie + LaTeX) sont dérivées du coefficient,
// une seule fois, au premier accès.

use std::f64::consts::PI;
use std::sync::OnceLock;

use num_rational::Rational64;
use num_traits::{One, ToPrimitive, Zero};

/// (k, d) pour k·π/d, dans l’ordre de balayage (premier trouvé gagne).
const COEFFS: [(i64, i64); 17] = [
    (0, 1),
    (1, 6),
    (1, 4),
    (1, 3),
    (1, 2),
    (2, 3),
    (3, 4),
    (5, 6),
    (1, 1),
    (7, 6),
    (5, 4),
    (4, 3),
    (3, 2),
    (5, 3),
    (7, 4),
    (11, 6),
    (2, 1),
];

#[derive(Clone, Debug, PartialEq)]
pub struct FractionNommee {
    pub coeff: Rational64,
    pub valeur: f64,
    pub texte: String,
    pub latex: String,
}

impl FractionNommee {
    fn depuis_coeff(coeff: Rational64) -> Self {
        let valeur = coeff.to_f64().unwrap_or(0.0) * PI;
        Self {
            coeff,
            valeur,
            texte: texte_coeff_pi(&coeff),
            latex: latex_coeff_pi(&coeff),
        }
    }
}

/// coeff*π en texte de saisie (relisible par le parseur) : 0, pi, 2*pi, pi/2, 3*pi/4
pub fn texte_coeff_pi(coeff: &Rational64) -> String {
    let n = *coeff.numer();
    let d = *coeff.denom();

    if coeff.is_zero() {
        return "0".to_string();
    }

    let tete = match n {
        1 => "pi".to_string(),
        -1 => "-pi".to_string(),
        _ => format!("{n}*pi"),
    };

    if d.is_one() {
        tete
    } else {
        format!("{tete}/{d}")
    }
}

/// coeff*π en LaTeX : 0, \pi, 2\pi, \frac{\pi}{2}, \frac{3\pi}{4}
pub fn latex_coeff_pi(coeff: &Rational64) -> String {
    let n = *coeff.numer();
    let d = *coeff.denom();

    if coeff.is_zero() {
        return "0".to_string();
    }

    let signe = if n < 0 { "-" } else { "" };
    let k = n.abs();
    let num = if k == 1 {
        "\\pi".to_string()
    } else {
        format!("{k}\\pi")
    };

    if d.is_one() {
        format!("{signe}{num}")
    } else {
        format!("{signe}\\frac{{{num}}}{{{d}}}")
    }
}

static TABLE: OnceLock<Vec<FractionNommee>> = OnceLock::new();

/// Table complète, construite une fois par processus.
pub fn table() -> &'static [FractionNommee] {
    TABLE.get_or_init(|| {
        COEFFS
            .iter()
            .map(|&(k, d)| FractionNommee::depuis_coeff(Rational64::new(k, d)))
            .collect()
    })
}

/// Premier élément de la table à moins de `tolerance` de `v` (ordre fixe).
pub fn cherche(v: f64, tolerance: f64) -> Option<&'static FractionNommee> {
    table().iter().find(|f| (v - f.valeur).abs() < tolerance)
}
