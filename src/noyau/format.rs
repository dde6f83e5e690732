// src/noyau/format.rs
//
// Affichage canonique d’un angle (radians) :
// - fraction nommée de π si |v - entrée| < 1e-4 (premier trouvé dans la table)
// - sinon décimal arrondi (3 chiffres en saisie, 2 en LaTeX)
//
// Fonctions totales : toute valeur finie donne une chaîne.

use super::fractions::cherche;

/// Tolérance absolue de reconnaissance d’une fraction nommée.
pub const TOLERANCE_FRACTION: f64 = 1e-4;

const DECIMALES_SAISIE: usize = 3;
const DECIMALES_LATEX: usize = 2;

/// Arrondi à `decimales` chiffres, égalités arrondies loin de zéro.
///
/// `format!("{:.N}")` arrondit les égalités exactes au pair (0.125 -> "0.12") ;
/// ici 0.125 -> "0.13", comme une lecture "à la main".
///
/// Égalité exacte <=> |v|·2^(N+1) est un entier impair (multiplication exacte en f64).
pub fn vers_fixe(v: f64, decimales: usize) -> String {
    // -0 s’affiche "0"
    let v = if v == 0.0 { 0.0 } else { v };

    let m = v.abs() * 2f64.powi(decimales as i32 + 1);
    if m.is_finite() && m.fract() == 0.0 && m % 2.0 == 1.0 {
        // |v| < 2^52 ici (un entier impair après un décalage de N+1 bits)
        let cinq = 5u128.pow(decimales as u32);
        let n = ((m as u128) * cinq + 1) / 2;
        let signe = if v < 0.0 { "-" } else { "" };
        if decimales == 0 {
            return format!("{signe}{n}");
        }
        let e = 10u128.pow(decimales as u32);
        return format!("{signe}{}.{:0width$}", n / e, n % e, width = decimales);
    }

    format!("{v:.decimales$}")
}

/// Forme de saisie : "pi/2", "3*pi/4", ... sinon décimal à 3 chiffres.
pub fn format_saisie(v: f64) -> String {
    match cherche(v, TOLERANCE_FRACTION) {
        Some(f) => f.texte.clone(),
        None => vers_fixe(v, DECIMALES_SAISIE),
    }
}

/// Forme LaTeX : "\frac{\pi}{2}", "\pi", ... sinon décimal à 2 chiffres.
pub fn format_latex(v: f64) -> String {
    match cherche(v, TOLERANCE_FRACTION) {
        Some(f) => f.latex.clone(),
        None => vers_fixe(v, DECIMALES_LATEX),
    }
}
