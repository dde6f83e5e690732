//! Noyau pur (sans UI)
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation + porte de caractères
//! - rpn.rs       : shunting-yard + évaluation f64
//! - angle.rs     : pipeline complet (saisie -> radians)
//! - fractions.rs : table des 17 fractions nommées de π
//! - format.rs    : affichage canonique (saisie / LaTeX)
//! - bloch.rs     : coordonnées, bornes, états prédéfinis
//! - lecture.rs   : vecteur d’état + coordonnées en LaTeX
//! - erreur.rs    : ErreurExpression

pub mod angle;
pub mod bloch;
pub mod erreur;
pub mod format;
pub mod fractions;
pub mod jetons;
pub mod lecture;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use angle::parse_angle;
pub use erreur::ErreurExpression;
pub use format::{format_latex, format_saisie};
