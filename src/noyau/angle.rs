//! Noyau — lecture d’un angle saisi (pipeline réel)
//!
//! trim + minuscules -> jetons (porte de caractères) -> RPN -> valeur f64
//!
//! Aucune évaluation dynamique : seul le shunting-yard de rpn.rs calcule.

use tracing::{debug, trace};

use super::erreur::ErreurExpression;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, format_rpn, to_rpn};

/// API publique : convertit un angle saisi ("3*pi/4", "PI/2", "1.2") en radians.
///
/// - Entrée vide (après trim) => 0
/// - Erreur => valeur `Err`, jamais de panique
/// - Aucune borne ici : le clamp θ/φ est une politique de l’appelant
pub fn parse_angle(entree: &str) -> Result<f64, ErreurExpression> {
    let s = entree.trim().to_lowercase();
    if s.is_empty() {
        return Ok(0.0);
    }

    let res = tokenize(&s).and_then(|jetons| {
        trace!(jetons = %format_tokens(&jetons), "jetons");
        let rpn = to_rpn(&jetons)?;
        trace!(rpn = %format_rpn(&rpn), "rpn");
        eval_rpn(&rpn)
    });

    if let Err(e) = &res {
        debug!(entree = %entree, erreur = %e, "angle refusé");
    }
    res
}

#[cfg(test)]
mod tests {
    use super::parse_angle;
    use crate::noyau::erreur::ErreurExpression;
    use std::f64::consts::PI;

    fn ok(s: &str) -> f64 {
        parse_angle(s).unwrap_or_else(|e| panic!("parse_angle({s:?}) erreur: {e}"))
    }

    fn assert_proche(s: &str, attendu: f64) {
        let v = ok(s);
        assert!((v - attendu).abs() < 1e-9, "expr={s:?} v={v} attendu={attendu}");
    }

    #[test]
    fn vide_vaut_zero() {
        assert_eq!(ok(""), 0.0);
        assert_eq!(ok("   "), 0.0);
    }

    #[test]
    fn pi_et_fractions() {
        assert_proche("pi", PI);
        assert_proche("PI/2", PI / 2.0);
        assert_proche("Pi / 2", PI / 2.0);
        assert_proche("2*pi/3", 2.0 * PI / 3.0);
        assert_proche(" 3 * pi / 4 ", 3.0 * PI / 4.0);
        assert_proche("(pi + pi) / 4", PI / 2.0);
    }

    #[test]
    fn decimaux_et_negatifs() {
        assert_proche("1.5", 1.5);
        assert_proche("-pi/2", -PI / 2.0);
        assert_proche(".5*pi", PI / 2.0);
    }

    #[test]
    fn refus_sans_panique() {
        assert!(parse_angle("pi * ").is_err());
        assert!(parse_angle("pi+").is_err());
        assert!(parse_angle("alert(1)").is_err());
        assert!(parse_angle("Infinity").is_err());
        assert!(parse_angle("pipi").is_err());
        assert!(parse_angle("2 pi").is_err());
        assert!(parse_angle("1;2").is_err());
        assert_eq!(parse_angle("1/0"), Err(ErreurExpression::DivisionParZero));
    }
}
