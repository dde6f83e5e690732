//! Propriétés : aller-retour saisie <-> texte canonique, totalité, déterminisme.
//!
//! - Pour toute entrée e de la table : parse(format_saisie(e)) ≈ e (1e-4)
//! - parse ∘ format ∘ parse = parse sur les formes canoniques
//! - format_saisie / format_latex : totales + stables d’un appel à l’autre

use std::f64::consts::PI;

use super::format::{format_latex, format_saisie, TOLERANCE_FRACTION};
use super::fractions::table;
use super::parse_angle;

fn ok(s: &str) -> f64 {
    parse_angle(s).unwrap_or_else(|e| panic!("parse_angle({s:?}) erreur: {e}"))
}

#[test]
fn aller_retour_table() {
    for f in table() {
        let texte = format_saisie(f.valeur);
        assert_eq!(texte, f.texte);
        let v = ok(&texte);
        assert!(
            (v - f.valeur).abs() < TOLERANCE_FRACTION,
            "texte={texte:?} v={v} attendu={}",
            f.valeur
        );
    }
}

#[test]
fn idempotence_parse_format_parse() {
    for f in table() {
        let v1 = ok(&f.texte);
        let v2 = ok(&format_saisie(v1));
        assert_eq!(v1, v2, "texte={:?}", f.texte);
    }
}

#[test]
fn latex_de_la_table_jamais_decimal() {
    for f in table() {
        // bords de la tolérance, des deux côtés
        for delta in [0.0, 9e-5, -9e-5] {
            assert_eq!(format_latex(f.valeur + delta), f.latex);
            assert_eq!(format_saisie(f.valeur + delta), f.texte);
        }
    }
}

#[test]
fn cas_documentes() {
    assert_eq!(ok(""), 0.0);
    assert!((ok("pi") - PI).abs() < 1e-9);
    assert!((ok("PI/2") - PI / 2.0).abs() < 1e-9);
    assert!((ok("2*pi/3") - 2.0 * PI / 3.0).abs() < 1e-9);

    for s in ["alert(1)", "pi+", "1/0", "Infinity"] {
        assert!(parse_angle(s).is_err(), "{s:?} devrait être refusé");
    }

    assert_eq!(format_saisie(PI / 2.0), "pi/2");
    assert_eq!(format_saisie(0.12345), "0.123");
    assert_eq!(format_latex(PI), "\\pi");
    assert_eq!(format_latex(1.23456), "1.23");
}

#[test]
fn deterministe_sur_une_grille() {
    let mut x = -10.0;
    while x < 10.0 {
        assert_eq!(format_saisie(x), format_saisie(x));
        assert_eq!(format_latex(x), format_latex(x));
        assert!(!format_saisie(x).is_empty());
        x += 0.0137;
    }
}

#[test]
fn decimal_relu_a_un_millieme_pres() {
    // hors table : la forme décimale se relit à 5e-4 près
    for v in [0.1, 1.0, 2.2, 4.444, 6.0] {
        let s = format_saisie(v);
        assert!((ok(&s) - v).abs() <= 5e-4, "v={v} s={s:?}");
    }
}
