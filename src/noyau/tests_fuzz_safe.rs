//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le parseur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, et tout Ok(v) est fini

use std::time::{Duration, Instant};

use super::format::{format_latex, format_saisie};
use super::parse_angle;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn f64_dans(&mut self, min: f64, max: f64) -> f64 {
        let t = self.next_u32() as f64 / u32::MAX as f64;
        min + t * (max - min)
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Morceaux plausibles (et moins plausibles) d’une saisie d’angle.
const MORCEAUX: &[&str] = &[
    "pi", "PI", "2", "3", "0", ".5", "1.25", "+", "-", "*", "/", "**", "(", ")", " ", "pipi",
    "x", ";", "e", "π", "//", "--",
];

fn gen_saisie(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(10);
    let mut s = String::new();
    for _ in 0..n {
        s.push_str(MORCEAUX[rng.pick(MORCEAUX.len() as u32) as usize]);
    }
    s
}

/// Expression toujours valide : k*pi/d (d ≠ 0).
fn gen_fraction_valide(rng: &mut Rng) -> (String, f64) {
    let k = rng.pick(13) as i64 - 6;
    let d = 1 + rng.pick(12) as i64;
    let s = format!("{k}*pi/{d}");
    (s, k as f64 * std::f64::consts::PI / d as f64)
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_jamais_de_panique_et_ok_fini() {
    let start = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(0xB10C_5EED);

    for _ in 0..20_000 {
        budget(start, max);
        let s = gen_saisie(&mut rng);
        if let Ok(v) = parse_angle(&s) {
            assert!(v.is_finite(), "s={s:?} v={v}");
        }
    }
}

#[test]
fn fuzz_fractions_valides() {
    let start = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(42);

    for _ in 0..5_000 {
        budget(start, max);
        let (s, attendu) = gen_fraction_valide(&mut rng);
        let v = parse_angle(&s).unwrap_or_else(|e| panic!("s={s:?} err={e}"));
        assert!((v - attendu).abs() < 1e-12, "s={s:?} v={v} attendu={attendu}");
    }
}

#[test]
fn fuzz_format_total_et_deterministe() {
    let start = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(7);

    for _ in 0..10_000 {
        budget(start, max);
        let v = rng.f64_dans(-20.0, 20.0);
        let a = format_saisie(v);
        let b = format_latex(v);
        assert!(!a.is_empty() && !b.is_empty());
        assert_eq!(a, format_saisie(v));
        assert_eq!(b, format_latex(v));
    }
}

#[test]
fn fuzz_longueur_bornee_pas_de_debordement() {
    // parenthèses profondes : la pile est un Vec, pas la récursion
    let profond = format!("{}pi{}", "(".repeat(5_000), ")".repeat(5_000));
    assert!(parse_angle(&profond).is_ok());

    let long = vec!["1"; 5_000].join("+");
    assert_eq!(parse_angle(&long), Ok(5_000.0));
}
