// src/noyau/bloch.rs
//
// Géométrie de la sphère de Bloch :
// - (θ, φ) -> (x, y, z) sur la sphère unité
// - bornes θ ∈ [0, π], φ ∈ [0, 2π] (politique de l’UI, pas du parseur)
// - états prédéfinis |0⟩ |1⟩ |+⟩ |−⟩ |i⟩ |−i⟩ + détection de l’état "actif"

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Tolérance de reconnaissance d’un état prédéfini (radians).
pub const TOLERANCE_PRESET: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordonnees {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// x = sinθ·cosφ, y = sinθ·sinφ, z = cosθ
pub fn coordonnees(theta: f64, phi: f64) -> Coordonnees {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    Coordonnees {
        x: st * cp,
        y: st * sp,
        z: ct,
    }
}

pub fn borne_theta(theta: f64) -> f64 {
    theta.clamp(0.0, PI)
}

pub fn borne_phi(phi: f64) -> f64 {
    phi.clamp(0.0, TAU)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Zero,
    Un,
    Plus,
    Moins,
    PlusI,
    MoinsI,
}

impl Preset {
    pub const TOUS: [Preset; 6] = [
        Preset::Zero,
        Preset::Un,
        Preset::Plus,
        Preset::Moins,
        Preset::PlusI,
        Preset::MoinsI,
    ];

    /// (θ, φ) de l’état.
    pub fn angles(self) -> (f64, f64) {
        match self {
            Preset::Zero => (0.0, 0.0),
            Preset::Un => (PI, 0.0),
            Preset::Plus => (FRAC_PI_2, 0.0),
            Preset::Moins => (FRAC_PI_2, PI),
            Preset::PlusI => (FRAC_PI_2, FRAC_PI_2),
            Preset::MoinsI => (FRAC_PI_2, 3.0 * FRAC_PI_2),
        }
    }

    pub fn ket(self) -> &'static str {
        match self {
            Preset::Zero => "|0⟩",
            Preset::Un => "|1⟩",
            Preset::Plus => "|+⟩",
            Preset::Moins => "|−⟩",
            Preset::PlusI => "|i⟩",
            Preset::MoinsI => "|−i⟩",
        }
    }
}

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE_PRESET
}

/// État prédéfini correspondant à (θ, φ), s’il y en a un.
///
/// Aux pôles φ n’a pas d’effet ; sur l’équateur φ≈0 et φ≈2π donnent tous deux |+⟩.
pub fn preset_actif(theta: f64, phi: f64) -> Option<Preset> {
    if proche(theta, 0.0) {
        return Some(Preset::Zero);
    }
    if proche(theta, PI) {
        return Some(Preset::Un);
    }
    if !proche(theta, FRAC_PI_2) {
        return None;
    }

    if proche(phi, 0.0) || proche(phi, TAU) {
        Some(Preset::Plus)
    } else if proche(phi, PI) {
        Some(Preset::Moins)
    } else if proche(phi, FRAC_PI_2) {
        Some(Preset::PlusI)
    } else if proche(phi, 3.0 * FRAC_PI_2) {
        Some(Preset::MoinsI)
    } else {
        None
    }
}
