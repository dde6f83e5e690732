//! Configuration visuelle + temporelle (valeurs par défaut uniquement).
//!
//! Rien n’est lu depuis le disque : aucune persistance entre sessions.
//! Les couleurs sont en RGB (0xRRGGBB) et converties au dessin.

use std::time::Duration;

/// Thème courant (bascule sombre/clair).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

impl Theme {
    pub fn bascule(self) -> Self {
        match self {
            Theme::Sombre => Theme::Clair,
            Theme::Clair => Theme::Sombre,
        }
    }

    pub fn est_sombre(self) -> bool {
        matches!(self, Theme::Sombre)
    }
}

/// Une couleur déclinée par thème.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParTheme {
    pub sombre: u32,
    pub clair: u32,
}

impl ParTheme {
    pub fn pour(&self, theme: Theme) -> u32 {
        match theme {
            Theme::Sombre => self.sombre,
            Theme::Clair => self.clair,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigFleche {
    pub longueur: f32,
    pub longueur_tete: f32,
    pub largeur_tete: f32,
    pub rayon_tige: f32,
    pub couleur: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigSphere {
    pub fil: ParTheme,
    pub opacite_fil_sombre: f32,
    pub opacite_fil_clair: f32,
    pub anneau: u32,
    pub opacite_anneau: f32,
    pub fond: ParTheme,
}

/// Couleurs des étiquettes, alignées sur les axes.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigEtiquettes {
    /// |0⟩, |1⟩ (axe Z)
    pub z: ParTheme,
    /// |+⟩ (axe X)
    pub x: ParTheme,
    /// |i⟩ (axe Y)
    pub y: ParTheme,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigCamera {
    pub distance_initiale: f32,
    pub distance_min: f32,
    pub distance_max: f32,
    /// Facteur d’amortissement par image (0 = figé, 1 = sans inertie).
    pub amortissement: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub fleche: ConfigFleche,
    pub sphere: ConfigSphere,
    pub etiquettes: ConfigEtiquettes,
    pub camera: ConfigCamera,
    /// Délai de rebond avant de régénérer la lecture (LaTeX + coordonnées).
    pub delai_lecture: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fleche: ConfigFleche {
                longueur: 1.05,
                longueur_tete: 0.15,
                largeur_tete: 0.08,
                rayon_tige: 0.025,
                couleur: 0xf0a030,
            },
            sphere: ConfigSphere {
                fil: ParTheme {
                    sombre: 0x3d444d,
                    clair: 0x9ca3af,
                },
                opacite_fil_sombre: 0.4,
                opacite_fil_clair: 0.35,
                anneau: 0x58a6ff,
                opacite_anneau: 0.25,
                fond: ParTheme {
                    sombre: 0x0d1117,
                    clair: 0xf6f8fa,
                },
            },
            etiquettes: ConfigEtiquettes {
                z: ParTheme {
                    sombre: 0x58a6ff,
                    clair: 0x0550ae,
                },
                x: ParTheme {
                    sombre: 0xf85149,
                    clair: 0xcf222e,
                },
                y: ParTheme {
                    sombre: 0x3fb950,
                    clair: 0x1a7f37,
                },
            },
            camera: ConfigCamera {
                distance_initiale: 4.44,
                distance_min: 2.0,
                distance_max: 8.0,
                amortissement: 0.05,
            },
            delai_lecture: Duration::from_millis(50),
        }
    }
}

impl ConfigSphere {
    pub fn opacite_fil(&self, theme: Theme) -> f32 {
        if theme.est_sombre() {
            self.opacite_fil_sombre
        } else {
            self.opacite_fil_clair
        }
    }
}
