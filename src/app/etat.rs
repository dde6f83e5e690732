//! src/app/etat.rs
//!
//! État UI (sans vue) de la sphère de Bloch.
//!
//! Rôle : contenir (θ, φ), les textes des champs, les drapeaux d’erreur, le thème,
//! la caméra et la lecture différée, et offrir les transitions déclenchées par l’UI.
//!
//! Contrats :
//! - Aucune valeur invalide n’atteint θ/φ : une saisie refusée marque le champ et garde l’ancienne valeur.
//! - θ ∈ [0, π], φ ∈ [0, 2π] après toute transition.
//! - La lecture (LaTeX) est régénérée après un rebond ; la flèche suit immédiatement.

use tracing::{debug, info};

use super::rebond::Rebond;
use super::sphere::Camera;
use crate::config::{Config, Theme};
use crate::noyau::bloch::{borne_phi, borne_theta, preset_actif, Preset};
use crate::noyau::lecture::Lecture;
use crate::noyau::{format_saisie, parse_angle};

/// Quel angle un champ/curseur pilote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Angle {
    Theta,
    Phi,
}

/// Un champ de saisie d’angle : texte tel que tapé + erreur éventuelle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Champ {
    pub texte: String,
    /// Message de refus (info-bulle) ; None = champ valide.
    pub erreur: Option<String>,
}

#[derive(Clone, Debug)]
pub struct AppBloch {
    pub config: Config,

    // --- état quantique (toujours bornés) ---
    pub theta: f64,
    pub phi: f64,

    // --- champs de saisie ---
    pub champ_theta: Champ,
    pub champ_phi: Champ,

    // --- sorties ---
    pub preset: Option<Preset>,
    pub lecture: Lecture,
    rebond: Rebond<(f64, f64)>,

    // --- présentation ---
    pub theme: Theme,
    pub panneau_replie: bool,
    pub info_ouverte: bool,
    pub camera: Camera,

    /// Horloge egui (secondes), avancée par `tic`.
    horloge: f64,
}

impl Default for AppBloch {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppBloch {
    pub fn new(config: Config) -> Self {
        let camera = Camera::new(&config.camera);
        let rebond = Rebond::new(config.delai_lecture);
        let mut app = Self {
            config,
            theta: 0.0,
            phi: 0.0,
            champ_theta: Champ::default(),
            champ_phi: Champ::default(),
            preset: None,
            lecture: Lecture::default(),
            rebond,
            theme: Theme::default(),
            panneau_replie: false,
            info_ouverte: false,
            camera,
            horloge: 0.0,
        };
        // état initial |0⟩, lecture immédiate (pas d’attente au premier affichage)
        app.set_etat(0.0, 0.0);
        app.rebond.annuler();
        app.lecture = Lecture::calcule(0.0, 0.0);
        app
    }

    pub fn champ(&self, a: Angle) -> &Champ {
        match a {
            Angle::Theta => &self.champ_theta,
            Angle::Phi => &self.champ_phi,
        }
    }

    fn champ_mut(&mut self, a: Angle) -> &mut Champ {
        match a {
            Angle::Theta => &mut self.champ_theta,
            Angle::Phi => &mut self.champ_phi,
        }
    }

    /* ------------------------ Horloge + rebond ------------------------ */

    /// Avance l’horloge ; applique la lecture en attente si échue.
    /// Retour : délai (s) jusqu’à la prochaine échéance, pour planifier un repaint.
    pub fn tic(&mut self, maintenant: f64) -> Option<f64> {
        self.horloge = maintenant;
        if let Some((theta, phi)) = self.rebond.prendre_si_echu(maintenant) {
            self.lecture = Lecture::calcule(theta, phi);
        }
        self.rebond.echeance().map(|t| (t - maintenant).max(0.0))
    }

    /* ------------------------ Transitions ------------------------ */

    /// Point d’entrée unique d’un nouveau couple (θ, φ) déjà borné.
    pub fn maj_angles(&mut self, theta: f64, phi: f64) {
        self.theta = theta;
        self.phi = phi;
        self.preset = preset_actif(theta, phi);
        self.rebond.planifier(self.horloge, (theta, phi));
    }

    /// Fixe l’état depuis un bouton : curseurs + deux champs canoniques, erreurs effacées.
    pub fn set_etat(&mut self, theta: f64, phi: f64) {
        let theta = borne_theta(theta);
        let phi = borne_phi(phi);
        self.champ_theta = Champ {
            texte: format_saisie(theta),
            erreur: None,
        };
        self.champ_phi = Champ {
            texte: format_saisie(phi),
            erreur: None,
        };
        self.maj_angles(theta, phi);
    }

    pub fn appliquer_preset(&mut self, p: Preset) {
        info!(preset = p.ket(), "état prédéfini");
        let (theta, phi) = p.angles();
        self.set_etat(theta, phi);
    }

    /// Le curseur a bougé (valeur déjà dans self.theta / self.phi).
    pub fn sur_curseur(&mut self, a: Angle) {
        let (theta, phi) = (borne_theta(self.theta), borne_phi(self.phi));
        let v = match a {
            Angle::Theta => theta,
            Angle::Phi => phi,
        };
        *self.champ_mut(a) = Champ {
            texte: format_saisie(v),
            erreur: None,
        };
        self.maj_angles(theta, phi);
    }

    /// Le texte du champ a changé (ou Entrée) : relit, borne, déplace le curseur.
    /// Le texte reste tel que tapé ; en cas de refus, l’angle courant est conservé.
    pub fn sur_saisie(&mut self, a: Angle) {
        let texte = self.champ(a).texte.clone();
        match parse_angle(&texte) {
            Err(e) => {
                debug!(angle = ?a, texte = %texte, "saisie refusée");
                self.champ_mut(a).erreur = Some(e.to_string());
            }
            Ok(v) => {
                self.champ_mut(a).erreur = None;
                let (theta, phi) = match a {
                    Angle::Theta => (borne_theta(v), self.phi),
                    Angle::Phi => (self.theta, borne_phi(v)),
                };
                self.maj_angles(theta, phi);
            }
        }
    }

    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.bascule();
        info!(theme = ?self.theme, "thème");
    }

    pub fn basculer_panneau(&mut self) {
        self.panneau_replie = !self.panneau_replie;
    }

    /// Échap : ferme la fenêtre d’information si ouverte.
    pub fn echap(&mut self) {
        self.info_ouverte = false;
    }
}
