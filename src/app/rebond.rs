//! src/app/rebond.rs
//!
//! Rebond (debounce) "dernier gagnant" : une seule action en attente.
//! Planifier remplace l’attente précédente et repousse l’échéance.
//!
//! Le temps est fourni par l’appelant (secondes, horloge egui) : aucun minuteur interne.

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Rebond<T> {
    delai: f64,
    en_attente: Option<(f64, T)>,
}

impl<T> Rebond<T> {
    pub fn new(delai: Duration) -> Self {
        Self {
            delai: delai.as_secs_f64(),
            en_attente: None,
        }
    }

    /// Remplace toute valeur en attente ; échéance = maintenant + délai.
    pub fn planifier(&mut self, maintenant: f64, valeur: T) {
        self.en_attente = Some((maintenant + self.delai, valeur));
    }

    pub fn annuler(&mut self) {
        self.en_attente = None;
    }

    pub fn echeance(&self) -> Option<f64> {
        self.en_attente.as_ref().map(|(t, _)| *t)
    }

    /// Rend la valeur si l’échéance est atteinte (une seule fois).
    pub fn prendre_si_echu(&mut self, maintenant: f64) -> Option<T> {
        match self.echeance() {
            Some(t) if maintenant >= t => self.en_attente.take().map(|(_, v)| v),
            _ => None,
        }
    }
}
