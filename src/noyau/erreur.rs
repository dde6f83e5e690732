// src/noyau/erreur.rs
//
// Une seule sorte d’erreur côté noyau : expression invalide.
// Les variantes ne servent qu’au diagnostic (journal / info-bulle) ;
// l’UI les traite toutes pareil (champ marqué en erreur, valeur précédente conservée).

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurExpression {
    #[error("caractère interdit: '{0}'")]
    CaractereInterdit(char),

    #[error("mot interdit: '{0}' (seul pi est accepté)")]
    MotInterdit(String),

    #[error("syntaxe: {0}")]
    Syntaxe(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    NonFini,
}

impl ErreurExpression {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurExpression::Syntaxe(msg.into())
    }
}
