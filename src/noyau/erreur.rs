// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Le calcul BBP lui-même n’a pas d’erreur récupérable : seules les
/// entrées des autres programmes (division longue) et les paramètres
/// du pilote peuvent être refusés.
#[derive(Error, Debug)]
pub enum ErreurNoyau {
    #[error("division par zéro (dénominateur nul)")]
    DenominateurNul,

    #[error("base invalide : {0} (de 2 à 36)")]
    BaseInvalide(u32),

    #[error("queue BBP trop courte : {queue} termes (minimum {minimum})")]
    QueueTropCourte { queue: usize, minimum: usize },

    #[error("aucun chiffre demandé")]
    AucunChiffre,

    #[error("pas de progression nul")]
    PasProgressionNul,

    #[error("écriture de la sortie impossible : {0}")]
    Sortie(#[from] std::io::Error),
}
