//! Noyau numérique
//!
//! Organisation interne :
//! - puissance_mod.rs : (base^exp) mod m, produits u128
//! - bbp.rs           : chiffre hexadécimal n de π (tête exacte + queue flottante)
//! - division.rs      : division longue bornée, arrêt anticipé
//! - lecture.rs       : rationnel -> entier scalé -> texte décimal
//! - pi_decimal.rs    : π décimal (série BBP exacte sur les rationnels)
//! - format.rs        : affichage des chiffres
//! - erreur.rs        : erreurs du noyau

pub mod bbp;
pub mod division;
pub mod erreur;
pub mod format;
pub mod lecture;
pub mod pi_decimal;
pub mod puissance_mod;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use bbp::{chiffre_hex_pi, chiffre_hex_pi_avec_queue, ChiffreHex, QUEUE_BBP, QUEUE_MIN};
pub use division::{division_longue, Developpement};
pub use erreur::ErreurNoyau;
pub use pi_decimal::pi_decimal;
pub use puissance_mod::puissance_mod;
