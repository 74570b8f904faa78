// src/noyau/division.rs
//
// Division longue “à la main” : reste × base, chiffre = reste / dénominateur.
// Arrêt anticipé dès que le reste tombe à zéro (développement fini).

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurNoyau;

/// Développement numerateur/denominateur dans une base donnée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Developpement {
    pub base: u32,
    pub partie_entiere: BigUint,
    /// Chiffres après la virgule, chacun < base.
    pub chiffres: Vec<u32>,
    /// true si le reste est tombé à zéro (développement exact).
    pub fini: bool,
}

/// Division longue bornée à `max_chiffres` chiffres après la virgule.
/// Base entre 2 et 36.
///
/// Le reste est un BigUint : reste × base ne déborde jamais, quel que
/// soit le dénominateur.
pub fn division_longue(
    numerateur: u64,
    denominateur: u64,
    base: u32,
    max_chiffres: usize,
) -> Result<Developpement, ErreurNoyau> {
    if denominateur == 0 {
        return Err(ErreurNoyau::DenominateurNul);
    }
    if !(2..=36).contains(&base) {
        return Err(ErreurNoyau::BaseInvalide(base));
    }

    let den = BigUint::from(denominateur);
    let num = BigUint::from(numerateur);

    let partie_entiere = &num / &den;
    let mut reste = &num % &den;

    let mut chiffres = Vec::with_capacity(max_chiffres.min(1024));
    let mut fini = reste.is_zero();

    while !fini && chiffres.len() < max_chiffres {
        reste *= base;
        let q = &reste / &den;
        reste %= &den;

        // q < base par construction (reste < den avant × base)
        chiffres.push(q.to_u32().unwrap_or(base - 1));

        if reste.is_zero() {
            fini = true;
        }
    }

    Ok(Developpement {
        base,
        partie_entiere,
        chiffres,
        fini,
    })
}
