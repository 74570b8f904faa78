// src/noyau/pi_decimal.rs
//
// π en décimal par la série BBP, sommée exactement sur les rationnels.
// Chaque terme apporte ~1.2 chiffre décimal (16^-k) : `places + 5` termes
// suffisent largement pour `places` décimales.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use tracing::info;

use super::lecture::{rational_scaled_arrondi, scaled_to_decimal};

/// Marge de termes au-delà du nombre de décimales visé.
pub const TERMES_EXTRA: usize = 5;

fn frac(n: u64, d: u64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Somme exacte des `termes` premiers termes de la série BBP.
pub fn pi_bbp_rationnel(termes: usize) -> BigRational {
    let seize = BigRational::from_integer(BigInt::from(16));

    let mut somme = BigRational::zero();
    let mut inv_puissance = BigRational::one(); // 1 / 16^k

    for k in 0..termes as u64 {
        let huit_k = 8 * k;
        let parenthese = frac(4, huit_k + 1) - frac(2, huit_k + 4) - frac(1, huit_k + 5)
            - frac(1, huit_k + 6);

        somme += &inv_puissance * parenthese;
        inv_puissance /= &seize;
    }

    somme
}

/// π avec `places` décimales, arrondi au plus proche (égalité vers le pair).
pub fn pi_decimal(places: usize) -> String {
    let termes = places + TERMES_EXTRA;
    info!(places, termes, "π décimal (BBP exact)");

    let pi = pi_bbp_rationnel(termes);
    scaled_to_decimal(rational_scaled_arrondi(&pi, places), places)
}
