// src/noyau/bbp.rs
//
// Extraction directe d’un chiffre hexadécimal de π (Bailey–Borwein–Plouffe)
// -------------------------------------------------------------------------
// π = Σ 16^-k ( 4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6) )
//
// Pour le chiffre n (0 = premier après la virgule) :
// - tête exacte  (k <= n)  : [16^(n-k) mod (8k+j)] / (8k+j)
// - queue flottante (k > n) : 16^(n-k) / (8k+j), sur QUEUE_BBP termes
// - x = 4·S1 - 2·S4 - S5 - S6, chiffre = floor(16 · frac(x))

use std::fmt;

use tracing::{debug, warn};

use super::erreur::ErreurNoyau;
use super::puissance_mod::puissance_mod;

/// Longueur de queue par défaut : 16^-20 ≈ 8·10^-25, soit ~24 chiffres
/// décimaux de marge pour un seul chiffre hexadécimal.
pub const QUEUE_BBP: usize = 20;

/// Queue minimale acceptée : 16^-14 ≈ 1.4·10^-17, déjà sous l’epsilon f64.
pub const QUEUE_MIN: usize = 14;

/// Décalages j des quatre sous-séries, avec leur coefficient.
const SERIES: [(u64, f64); 4] = [(1, 4.0), (4, -2.0), (5, -1.0), (6, -1.0)];

/* ------------------------ Chiffre hexadécimal ------------------------ */

/// Un chiffre de base 16, toujours dans [0, 15].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChiffreHex(u8);

impl ChiffreHex {
    pub fn valeur(self) -> u8 {
        self.0
    }

    /// '0'–'9' puis 'A'–'F'.
    pub fn caractere(self) -> char {
        let v = self.0;
        if v < 10 {
            char::from(b'0' + v)
        } else {
            char::from(b'A' + (v - 10))
        }
    }
}

impl fmt::Display for ChiffreHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.caractere())
    }
}

/* ------------------------ Sous-série S_j(n) ------------------------ */

/// frac(S_j(n)), ramenée dans [0, 1).
///
/// On réduit modulo 1 au fil de la tête : les coefficients de combinaison
/// sont entiers, donc le chiffre final est inchangé et l’accumulateur ne
/// perd pas de bits de poids faible en grossissant.
fn serie(n: u64, j: u64, queue: usize) -> f64 {
    let mut somme = 0.0_f64;

    // tête exacte : k = 0..=n
    for k in 0..=n {
        let denom = 8 * k + j;
        let num_mod = puissance_mod(16, n - k, denom);
        debug_assert!(num_mod < denom);
        somme += num_mod as f64 / denom as f64;
        somme -= somme.floor();
    }

    // queue flottante : k = n+1..=n+queue
    for t in 1..=queue as u64 {
        let k = n + t;
        let exposant = -(t as f64);
        somme += 16.0_f64.powf(exposant) / (8 * k + j) as f64;
    }

    somme - somme.floor()
}

/* ------------------------ Extraction ------------------------ */

/// Chiffre n (0-indexé) de la partie fractionnaire de π, queue par défaut.
pub fn chiffre_hex_pi(n: u64) -> ChiffreHex {
    extraire(n, QUEUE_BBP)
}

/// Même calcul avec une queue explicite (>= QUEUE_MIN).
pub fn chiffre_hex_pi_avec_queue(n: u64, queue: usize) -> Result<ChiffreHex, ErreurNoyau> {
    verifier_queue(queue)?;
    Ok(extraire(n, queue))
}

pub fn verifier_queue(queue: usize) -> Result<(), ErreurNoyau> {
    if queue < QUEUE_MIN {
        return Err(ErreurNoyau::QueueTropCourte {
            queue,
            minimum: QUEUE_MIN,
        });
    }
    Ok(())
}

fn extraire(n: u64, queue: usize) -> ChiffreHex {
    let x: f64 = SERIES
        .iter()
        .map(|&(j, coeff)| coeff * serie(n, j, queue))
        .sum();

    let chiffre = chiffre_depuis_somme(x);
    debug!(n, chiffre = %chiffre, "chiffre hexadécimal extrait");
    chiffre
}

/// x combiné -> floor(16 · frac(x)), frac ramenée dans [0, 1) puis
/// chiffre borné à [0, 15].
///
/// Près d’une frontière de chiffre, l’arrondi flottant peut donner
/// frac = 1.0 (x juste sous un entier) : le chiffre brut vaut alors 16.
fn chiffre_depuis_somme(x: f64) -> ChiffreHex {
    let mut frac = x - x.floor();
    if frac < 0.0 {
        frac += 1.0;
    }

    let brut = (frac * 16.0).floor() as i64;
    let borne = brut.clamp(0, 15);
    if borne != brut {
        // frontière d’imprécision connue : on borne, on ne bloque pas
        warn!(x, brut, "chiffre BBP hors [0, 15], borné");
    }

    ChiffreHex(borne as u8)
}
