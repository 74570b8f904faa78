// src/noyau/format.rs

use super::bbp::ChiffreHex;
use super::division::Developpement;

/* ------------------------ Hexadécimal ------------------------ */

/// Suite de chiffres -> texte ('0'–'9', 'A'–'F').
pub fn chiffres_hex_texte(chiffres: &[ChiffreHex]) -> String {
    chiffres.iter().map(|c| c.caractere()).collect()
}

/// "0.<fraction>" : partie fractionnaire seule.
pub fn format_fraction_hex(fraction: &str) -> String {
    format!("0.{fraction}")
}

/// "3.<fraction>" : π complet en base 16.
pub fn format_pi_hex(fraction: &str) -> String {
    format!("3.{fraction}")
}

/* ------------------------ Division longue ------------------------ */

/// "entier.chiffres" ; sans point si aucun chiffre après la virgule.
///
/// Chiffres au-delà de 9 en minuscules (char::from_digit).
pub fn format_developpement(d: &Developpement) -> String {
    let mut s = d.partie_entiere.to_str_radix(d.base);
    if d.chiffres.is_empty() {
        return s;
    }

    s.push('.');
    for &c in &d.chiffres {
        // chaque chiffre < base par construction (division_longue)
        debug_assert!(c < d.base, "chiffre {c} hors base {}", d.base);
        if let Some(ch) = char::from_digit(c, d.base) {
            s.push(ch);
        }
    }
    s
}
