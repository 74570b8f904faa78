// src/noyau/lecture.rs

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Signed;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

pub(crate) fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let frac = format!("{:0>digits$}", frac_part.to_str_radix(10));
    format!("{signe}{int_part}.{frac}")
}

/* ------------------------ Rationnel -> entier scalé ------------------------ */

/// floor(r × 10^digits) : oracle de troncature des tests.
#[cfg(test)]
pub fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let num = r.numer() * pow10(digits);
    num.div_floor(r.denom())
}

/// r × 10^digits arrondi au plus proche, égalité vers le pair.
pub fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let num = r.numer() * pow10(digits);
    let den = r.denom();

    let (q, reste) = num.div_mod_floor(den);
    // 0 <= reste < den (den > 0 pour un BigRational normalisé)
    let double: BigInt = &reste * 2u32;

    match double.cmp(den) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => {
            if q.is_even() {
                q
            } else {
                q + 1
            }
        }
    }
}
