// src/noyau/puissance_mod.rs

/// (base^exposant) mod module, par exponentiation binaire.
///
/// - O(log exposant) multiplications (carré-et-multiplie)
/// - produits intermédiaires en u128 : pas de débordement avant réduction
/// - exposant = 0 => 1 % module
///
/// Précondition : module > 0. Un module nul est une faute de l’appelant
/// (panique), jamais une erreur récupérable.
pub fn puissance_mod(base: u64, exposant: u64, module: u64) -> u64 {
    assert!(module > 0, "puissance_mod : module nul");

    let m = module as u128;
    let mut acc: u128 = 1 % m;
    let mut b = (base as u128) % m;
    let mut e = exposant;

    while e > 0 {
        if (e & 1) == 1 {
            acc = (acc * b) % m;
        }
        b = (b * b) % m;
        e >>= 1;
    }

    // acc < m <= u64::MAX
    acc as u64
}

#[cfg(test)]
mod tests {
    use super::puissance_mod;

    #[test]
    fn petits_cas_connus() {
        assert_eq!(puissance_mod(2, 8, 10), 6);
        assert_eq!(puissance_mod(5, 2, 25), 0);
        assert_eq!(puissance_mod(3, 4, 7), 4); // 81 = 11*7 + 4
        assert_eq!(puissance_mod(16, 3, 9), 1); // 4096 = 455*9 + 1
    }

    #[test]
    fn exposant_nul() {
        assert_eq!(puissance_mod(16, 0, 1), 0);
        assert_eq!(puissance_mod(16, 0, 2), 1);
        assert_eq!(puissance_mod(0, 0, 7), 1);
    }

    #[test]
    fn module_un() {
        assert_eq!(puissance_mod(123, 456, 1), 0);
    }

    #[test]
    fn base_plus_grande_que_module() {
        assert_eq!(puissance_mod(100, 1, 7), 2);
    }

    #[test]
    fn pas_de_debordement_pres_de_u64_max() {
        // (m-1)^2 ≡ 1 (mod m) : le carré déborderait en u64.
        let m = u64::MAX;
        assert_eq!(puissance_mod(m - 1, 2, m), 1);
        assert_eq!(puissance_mod(m - 1, 3, m), m - 1);
    }

    #[test]
    #[should_panic(expected = "module nul")]
    fn module_nul_panique() {
        let _ = puissance_mod(16, 3, 0);
    }
}
