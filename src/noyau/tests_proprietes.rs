//! Tests de propriétés (campagne) : puissance modulaire, extraction BBP,
//! division longue.
//!
//! - oracle exact : num-bigint (BigUint::modpow, BigRational)
//! - bornes : exposant <= 10^6, module <= 10^9
//! - extraction BBP : indices bornés (coût O(n log n) par chiffre)

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use proptest::prelude::*;

use super::bbp::chiffre_hex_pi;
use super::division::division_longue;
use super::lecture::rational_scaled;
use super::puissance_mod::puissance_mod;

proptest! {
    #[test]
    fn prop_puissance_mod_oracle_bigint(
        base in 0u64..u64::MAX,
        exposant in 0u64..=1_000_000,
        module in 1u64..=1_000_000_000,
    ) {
        let attendu = BigUint::from(base).modpow(&BigUint::from(exposant), &BigUint::from(module));
        prop_assert_eq!(BigUint::from(puissance_mod(base, exposant, module)), attendu);
    }

    #[test]
    fn prop_puissance_mod_grands_modules(
        base in any::<u64>(),
        exposant in any::<u64>(),
        module in 1u64..=u64::MAX,
    ) {
        let attendu = BigUint::from(base).modpow(&BigUint::from(exposant), &BigUint::from(module));
        prop_assert_eq!(BigUint::from(puissance_mod(base, exposant, module)), attendu);
    }

    #[test]
    fn prop_exposant_nul(base in any::<u64>(), module in 1u64..=u64::MAX) {
        prop_assert_eq!(puissance_mod(base, 0, module), 1 % module);
    }

    #[test]
    fn prop_resultat_sous_module(
        base in any::<u64>(),
        exposant in 0u64..=10_000,
        module in 1u64..=u64::MAX,
    ) {
        prop_assert!(puissance_mod(base, exposant, module) < module);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_chiffre_bbp_idempotent(n in 0u64..200) {
        let a = chiffre_hex_pi(n);
        let b = chiffre_hex_pi(n);
        prop_assert_eq!(a, b);
        prop_assert!(a.valeur() < 16);
    }

    #[test]
    fn prop_division_longue_vs_rationnel(
        num in 0u64..10_000,
        den in 1u64..10_000,
        cap in 0usize..60,
    ) {
        let d = division_longue(num, den, 10, cap).unwrap();
        prop_assert!(d.chiffres.len() <= cap);
        prop_assert!(d.chiffres.iter().all(|&c| c < 10));

        // Les chiffres émis = floor(num/den × 10^len) (troncature exacte).
        let r = BigRational::new(BigInt::from(num), BigInt::from(den));
        let attendu = rational_scaled(&r, d.chiffres.len());
        let mut obtenu = BigInt::from(d.partie_entiere.clone());
        for &c in &d.chiffres {
            obtenu = obtenu * 10 + c;
        }
        prop_assert_eq!(&obtenu, &attendu);

        // Arrêt anticipé seulement si le développement est réellement fini.
        if d.fini {
            let echelle = BigInt::from(10).pow(d.chiffres.len() as u32);
            let scaled = BigRational::new(attendu, echelle);
            prop_assert_eq!(scaled, r);
        }
    }
}
