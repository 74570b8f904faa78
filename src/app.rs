// src/app.rs
//
// Programmes (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Fournir un point d’entrée par programme, écrit sur un `io::Write`
//   (main.rs et src/bin/* passent stdout)
// - Installer le journal (stderr) pour les binaires

pub mod etat;
pub mod vue;

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::noyau::{division_longue, pi_decimal, ErreurNoyau};

pub use etat::{assembler, Assemblage, Parametres};

/// 1/11, 100 chiffres décimaux.
pub const DIVISION_NUMERATEUR: u64 = 1;
pub const DIVISION_DENOMINATEUR: u64 = 11;
pub const DIVISION_CHIFFRES: usize = 100;

/// π décimal : 100 décimales.
pub const PI_DECIMALES: usize = 100;

/// Journal sur stderr, filtré par RUST_LOG (défaut : warn).
/// stdout reste réservé à la sortie du programme.
pub fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // déjà installé (tests, appel double) : on garde le premier
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Programme π hexadécimal : bannière, progression, résultat.
pub fn executer_pi_hex<W: Write>(out: &mut W, params: &Parametres) -> Result<(), ErreurNoyau> {
    vue::banniere_hex(out)?;

    // La progression écrit pendant le calcul ; la première erreur d’écriture
    // est conservée puis remontée.
    let mut erreur_sortie = None;
    let a = assembler(params, |faits| {
        if erreur_sortie.is_none() {
            if let Err(e) = vue::progression_hex(&mut *out, faits) {
                erreur_sortie = Some(e);
            }
        }
    })?;
    if let Some(e) = erreur_sortie {
        return Err(e.into());
    }

    vue::resultat_hex(out, &a.fraction())?;
    Ok(())
}

/// Programme division longue 1/11.
pub fn executer_division<W: Write>(out: &mut W) -> Result<(), ErreurNoyau> {
    let d = division_longue(
        DIVISION_NUMERATEUR,
        DIVISION_DENOMINATEUR,
        10,
        DIVISION_CHIFFRES,
    )?;
    info!(chiffres = d.chiffres.len(), fini = d.fini, "division longue");
    vue::resultat_division(out, &d)?;
    Ok(())
}

/// Programme π décimal.
pub fn executer_pi_decimal<W: Write>(out: &mut W) -> Result<(), ErreurNoyau> {
    let pi = pi_decimal(PI_DECIMALES);
    vue::resultat_pi_decimal(out, PI_DECIMALES, &pi)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sortie(f: impl FnOnce(&mut Vec<u8>) -> Result<(), ErreurNoyau>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn pi_hex_complet() {
        let s = sortie(|o| executer_pi_hex(o, &Parametres::default()));
        let lignes: Vec<&str> = s.lines().collect();

        assert_eq!(
            lignes[0],
            "Calculating hexadecimal digits of Pi using BBP algorithm..."
        );
        assert_eq!(lignes[1], "Calculated 10 hex digits.");
        assert_eq!(lignes[9], "Calculated 85 hex digits.");
        assert_eq!(lignes[10], "");
        assert!(lignes[11].starts_with("Pi (hexadecimal, fractional part): 0.243F6A"));
        assert!(lignes[12].starts_with("3.243F6A"));
        assert_eq!(lignes[12].len(), 2 + 85);
        assert_eq!(lignes.len(), 13);
    }

    #[test]
    fn pi_hex_parametres_invalides() {
        let mut buf: Vec<u8> = Vec::new();
        let p = Parametres {
            chiffres_hex: 0,
            ..Parametres::default()
        };
        assert!(executer_pi_hex(&mut buf, &p).is_err());
    }

    #[test]
    fn division_un_onzieme() {
        let s = sortie(|o| executer_division(o));
        assert_eq!(s, format!("0.{}\n", "09".repeat(50)));
    }

    #[test]
    fn pi_decimal_cent() {
        let s = sortie(|o| executer_pi_decimal(o));
        assert!(s.contains("Target decimal places: 100"));
        let derniere = s.lines().last().unwrap();
        assert!(derniere.starts_with("3.14159265358979323846"));
        assert_eq!(derniere.len(), 102);
    }

    #[test]
    fn journal_installable_deux_fois() {
        installer_journal();
        installer_journal();
    }
}
