//! src/app/etat.rs
//!
//! Paramètres et état du pilote BBP (sans affichage).
//!
//! Rôle : boucler sur les indices 0..D-1, demander chaque chiffre au noyau,
//! l’ajouter à la chaîne hexadécimale et signaler la progression.
//!
//! Contrats :
//! - Aucune écriture ici (la vue s’en charge via le rappel de progression).
//! - Chiffres en ajout seul : un chiffre par itération.
//! - Paramètres validés avant tout calcul.

use tracing::info;

use crate::noyau::format::chiffres_hex_texte;
use crate::noyau::{bbp, ChiffreHex, ErreurNoyau};

/// Nombre de chiffres hexadécimaux par défaut (~100 chiffres décimaux).
pub const CHIFFRES_HEX_DEFAUT: usize = 85;

/// Progression signalée tous les N chiffres (et au dernier).
pub const PAS_PROGRESSION_DEFAUT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parametres {
    pub chiffres_hex: usize,
    pub queue: usize,
    pub pas_progression: usize,
}

impl Default for Parametres {
    fn default() -> Self {
        Self {
            chiffres_hex: CHIFFRES_HEX_DEFAUT,
            queue: bbp::QUEUE_BBP,
            pas_progression: PAS_PROGRESSION_DEFAUT,
        }
    }
}

impl Parametres {
    pub fn valider(&self) -> Result<(), ErreurNoyau> {
        if self.chiffres_hex == 0 {
            return Err(ErreurNoyau::AucunChiffre);
        }
        if self.pas_progression == 0 {
            return Err(ErreurNoyau::PasProgressionNul);
        }
        bbp::verifier_queue(self.queue)
    }
}

/// Chiffres hexadécimaux en construction (ajout seul).
#[derive(Clone, Debug, Default)]
pub struct Assemblage {
    chiffres: Vec<ChiffreHex>,
}

impl Assemblage {
    pub fn chiffres(&self) -> &[ChiffreHex] {
        &self.chiffres
    }

    /// Partie fractionnaire en texte ('0'–'9', 'A'–'F').
    pub fn fraction(&self) -> String {
        chiffres_hex_texte(&self.chiffres)
    }

    fn ajouter(&mut self, c: ChiffreHex) {
        self.chiffres.push(c);
    }
}

/// Calcule les `chiffres_hex` premiers chiffres de π (base 16).
///
/// `progression(i)` est appelé avec le nombre de chiffres déjà calculés,
/// tous les `pas_progression` chiffres et une fois à la fin.
pub fn assembler<F>(params: &Parametres, mut progression: F) -> Result<Assemblage, ErreurNoyau>
where
    F: FnMut(usize),
{
    params.valider()?;
    info!(
        chiffres = params.chiffres_hex,
        queue = params.queue,
        "calcul BBP démarré"
    );

    let mut a = Assemblage::default();
    let total = params.chiffres_hex;

    for i in 0..total {
        let c = bbp::chiffre_hex_pi_avec_queue(i as u64, params.queue)?;
        a.ajouter(c);

        let faits = i + 1;
        if faits % params.pas_progression == 0 || faits == total {
            progression(faits);
        }
    }

    info!(chiffres = a.chiffres().len(), "calcul BBP terminé");
    Ok(a)
}
