// src/app/vue.rs
//
// Vue texte : bannière, progression, résultats.
// Tout passe par un `io::Write` (stdout en vrai, Vec<u8> en test).

use std::io::{self, Write};

use crate::noyau::format::{format_developpement, format_fraction_hex, format_pi_hex};
use crate::noyau::Developpement;

/* ------------------------ π hexadécimal ------------------------ */

pub fn banniere_hex<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Calculating hexadecimal digits of Pi using BBP algorithm..."
    )
}

pub fn progression_hex<W: Write>(out: &mut W, faits: usize) -> io::Result<()> {
    writeln!(out, "Calculated {faits} hex digits.")
}

pub fn resultat_hex<W: Write>(out: &mut W, fraction: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Pi (hexadecimal, fractional part): {}",
        format_fraction_hex(fraction)
    )?;
    writeln!(out, "{}", format_pi_hex(fraction))
}

/* ------------------------ Division longue ------------------------ */

pub fn resultat_division<W: Write>(out: &mut W, d: &Developpement) -> io::Result<()> {
    writeln!(out, "{}", format_developpement(d))
}

/* ------------------------ π décimal ------------------------ */

pub fn resultat_pi_decimal<W: Write>(out: &mut W, places: usize, pi: &str) -> io::Result<()> {
    writeln!(
        out,
        "Calculating Pi with the BBP series over exact rationals."
    )?;
    writeln!(out, "Target decimal places: {places}")?;
    writeln!(out)?;
    writeln!(out, "Pi ({places} decimal places):")?;
    writeln!(out, "{pi}")
}
