//! Chiffres de constantes : π en hexadécimal (BBP), division longue, π décimal.
//!
//! - noyau : calcul pur (puissance modulaire, BBP, division, lecture décimale)
//! - app   : pilotes des programmes + vue texte

pub mod app;
pub mod noyau;
