//! Calculatrice de bureau — bibliothèque
//!
//! - `noyau`  : la calculatrice (état + opérations + affichage), sans UI
//! - `config` : réglages des façades (fenêtre, clavier, journal)
//!
//! Les façades (egui, ligne de commande) vivent dans le binaire.

pub mod config;
pub mod noyau;

pub use noyau::{Calculatrice, Touche};
