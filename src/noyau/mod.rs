//! Noyau de la calculatrice de bureau
//!
//! Organisation interne :
//! - operation.rs    : opérateurs binaires + opérations unaires (enums fermés)
//! - erreur.rs       : ErreurCalcul (division par zéro, 1/0, √ négatif)
//! - format.rs       : affichage des résultats (arrondi, exponentielle, "Error")
//! - calculatrice.rs : machine à états (saisie, chaînage, "= = =", %, mémoire)
//! - touches.rs      : disposition des boutons + aiguillage touche -> opération

pub mod calculatrice;
pub mod erreur;
pub mod format;
pub mod operation;
pub mod touches;


#[cfg(test)]
mod tests_touches;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::{Calculatrice, EtatCalculatrice};
pub use erreur::ErreurCalcul;
pub use format::formater_resultat;
pub use operation::{OperationUnaire, Operateur};
pub use touches::{
    sequence_de_touches, ActionMemoire, Bouton, ErreurTouche, StyleBouton, Touche, DISPOSITION,
};
