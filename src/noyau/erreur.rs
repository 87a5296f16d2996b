// src/noyau/erreur.rs

use thiserror::Error;

/// Seul type d’erreur du noyau : une opération arithmétique impossible.
///
/// Jamais remontée à l’appelant : la calculatrice la convertit en
/// affichage "Error" et reste utilisable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("inverse de zéro")]
    InverseDeZero,

    #[error("racine carrée d’un nombre négatif")]
    RacineNegative,
}
