// src/noyau/operation.rs
//
// Opérations fermées : binaires (en attente d’un second opérande)
// et unaires (effet immédiat sur l’affichage).

use super::erreur::ErreurCalcul;

/// Opérateur binaire. Seuls ceux-ci peuvent être "en attente".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    /// Applique `base (op) operande` en flottant standard.
    pub fn appliquer(self, base: f64, operande: f64) -> Result<f64, ErreurCalcul> {
        match self {
            Operateur::Addition => Ok(base + operande),
            Operateur::Soustraction => Ok(base - operande),
            Operateur::Multiplication => Ok(base * operande),
            Operateur::Division if operande == 0.0 => Err(ErreurCalcul::DivisionParZero),
            Operateur::Division => Ok(base / operande),
        }
    }

    /// + et - : le pourcentage se calcule "sur la base".
    pub fn est_additif(self) -> bool {
        matches!(self, Operateur::Addition | Operateur::Soustraction)
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "*",
            Operateur::Division => "/",
        }
    }
}

/// Opération unaire (√, 1/x, ±, %).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationUnaire {
    RacineCarree,
    Inverse,
    ChangementSigne,
    Pourcentage,
}

impl OperationUnaire {
    pub const TOUTES: [OperationUnaire; 4] = [
        OperationUnaire::RacineCarree,
        OperationUnaire::Inverse,
        OperationUnaire::ChangementSigne,
        OperationUnaire::Pourcentage,
    ];

    /// Forme "sans contexte" : le pourcentage contextuel (avec opérateur
    /// en attente) est traité par la calculatrice.
    pub fn appliquer(self, valeur: f64) -> Result<f64, ErreurCalcul> {
        match self {
            OperationUnaire::RacineCarree if valeur < 0.0 => Err(ErreurCalcul::RacineNegative),
            OperationUnaire::RacineCarree => Ok(valeur.sqrt()),
            OperationUnaire::Inverse if valeur == 0.0 => Err(ErreurCalcul::InverseDeZero),
            OperationUnaire::Inverse => Ok(1.0 / valeur),
            OperationUnaire::ChangementSigne => Ok(-valeur),
            OperationUnaire::Pourcentage => Ok(valeur / 100.0),
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            OperationUnaire::RacineCarree => "√",
            OperationUnaire::Inverse => "1/x",
            OperationUnaire::ChangementSigne => "±",
            OperationUnaire::Pourcentage => "%",
        }
    }
}
