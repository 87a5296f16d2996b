//! src/config.rs
//!
//! Réglages des façades (jamais du noyau) : taille de fenêtre, clavier, journal.
//!
//! Ordre de recherche :
//! 1) `--config CHEMIN` (doit exister)
//! 2) `<config_dir>/calculatrice-bureau/config.toml` (facultatif)
//! 3) valeurs par défaut
//!
//! Tous les champs sont facultatifs dans le fichier.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DOSSIER_CONFIG: &str = "calculatrice-bureau";
const FICHIER_CONFIG: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ErreurConfig {
    #[error("lecture de {chemin:?} impossible : {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config TOML invalide : {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fenetre: ConfigFenetre,
    pub clavier: ConfigClavier,
    pub journal: ConfigJournal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for ConfigFenetre {
    fn default() -> Self {
        Self {
            largeur: 360.0,
            hauteur: 520.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigClavier {
    /// Touches du clavier physique actives dans la fenêtre.
    pub actif: bool,
}

impl Default for ConfigClavier {
    fn default() -> Self {
        Self { actif: true }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigJournal {
    /// Directive `tracing` (ex. "warn", "calculatrice_bureau=debug").
    pub niveau: String,
}

impl Default for ConfigJournal {
    fn default() -> Self {
        Self {
            niveau: "warn".to_string(),
        }
    }
}

impl Config {
    /// Chemin par défaut (None si le système n’a pas de dossier de config, ex. wasm).
    pub fn chemin_par_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER_CONFIG).join(FICHIER_CONFIG))
    }

    /// Chemin explicite : doit exister. Sinon fichier par défaut s’il existe.
    pub fn charger(chemin: Option<&Path>) -> Result<Self, ErreurConfig> {
        match chemin {
            Some(p) => Self::depuis_fichier(p),
            None => match Self::chemin_par_defaut() {
                Some(p) if p.is_file() => Self::depuis_fichier(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(texte)?)
    }
}
