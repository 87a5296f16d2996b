//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la calculatrice du noyau + les réglages de la façade,
//! et offrir une entrée unique (`appuyer`) pour boutons et clavier.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice::appuyer`.
//! - La vue ne lit que `affichage()` / `memoire_presente()`.

use calculatrice_bureau::config::Config;
use calculatrice_bureau::{Calculatrice, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- paramètres ---
    pub clavier_actif: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        Self {
            calc: Calculatrice::new(),
            clavier_actif: config.clavier.actif,
        }
    }

    /// Point d’entrée unique des boutons et du clavier.
    pub fn appuyer(&mut self, touche: Touche) {
        self.calc.appuyer(touche);
    }

    pub fn affichage(&self) -> &str {
        self.calc.affichage()
    }

    /// Indicateur "M" : mémoire non vide.
    pub fn memoire_presente(&self) -> bool {
        self.calc.memoire().is_some()
    }

    /// Texte de l’opération en attente ("12 +"), vide sinon.
    pub fn ligne_en_attente(&self) -> String {
        match self.calc.etat().en_attente {
            Some(calcul) if !self.calc.etat().vient_de_calculer => format!(
                "{} {}",
                calculatrice_bureau::noyau::formater_resultat(calcul.operande),
                calcul.operateur.symbole()
            ),
            _ => String::new(),
        }
    }
}
