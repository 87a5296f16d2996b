//! Calculatrice de bureau : machine à états à quatre opérations.
//!
//! Contrats :
//! - Évaluation immédiate de gauche à droite (pas de priorité : 5 + 3 * 2 = 16).
//! - Une erreur arithmétique ne remonte jamais : l’affichage devient "Error"
//!   et la calculatrice reste utilisable.
//! - La mémoire survit à `clear_all`, seul `memoire_effacer` la vide.
//! - Tant que l’affichage est "Error", opérateurs, `=`, unaires, M+ et M-
//!   sont sans effet ; chiffres, virgule, C, CE, MR et MC fonctionnent.

use tracing::{debug, warn};

use super::erreur::ErreurCalcul;
use super::format::{formater_resultat, lire_nombre, AFFICHAGE_ERREUR};
use super::operation::{OperationUnaire, Operateur};

/// Opérateur choisi + opérande de gauche capturé au même moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculEnAttente {
    pub operateur: Operateur,
    pub operande: f64,
}

/// Dernier calcul binaire terminé (rejoué par "= = =").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DernierCalcul {
    pub operateur: Operateur,
    pub operande: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalculatrice {
    /// Jamais vide : "0", un nombre, "Error" ou une exponentielle.
    pub affichage: String,
    /// None = mémoire vide (rappelée comme "0").
    pub memoire: Option<f64>,
    pub en_attente: Option<CalculEnAttente>,
    /// Le prochain chiffre commence un nouveau nombre.
    pub attente_nouvelle_saisie: bool,
    pub dernier_calcul: Option<DernierCalcul>,
    /// Vrai juste après un "=" réussi.
    pub vient_de_calculer: bool,
}

impl Default for EtatCalculatrice {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            memoire: None,
            en_attente: None,
            attente_nouvelle_saisie: false,
            dernier_calcul: None,
            vient_de_calculer: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    etat: EtatCalculatrice,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.etat.affichage
    }

    /// Mémoire formatée comme un résultat ; None si vide.
    pub fn memoire(&self) -> Option<String> {
        self.etat.memoire.map(formater_resultat)
    }

    pub fn etat(&self) -> &EtatCalculatrice {
        &self.etat
    }

    fn valeur_affichee(&self) -> f64 {
        lire_nombre(&self.etat.affichage)
    }

    fn en_erreur(&self) -> bool {
        self.etat.affichage == AFFICHAGE_ERREUR
    }

    fn afficher(&mut self, resultat: Result<f64, ErreurCalcul>) -> bool {
        match resultat {
            Ok(valeur) => {
                self.etat.affichage = formater_resultat(valeur);
                true
            }
            Err(e) => {
                debug!(erreur = %e, "opération impossible");
                self.etat.affichage = AFFICHAGE_ERREUR.to_string();
                false
            }
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre (0..=9) au nombre en cours.
    pub fn ajouter_chiffre(&mut self, chiffre: u8) {
        if chiffre > 9 {
            warn!(chiffre, "chiffre hors de 0..=9 ignoré");
            return;
        }

        if self.etat.attente_nouvelle_saisie || self.etat.affichage == "0" || self.en_erreur() {
            self.etat.affichage.clear();
            self.etat.attente_nouvelle_saisie = false;
        }

        self.etat.vient_de_calculer = false;
        self.etat.affichage.push(char::from(b'0' + chiffre));
    }

    /// Point décimal : ignoré si le nombre en contient déjà un.
    pub fn ajouter_virgule(&mut self) {
        if self.etat.attente_nouvelle_saisie {
            self.etat.affichage = "0".to_string();
            self.etat.attente_nouvelle_saisie = false;
        }

        if self.etat.affichage.is_empty() || self.en_erreur() {
            self.etat.affichage = "0".to_string();
        }

        if !self.etat.affichage.contains('.') {
            self.etat.affichage.push('.');
        }
    }

    /* ------------------------ Opérateurs binaires ------------------------ */

    /// Choisit l’opérateur binaire suivant.
    ///
    /// - Opérande déjà tapé après l’opérateur précédent : on calcule d’abord
    ///   (chaînage gauche à droite) et le résultat devient la nouvelle base.
    /// - Juste après "=" : le calcul en attente est encore valide, il est
    ///   relancé avec le résultat affiché comme opérande (5 + 3 = * -> 13).
    /// - Aucun chiffre tapé depuis l’opérateur précédent : simple remplacement.
    pub fn choisir_operateur(&mut self, operateur: Operateur) {
        if self.en_erreur() {
            debug!(operateur = operateur.symbole(), "opérateur ignoré (affichage en erreur)");
            return;
        }

        self.etat.vient_de_calculer = false;

        let en_attente = self.etat.en_attente;
        let base = match en_attente {
            Some(_) if !self.etat.attente_nouvelle_saisie => {
                if !self.executer() {
                    return;
                }
                self.etat.vient_de_calculer = false;
                self.valeur_affichee()
            }
            Some(calcul) => calcul.operande,
            None => self.valeur_affichee(),
        };

        self.etat.en_attente = Some(CalculEnAttente { operateur, operande: base });
        self.etat.attente_nouvelle_saisie = true;
    }

    /// "=" : termine le calcul en attente, ou rejoue le dernier (= = =).
    pub fn calculer(&mut self) {
        if self.en_erreur() {
            debug!("= ignoré (affichage en erreur)");
            return;
        }
        self.executer();
    }

    /// Cœur de "=" ; false si rien n’a été calculé ou si le calcul a échoué.
    fn executer(&mut self) -> bool {
        let Some(en_attente) = self.etat.en_attente else {
            return false;
        };

        let affichee = self.valeur_affichee();
        let dernier_calcul = self.etat.dernier_calcul;
        let (base, operateur, operande) = match dernier_calcul {
            Some(dernier) if self.etat.vient_de_calculer => {
                // Répétition : même opérateur, même opérande, nouvelle base.
                self.etat.en_attente = Some(CalculEnAttente {
                    operateur: en_attente.operateur,
                    operande: affichee,
                });
                (affichee, dernier.operateur, dernier.operande)
            }
            _ => {
                self.etat.dernier_calcul = Some(DernierCalcul {
                    operateur: en_attente.operateur,
                    operande: affichee,
                });
                (en_attente.operande, en_attente.operateur, affichee)
            }
        };

        if !self.afficher(operateur.appliquer(base, operande)) {
            return false;
        }

        self.etat.vient_de_calculer = true;
        self.etat.attente_nouvelle_saisie = false;
        true
    }

    /* ------------------------ Opérations unaires ------------------------ */

    pub fn appliquer_unaire(&mut self, operation: OperationUnaire) {
        match operation {
            OperationUnaire::RacineCarree => self.racine_carree(),
            OperationUnaire::Inverse => self.inverse(),
            OperationUnaire::ChangementSigne => self.changer_signe(),
            OperationUnaire::Pourcentage => self.pourcentage(),
        }
    }

    pub fn racine_carree(&mut self) {
        self.unaire_immediate(OperationUnaire::RacineCarree);
    }

    pub fn inverse(&mut self) {
        self.unaire_immediate(OperationUnaire::Inverse);
    }

    /// ± : "0" reste "0" (jamais "-0").
    pub fn changer_signe(&mut self) {
        self.unaire_immediate(OperationUnaire::ChangementSigne);
    }

    /// % contextuel :
    /// - avec + ou - en attente : pourcentage de la base (200 + 10 % -> 20)
    /// - avec * ou / en attente : simple division par 100 (100 * 10 % -> 0.1)
    ///
    /// Le calcul en attente est conservé pour le "=" qui suit.
    /// Sans opérateur en attente : x / 100, comme les autres unaires.
    pub fn pourcentage(&mut self) {
        let Some(en_attente) = self.etat.en_attente else {
            self.unaire_immediate(OperationUnaire::Pourcentage);
            return;
        };

        if self.en_erreur() {
            debug!("% ignoré (affichage en erreur)");
            return;
        }

        let valeur = self.valeur_affichee();
        let resultat = if en_attente.operateur.est_additif() {
            en_attente.operande * valeur / 100.0
        } else {
            valeur / 100.0
        };
        self.afficher(Ok(resultat));
    }

    /// Unaire sans contexte : agit sur l’affichage puis oublie le calcul en attente.
    fn unaire_immediate(&mut self, operation: OperationUnaire) {
        if self.en_erreur() {
            debug!(operation = operation.symbole(), "unaire ignorée (affichage en erreur)");
            return;
        }

        let resultat = operation.appliquer(self.valeur_affichee());
        self.afficher(resultat);

        self.etat.en_attente = None;
        self.etat.vient_de_calculer = false;
        self.etat.attente_nouvelle_saisie = true;
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire_effacer(&mut self) {
        self.etat.memoire = None;
    }

    /// MR : copie la mémoire à l’affichage ("0" si vide).
    pub fn memoire_rappeler(&mut self) {
        self.etat.affichage = self
            .memoire()
            .unwrap_or_else(|| "0".to_string());
    }

    pub fn memoire_ajouter(&mut self) {
        self.maj_memoire(|memoire, affichee| memoire + affichee);
    }

    pub fn memoire_soustraire(&mut self) {
        self.maj_memoire(|memoire, affichee| memoire - affichee);
    }

    fn maj_memoire(&mut self, operation: impl FnOnce(f64, f64) -> f64) {
        if self.en_erreur() {
            debug!("mémoire inchangée (affichage en erreur)");
            return;
        }

        let memoire = self.etat.memoire.unwrap_or(0.0);
        self.etat.memoire = Some(operation(memoire, self.valeur_affichee()));
        self.etat.attente_nouvelle_saisie = true;
    }

    /* ------------------------ Effacement ------------------------ */

    /// C : tout remettre à zéro, sauf la mémoire.
    pub fn clear_all(&mut self) {
        self.etat = EtatCalculatrice {
            memoire: self.etat.memoire,
            ..EtatCalculatrice::default()
        };
    }

    /// CE : seulement l’entrée ; calcul en attente et mémoire conservés.
    pub fn clear_entree(&mut self) {
        self.etat.affichage = "0".to_string();
        self.etat.attente_nouvelle_saisie = false;
    }
}
