//! Touches : disposition logique des boutons + aiguillage vers la calculatrice.
//!
//! La disposition est une donnée (libellé, touche, style) ; les vues
//! (egui, clavier, ligne de commande) ne font que la parcourir.

use std::str::FromStr;

use thiserror::Error;

use super::calculatrice::Calculatrice;
use super::operation::{OperationUnaire, Operateur};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionMemoire {
    Effacer,
    Rappeler,
    Ajouter,
    Soustraire,
}

/// Une touche logique = exactement une opération de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Unaire(OperationUnaire),
    Memoire(ActionMemoire),
    EffacerTout,
    EffacerEntree,
    Egal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleBouton {
    Defaut,
    Memoire,
    Effacement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bouton {
    pub libelle: &'static str,
    pub touche: Touche,
    pub style: StyleBouton,
    /// Occupe toute la ligne ("=").
    pub pleine_largeur: bool,
}

const fn bouton(libelle: &'static str, touche: Touche, style: StyleBouton) -> Bouton {
    Bouton {
        libelle,
        touche,
        style,
        pleine_largeur: false,
    }
}

const fn chiffre(libelle: &'static str, n: u8) -> Bouton {
    bouton(libelle, Touche::Chiffre(n), StyleBouton::Defaut)
}

const fn operateur(libelle: &'static str, op: Operateur) -> Bouton {
    bouton(libelle, Touche::Operateur(op), StyleBouton::Defaut)
}

const fn unaire(libelle: &'static str, op: OperationUnaire) -> Bouton {
    bouton(libelle, Touche::Unaire(op), StyleBouton::Defaut)
}

const fn memoire(libelle: &'static str, action: ActionMemoire) -> Bouton {
    bouton(libelle, Touche::Memoire(action), StyleBouton::Memoire)
}

/// Nombre de colonnes de la grille.
pub const COLONNES: usize = 5;

/// Grille 5x5 + "=" pleine largeur.
pub const DISPOSITION: [Bouton; 26] = [
    // Mémoire + C
    memoire("MC", ActionMemoire::Effacer),
    memoire("MR", ActionMemoire::Rappeler),
    memoire("M-", ActionMemoire::Soustraire),
    memoire("M+", ActionMemoire::Ajouter),
    bouton("C", Touche::EffacerTout, StyleBouton::Effacement),
    // 7 8 9 / 1/x
    chiffre("7", 7),
    chiffre("8", 8),
    chiffre("9", 9),
    operateur("/", Operateur::Division),
    unaire("1/x", OperationUnaire::Inverse),
    // 4 5 6 * CE
    chiffre("4", 4),
    chiffre("5", 5),
    chiffre("6", 6),
    operateur("*", Operateur::Multiplication),
    bouton("CE", Touche::EffacerEntree, StyleBouton::Defaut),
    // 1 2 3 - ±
    chiffre("1", 1),
    chiffre("2", 2),
    chiffre("3", 3),
    operateur("-", Operateur::Soustraction),
    unaire("±", OperationUnaire::ChangementSigne),
    // √ 0 . % +
    unaire("√", OperationUnaire::RacineCarree),
    chiffre("0", 0),
    bouton(".", Touche::Virgule, StyleBouton::Defaut),
    unaire("%", OperationUnaire::Pourcentage),
    operateur("+", Operateur::Addition),
    // =
    Bouton {
        libelle: "=",
        touche: Touche::Egal,
        style: StyleBouton::Defaut,
        pleine_largeur: true,
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurTouche {
    #[error("touche inconnue : {0:?}")]
    Inconnue(String),
}

impl Touche {
    /// Caractère tapé au clavier -> touche (None si sans effet).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        let touche = match c {
            '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
            '.' | ',' => Touche::Virgule,
            '+' => Touche::Operateur(Operateur::Addition),
            '-' => Touche::Operateur(Operateur::Soustraction),
            '*' | 'x' | '×' => Touche::Operateur(Operateur::Multiplication),
            '/' | '÷' => Touche::Operateur(Operateur::Division),
            '%' => Touche::Unaire(OperationUnaire::Pourcentage),
            '√' => Touche::Unaire(OperationUnaire::RacineCarree),
            '±' => Touche::Unaire(OperationUnaire::ChangementSigne),
            '=' => Touche::Egal,
            _ => return None,
        };
        Some(touche)
    }
}

impl FromStr for Touche {
    type Err = ErreurTouche;

    /// Libellés de la disposition + quelques alias ("sqrt", "+/-", "AC"...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(b) = DISPOSITION.iter().find(|b| b.libelle == s) {
            return Ok(b.touche);
        }

        let bas = s.to_ascii_lowercase();
        let touche = match bas.as_str() {
            "sqrt" | "sq" => Touche::Unaire(OperationUnaire::RacineCarree),
            "+/-" | "neg" => Touche::Unaire(OperationUnaire::ChangementSigne),
            "inv" => Touche::Unaire(OperationUnaire::Inverse),
            "c" | "ac" => Touche::EffacerTout,
            "ce" => Touche::EffacerEntree,
            "mc" => Touche::Memoire(ActionMemoire::Effacer),
            "mr" => Touche::Memoire(ActionMemoire::Rappeler),
            "m+" => Touche::Memoire(ActionMemoire::Ajouter),
            "m-" => Touche::Memoire(ActionMemoire::Soustraire),
            _ => {
                let mut car = bas.chars();
                match (car.next(), car.next()) {
                    (Some(c), None) => Touche::depuis_caractere(c)
                        .ok_or_else(|| ErreurTouche::Inconnue(s.to_string()))?,
                    _ => return Err(ErreurTouche::Inconnue(s.to_string())),
                }
            }
        };
        Ok(touche)
    }
}

/// "200 + 10 % =" -> touches. Les nombres ("200", "0.5") sont éclatés
/// en chiffres + virgule ; les autres mots doivent être des touches.
pub fn sequence_de_touches(texte: &str) -> Result<Vec<Touche>, ErreurTouche> {
    let mut touches = Vec::new();

    for mot in texte.split_whitespace() {
        let est_nombre = mot.len() > 1
            && mot.chars().all(|c| c.is_ascii_digit() || c == '.')
            && mot.chars().any(|c| c.is_ascii_digit());

        if est_nombre {
            touches.extend(mot.chars().filter_map(Touche::depuis_caractere));
        } else {
            touches.push(mot.parse()?);
        }
    }

    Ok(touches)
}

impl Calculatrice {
    /// Aiguillage : une touche -> une opération.
    pub fn appuyer(&mut self, touche: Touche) {
        tracing::trace!(?touche, "touche");

        match touche {
            Touche::Chiffre(n) => self.ajouter_chiffre(n),
            Touche::Virgule => self.ajouter_virgule(),
            Touche::Operateur(op) => self.choisir_operateur(op),
            Touche::Unaire(op) => self.appliquer_unaire(op),
            Touche::Memoire(ActionMemoire::Effacer) => self.memoire_effacer(),
            Touche::Memoire(ActionMemoire::Rappeler) => self.memoire_rappeler(),
            Touche::Memoire(ActionMemoire::Ajouter) => self.memoire_ajouter(),
            Touche::Memoire(ActionMemoire::Soustraire) => self.memoire_soustraire(),
            Touche::EffacerTout => self.clear_all(),
            Touche::EffacerEntree => self.clear_entree(),
            Touche::Egal => self.calculer(),
        }
    }

    /// Rejoue une séquence de touches, dans l’ordre.
    pub fn appuyer_tout(&mut self, touches: impl IntoIterator<Item = Touche>) {
        for touche in touches {
            self.appuyer(touche);
        }
    }
}
