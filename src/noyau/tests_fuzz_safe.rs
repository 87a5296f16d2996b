//! Tests fuzz safe : robustesse + déterminisme + invariants d’état.
//!
//! But : marteler la machine à états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - séquences de longueur bornée
//! - budget temps global
//! - invariants clés :
//!   * affichage jamais vide, jamais "-0"
//!   * un résultat fraîchement calculé est stable par re-formatage
//!   * la mémoire, une fois remplie par M+/M-, reste présente jusqu’à MC
//!   * C efface tout sauf la mémoire

use std::time::{Duration, Instant};

use super::format::{formater_resultat, lire_nombre, AFFICHAGE_ERREUR};
use super::{Calculatrice, Touche, DISPOSITION};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// Chiffres plus fréquents que le reste, comme sur un vrai clavier.
fn touche_au_hasard(rng: &mut Rng) -> Touche {
    if rng.pick(2) == 0 {
        Touche::Chiffre(rng.pick(10) as u8)
    } else {
        DISPOSITION[rng.pick(DISPOSITION.len() as u32) as usize].touche
    }
}

fn sequence_au_hasard(rng: &mut Rng, longueur_max: u32) -> Vec<Touche> {
    let n = 1 + rng.pick(longueur_max);
    (0..n).map(|_| touche_au_hasard(rng)).collect()
}

fn produit_un_resultat(touche: Touche) -> bool {
    matches!(touche, Touche::Egal | Touche::Unaire(_) | Touche::Operateur(_))
}

fn verifier_invariants(calc: &Calculatrice, avant: &str, touche: Touche, seq: &[Touche]) {
    let affichage = calc.affichage();
    assert!(!affichage.is_empty(), "affichage vide, seq={seq:?}");
    assert_ne!(affichage, "-0", "seq={seq:?}");

    // Un affichage qui vient d’être recalculé est déjà sous forme canonique.
    if produit_un_resultat(touche) && affichage != avant && affichage != AFFICHAGE_ERREUR {
        let reformate = formater_resultat(lire_nombre(affichage));
        assert_eq!(reformate, affichage, "re-formatage instable, seq={seq:?}");
    }

    if calc.etat().vient_de_calculer {
        assert!(
            calc.etat().dernier_calcul.is_some(),
            "= sans dernier calcul, seq={seq:?}"
        );
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_invariants_etat() {
    let start = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(0xCA1C_2024);

    for _ in 0..2_000 {
        budget(start, max);

        let seq = sequence_au_hasard(&mut rng, 30);
        let mut calc = Calculatrice::new();
        for (i, &touche) in seq.iter().enumerate() {
            let avant = calc.affichage().to_string();
            calc.appuyer(touche);
            verifier_invariants(&calc, &avant, touche, &seq[..=i]);
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        let seq = sequence_au_hasard(&mut rng, 25);

        let mut a = Calculatrice::new();
        let mut b = Calculatrice::new();
        a.appuyer_tout(seq.iter().copied());
        b.appuyer_tout(seq.iter().copied());

        assert_eq!(a.etat(), b.etat(), "seq={seq:?}");
    }
}

#[test]
fn fuzz_memoire_survit_au_clear_all() {
    let mut rng = Rng::new(7);

    for _ in 0..300 {
        let seq = sequence_au_hasard(&mut rng, 20);
        let mut calc = Calculatrice::new();
        calc.appuyer_tout(seq.iter().copied());

        let memoire = calc.etat().memoire;
        calc.appuyer(Touche::EffacerTout);

        // f64 comparé bit à bit (NaN compris)
        assert_eq!(
            calc.etat().memoire.map(f64::to_bits),
            memoire.map(f64::to_bits),
            "seq={seq:?}"
        );
        assert_eq!(calc.affichage(), "0");
        assert!(calc.etat().en_attente.is_none());
        assert!(calc.etat().dernier_calcul.is_none());
    }
}

#[test]
fn fuzz_erreur_toujours_recuperable() {
    let mut rng = Rng::new(1234);

    for _ in 0..300 {
        let seq = sequence_au_hasard(&mut rng, 20);
        let mut calc = Calculatrice::new();
        calc.appuyer_tout(seq.iter().copied());

        // Après n’importe quoi : C puis 2 + 2 = donne 4.
        calc.appuyer_tout([
            Touche::EffacerTout,
            Touche::Chiffre(2),
            Touche::Operateur(super::Operateur::Addition),
            Touche::Chiffre(2),
            Touche::Egal,
        ]);
        assert_eq!(calc.affichage(), "4", "seq={seq:?}");
    }
}
