//! Tests de la disposition des boutons + aiguillage + lecture des touches.

use super::touches::COLONNES;
use super::{
    sequence_de_touches, ActionMemoire, Calculatrice, ErreurTouche, OperationUnaire, Operateur,
    StyleBouton, Touche, DISPOSITION,
};

fn bouton(libelle: &str) -> super::Bouton {
    *DISPOSITION
        .iter()
        .find(|b| b.libelle == libelle)
        .unwrap_or_else(|| panic!("bouton {libelle:?} absent"))
}

/* ------------------------ Disposition ------------------------ */

#[test]
fn vingt_six_boutons() {
    assert_eq!(DISPOSITION.len(), 26);
    // 5 lignes pleines + "="
    assert_eq!((DISPOSITION.len() - 1) % COLONNES, 0);
}

#[test]
fn un_seul_bouton_pleine_largeur() {
    let larges: Vec<_> = DISPOSITION.iter().filter(|b| b.pleine_largeur).collect();
    assert_eq!(larges.len(), 1);
    assert_eq!(larges[0].libelle, "=");
    assert_eq!(larges[0].touche, Touche::Egal);
    assert_eq!(DISPOSITION.last().map(|b| b.libelle), Some("="));
}

#[test]
fn boutons_memoire() {
    for (libelle, action) in [
        ("MC", ActionMemoire::Effacer),
        ("MR", ActionMemoire::Rappeler),
        ("M-", ActionMemoire::Soustraire),
        ("M+", ActionMemoire::Ajouter),
    ] {
        let b = bouton(libelle);
        assert_eq!(b.touche, Touche::Memoire(action), "{libelle}");
        assert_eq!(b.style, StyleBouton::Memoire, "{libelle}");
    }
}

#[test]
fn dix_chiffres() {
    let chiffres: Vec<_> = DISPOSITION
        .iter()
        .filter(|b| matches!(b.touche, Touche::Chiffre(_)))
        .collect();
    assert_eq!(chiffres.len(), 10);

    for n in 0..=9u8 {
        let b = bouton(&n.to_string());
        assert_eq!(b.touche, Touche::Chiffre(n));
    }
}

#[test]
fn operateurs_et_unaires() {
    for op in Operateur::TOUS {
        assert_eq!(bouton(op.symbole()).touche, Touche::Operateur(op));
    }
    for op in OperationUnaire::TOUTES {
        assert_eq!(bouton(op.symbole()).touche, Touche::Unaire(op));
    }
}

#[test]
fn boutons_effacement_et_virgule() {
    let c = bouton("C");
    assert_eq!(c.touche, Touche::EffacerTout);
    assert_eq!(c.style, StyleBouton::Effacement);

    assert_eq!(bouton("CE").touche, Touche::EffacerEntree);
    assert_eq!(bouton(".").touche, Touche::Virgule);
}

#[test]
fn chaque_style_sert() {
    for style in [StyleBouton::Defaut, StyleBouton::Memoire, StyleBouton::Effacement] {
        assert!(DISPOSITION.iter().any(|b| b.style == style), "{style:?}");
    }
}

#[test]
fn libelles_uniques() {
    for (i, a) in DISPOSITION.iter().enumerate() {
        for b in &DISPOSITION[i + 1..] {
            assert_ne!(a.libelle, b.libelle);
        }
    }
}

/* ------------------------ Aiguillage ------------------------ */

#[test]
fn chaque_bouton_agit() {
    let mut calc = Calculatrice::new();
    calc.appuyer(bouton("7").touche);
    assert_eq!(calc.affichage(), "7");

    calc.appuyer(bouton("+").touche);
    calc.appuyer(bouton("3").touche);
    calc.appuyer(bouton("=").touche);
    assert_eq!(calc.affichage(), "10");

    calc.appuyer(bouton("M+").touche);
    calc.appuyer(bouton("C").touche);
    assert_eq!(calc.affichage(), "0");
    calc.appuyer(bouton("MR").touche);
    assert_eq!(calc.affichage(), "10");

    calc.appuyer(bouton("1/x").touche);
    assert_eq!(calc.affichage(), "0.1");

    calc.appuyer(bouton("MC").touche);
    assert_eq!(calc.memoire(), None);
}

#[test]
fn bouton_virgule() {
    let mut calc = Calculatrice::new();
    calc.appuyer(bouton(".").touche);
    assert_eq!(calc.affichage(), "0.");
}

/* ------------------------ Lecture des touches ------------------------ */

#[test]
fn alias() {
    let cas = [
        ("sqrt", Touche::Unaire(OperationUnaire::RacineCarree)),
        ("SQ", Touche::Unaire(OperationUnaire::RacineCarree)),
        ("+/-", Touche::Unaire(OperationUnaire::ChangementSigne)),
        ("neg", Touche::Unaire(OperationUnaire::ChangementSigne)),
        ("x", Touche::Operateur(Operateur::Multiplication)),
        ("÷", Touche::Operateur(Operateur::Division)),
        (",", Touche::Virgule),
        ("AC", Touche::EffacerTout),
        ("m+", Touche::Memoire(ActionMemoire::Ajouter)),
    ];
    for (texte, attendu) in cas {
        assert_eq!(texte.parse::<Touche>(), Ok(attendu), "{texte:?}");
    }
}

#[test]
fn touche_inconnue() {
    assert_eq!(
        "sin".parse::<Touche>(),
        Err(ErreurTouche::Inconnue("sin".to_string()))
    );
    assert!(sequence_de_touches("5 + pi =").is_err());
    assert!(sequence_de_touches("-5").is_err());
}

#[test]
fn nombres_eclates() {
    assert_eq!(
        sequence_de_touches("20.5").unwrap(),
        vec![
            Touche::Chiffre(2),
            Touche::Chiffre(0),
            Touche::Virgule,
            Touche::Chiffre(5)
        ]
    );
    assert_eq!(sequence_de_touches("   ").unwrap(), vec![]);
}

#[test]
fn clavier() {
    assert_eq!(Touche::depuis_caractere('4'), Some(Touche::Chiffre(4)));
    assert_eq!(Touche::depuis_caractere(','), Some(Touche::Virgule));
    assert_eq!(Touche::depuis_caractere('='), Some(Touche::Egal));
    assert_eq!(
        Touche::depuis_caractere('%'),
        Some(Touche::Unaire(OperationUnaire::Pourcentage))
    );
    assert_eq!(Touche::depuis_caractere('a'), None);
}
