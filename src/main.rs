// src/main.rs
//
// Calculatrice de bureau — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//   ou, avec --touches, rejeu sans fenêtre (scripts, tests manuels)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Le noyau (calculatrice) vit dans la bibliothèque (src/lib.rs)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]
// Le rejeu sans fenêtre écrit son résultat sur stdout.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use calculatrice_bureau::config::Config;
use calculatrice_bureau::noyau::sequence_de_touches;
use calculatrice_bureau::Calculatrice;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/// Calculatrice de bureau (4 opérations, mémoire, %).
#[derive(Parser, Debug)]
#[command(name = "calculatrice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rejoue une séquence sans fenêtre puis affiche le résultat.
    /// Exemple : --touches "200 + 10 % ="
    #[arg(short, long, value_name = "SEQUENCE")]
    touches: Option<String>,

    /// Fichier de configuration TOML
    #[arg(short, long, value_name = "FICHIER")]
    config: Option<PathBuf>,

    /// Verbosité (-v info, -vv debug, -vvv trace) ; RUST_LOG reste prioritaire
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/* ------------------------ Journal ------------------------ */

fn installer_journal(verbose: u8, niveau_config: &str) {
    let niveau = match verbose {
        0 => niveau_config,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filtre = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(niveau))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

/* ------------------------ Rejeu sans fenêtre ------------------------ */

fn rejouer(sequence: &str) -> anyhow::Result<()> {
    let touches = sequence_de_touches(sequence).context("séquence de touches invalide")?;

    let mut calc = Calculatrice::new();
    calc.appuyer_tout(touches);

    println!("{}", calc.affichage());
    if let Some(m) = calc.memoire() {
        println!("M {m}");
    }
    Ok(())
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn lancer(cli: Cli) -> anyhow::Result<()> {
    let config = Config::charger(cli.config.as_deref())?;
    installer_journal(cli.verbose, &config.journal.niveau);
    tracing::debug!(?config, "configuration chargée");

    if let Some(sequence) = cli.touches.as_deref() {
        return rejouer(sequence);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([config.fenetre.largeur, config.fenetre.hauteur])
            .with_min_inner_size([340.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("fenêtre : {e}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    match lancer(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Erreur : {e:#}");
            ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (config par défaut : pas de fichier côté web)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
