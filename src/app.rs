// src/app.rs
//
// Calculatrice de bureau — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier physique : traité ici, une seule fois par frame
//
// Raccourcis :
// - chiffres, . , + - * / % =  -> touche correspondante
// - Enter                      -> "="
// - Escape                     -> CE (entrée seulement)
// - Delete                     -> C (tout, sauf mémoire)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use calculatrice_bureau::Touche;
use eframe::egui;

impl AppCalc {
    fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
        ctx.input(|i| {
            i.events
                .iter()
                .flat_map(|ev| match ev {
                    egui::Event::Text(t) => t.chars().filter_map(Touche::depuis_caractere).collect(),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => vec![Touche::Egal],
                        egui::Key::Escape => vec![Touche::EffacerEntree],
                        egui::Key::Delete => vec![Touche::EffacerTout],
                        _ => Vec::new(),
                    },
                    _ => Vec::new(),
                })
                .collect()
        })
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.clavier_actif {
            for touche in Self::touches_clavier(ctx) {
                self.appuyer(touche);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
