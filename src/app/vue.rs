// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Grille générée depuis DISPOSITION (aucun libellé en dur ici)
// - Tactile : gros boutons, "=" sur toute la largeur
//
// Note :
// - Le clavier physique est traité dans app.rs (un seul endroit).

use eframe::egui;

use calculatrice_bureau::noyau::format::AFFICHAGE_ERREUR;
use calculatrice_bureau::noyau::touches::COLONNES;
use calculatrice_bureau::noyau::{Bouton, StyleBouton, DISPOSITION};

use super::etat::AppCalc;

const TAILLE_BOUTON: [f32; 2] = [56.0, 44.0];
const ESPACEMENT: f32 = 6.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Ligne du haut : "M" à gauche, opération en attente à droite.
                ui.horizontal(|ui| {
                    let m = if self.memoire_presente() { "M" } else { " " };
                    ui.monospace(m);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(self.ligne_en_attente());
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = egui::RichText::new(self.affichage()).monospace().size(32.0);
                    if self.affichage() == AFFICHAGE_ERREUR {
                        ui.label(texte.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let (grille, larges): (Vec<&Bouton>, Vec<&Bouton>) =
            DISPOSITION.iter().partition(|b| !b.pleine_largeur);

        egui::Grid::new("pave_calculatrice")
            .num_columns(COLONNES)
            .spacing([ESPACEMENT, ESPACEMENT])
            .show(ui, |ui| {
                for ligne in grille.chunks(COLONNES) {
                    for b in ligne {
                        self.bouton(ui, b, TAILLE_BOUTON);
                    }
                    ui.end_row();
                }
            });

        let largeur = COLONNES as f32 * TAILLE_BOUTON[0] + (COLONNES - 1) as f32 * ESPACEMENT;
        for b in larges {
            self.bouton(ui, b, [largeur, TAILLE_BOUTON[1]]);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, b: &Bouton, taille: [f32; 2]) {
        let texte = egui::RichText::new(b.libelle).size(18.0);
        let mut bouton = egui::Button::new(texte);
        if let Some(fond) = couleur(b.style) {
            bouton = bouton.fill(fond);
        }

        if ui.add_sized(taille, bouton).clicked() {
            self.appuyer(b.touche);
        }
    }
}

/// Fond par style (None = thème egui).
fn couleur(style: StyleBouton) -> Option<egui::Color32> {
    match style {
        StyleBouton::Defaut => None,
        StyleBouton::Memoire => Some(egui::Color32::from_rgb(59, 130, 246)),
        StyleBouton::Effacement => Some(egui::Color32::from_rgb(239, 68, 68)),
    }
}
