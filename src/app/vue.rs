// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Un pavé 4 colonnes comme une calculatrice de poche :
//   AC s'étale sur 3 colonnes, 0 sur 2.
// - Chaque clic envoie l'étiquette du bouton au moteur via la frontière
//   Symbole::depuis_etiquette ; la vue ne calcule rien.
// - L'opérateur en attente est surligné (le bouton reste "enfoncé" tant
//   qu'aucun second opérande n'est saisi).

use eframe::egui;

use super::etat::AppPave;
use crate::noyau::Symbole;

/// Côté d'un bouton du pavé.
const COTE_BOUTON: f32 = 64.0;
const ESPACEMENT: f32 = 6.0;

impl AppPave {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        ui.heading("Calculatrice Pavé");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Carte d'affichage, alignée à droite comme une calculatrice.
    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace) * 2.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.expression.affichage())
                            .monospace()
                            .size(36.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // largeur d'un bouton qui s'étale sur n colonnes
        let large = |n: f32| n * COTE_BOUTON + (n - 1.0) * ESPACEMENT;

        ui.horizontal(|ui| {
            self.bouton(ui, "AC", [large(3.0), COTE_BOUTON]);
            self.bouton(ui, "÷", [COTE_BOUTON, COTE_BOUTON]);
        });
        ui.horizontal(|ui| {
            for etiquette in ["7", "8", "9", "x"] {
                self.bouton(ui, etiquette, [COTE_BOUTON, COTE_BOUTON]);
            }
        });
        ui.horizontal(|ui| {
            for etiquette in ["4", "5", "6", "-"] {
                self.bouton(ui, etiquette, [COTE_BOUTON, COTE_BOUTON]);
            }
        });
        ui.horizontal(|ui| {
            for etiquette in ["1", "2", "3", "+"] {
                self.bouton(ui, etiquette, [COTE_BOUTON, COTE_BOUTON]);
            }
        });
        ui.horizontal(|ui| {
            self.bouton(ui, "0", [large(2.0), COTE_BOUTON]);
            self.bouton(ui, ".", [COTE_BOUTON, COTE_BOUTON]);
            self.bouton(ui, "=", [COTE_BOUTON, COTE_BOUTON]);
        });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, etiquette: &str, taille: [f32; 2]) {
        let en_attente = self
            .expression
            .operateur_en_attente()
            .map(|op| op.glyphe().to_string() == etiquette)
            .unwrap_or(false);

        let mut bouton = egui::Button::new(egui::RichText::new(etiquette).size(22.0));
        if en_attente {
            bouton = bouton.fill(ui.visuals().selection.bg_fill);
        }

        if ui.add_sized(taille, bouton).clicked() {
            self.appuyer(etiquette);
        }
    }

    /// Frontière hôte -> moteur : une étiquette inconnue est rejetée ici,
    /// le moteur ne la voit jamais.
    pub fn appuyer(&mut self, etiquette: &str) {
        match Symbole::depuis_etiquette(etiquette) {
            Ok(symbole) => {
                self.erreur.clear();
                self.expression = self.expression.appliquer(symbole);
            }
            Err(msg) => self.set_erreur(msg),
        }
    }

    /// Saisie clavier : un caractère du pavé est rejoué comme un clic,
    /// tout le reste est ignoré sans erreur.
    pub fn appuyer_caractere(&mut self, c: char) {
        match c {
            '0'..='9' | '.' | '+' | '-' | 'x' | '*' | '/' | '÷' | '×' | '=' => {
                self.appuyer(&c.to_string());
            }
            _ => {}
        }
    }
}
