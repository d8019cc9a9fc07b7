// src/app.rs
//
// Calculatrice Pavé — module App (racine)
// ---------------------------------------
// Rôle :
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppPave (pour main.rs: use crate::app::AppPave;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important :
// - Toute entrée passe par appuyer() (vue.rs), donc par la frontière
//   d'étiquettes : l'impl ici ne touche jamais le noyau directement.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppPave;`
pub use etat::AppPave;

use eframe::egui;

impl eframe::App for AppPave {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourcis clavier globaux (safe natif + web) :
        // ESC = AC, Enter = "=", caractères du pavé = clics.
        let evenements = ctx.input(|i| i.events.clone());
        for evenement in evenements {
            match evenement {
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => self.appuyer("AC"),
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.appuyer("="),
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.appuyer_caractere(c);
                    }
                }
                _ => {}
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
