// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// - Clavier : Enter évalue (quand le champ a le focus)
// - Pavé : chiffres, `_` (nombre mixte), `/` collé (barre de fraction),
//   opérateurs espacés (`+ - * ÷`), `(-)` pour un littéral négatif
// - Historique repliable, plus récent en tête

use eframe::egui;

use calculatrice_fractions::evaluate_line;

use super::etat::{AppCalc, DIGITS_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice fractions");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 1/2 * 3_3/4, 2_3/8 + 9/8")
                .id_source("entree_fractions")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface le résultat et l’erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Lecture :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_fractions")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, chiffre, Insertion::Collee);
                    }
                    match ligne[0] {
                        "7" => self.bouton_insert(ui, "÷", "/", Insertion::Operateur),
                        "4" => self.bouton_insert(ui, "*", "*", Insertion::Operateur),
                        _ => self.bouton_insert(ui, "-", "-", Insertion::Operateur),
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", "0", Insertion::Collee);
                self.bouton_insert(ui, "_", "_", Insertion::Collee);
                self.bouton_insert(ui, "n/d", "/", Insertion::Collee);
                self.bouton_insert(ui, "+", "+", Insertion::Operateur);
                ui.end_row();

                self.bouton_insert(ui, "(-)", "-", Insertion::Collee);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.label("");
                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    self.evaluer();
                }
                ui.end_row();
            });
    }

    /// Retire un opérateur espacé d’un coup (" + "), sinon un caractère.
    fn backspace_entree(&mut self) {
        let tronque = self.entree.trim_end().len();
        self.entree.truncate(tronque);

        let dernier_lexeme = self.entree.rsplit(' ').next().unwrap_or("");
        if matches!(dernier_lexeme, "+" | "-" | "*" | "/") {
            self.entree.pop();
            let tronque = self.entree.trim_end().len();
            self.entree.truncate(tronque);
        } else {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        ui.add_space(6.0);

        ui.label(format!("Lecture ({} chiffres, tronquée) :", self.digits));
        Self::champ_monospace(ui, "lecture_out", &self.lecture, 1);
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                let mut rappel: Option<String> = None;

                for (i, ligne) in self.historique.iter().enumerate() {
                    ui.push_id(i, |ui| {
                        ui.horizontal(|ui| {
                            if ui
                                .small_button("<<")
                                .on_hover_text("Reprendre cette entrée")
                                .clicked()
                            {
                                rappel = Some(ligne.entree.clone());
                            }
                            ui.monospace(format!("{}  =  {}", ligne.entree, ligne.sortie));
                        });
                    });
                }

                if let Some(entree) = rappel {
                    self.entree = entree;
                    self.focus_entree = true;
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, texte: &str, insertion: Insertion) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match insertion {
            // Les lexèmes sont séparés par des espaces : un opérateur en est entouré.
            Insertion::Operateur => {
                let tronque = self.entree.trim_end().len();
                self.entree.truncate(tronque);
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(texte);
                self.entree.push(' ');
            }
            Insertion::Collee => self.entree.push_str(texte),
        }

        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat ou erreur dans l’état UI.
    fn evaluer(&mut self) {
        match evaluate_line(&self.entree) {
            Ok(f) => self.set_resultat(f),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum Insertion {
    Collee,
    Operateur,
}
