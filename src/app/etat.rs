//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, digits, historique)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//! L’évaluation elle-même est déclenchée par vue.rs.

use calculatrice_fractions::Fraction;

/// Précision de la lecture décimale par défaut.
const DIGITS_DEFAUT: usize = 10;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Nombre de lignes gardées dans l’historique.
const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigneHistorique {
    pub entree: String,
    pub sortie: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // forme canonique w_n/d
    pub lecture: String,  // lecture décimale tronquée
    pub erreur: String,   // message d’erreur du noyau, tel quel

    // Dernière valeur : permet de recalculer la lecture quand digits change.
    dernier: Option<Fraction>,

    // Plus récent en tête.
    pub historique: Vec<LigneHistorique>,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            dernier: None,
            historique: Vec::new(),
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    pub fn avec_digits(digits: usize) -> Self {
        let mut app = Self::default();
        if digits > 0 {
            app.set_digits(digits);
        }
        app
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.digits = DIGITS_DEFAUT;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + lecture + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.dernier = None;
        self.focus_entree = true;
    }

    /// On CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.pousser_historique(self.erreur.clone());
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, f: Fraction) {
        self.erreur.clear();
        self.resultat = f.to_string();
        self.lecture = f.lecture_decimale(self.digits);
        self.dernier = Some(f);
        self.pousser_historique(self.resultat.clone());
        self.focus_entree = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        if let Some(f) = &self.dernier {
            self.lecture = f.lecture_decimale(self.digits);
        }
        self.focus_entree = true;
    }

    fn pousser_historique(&mut self, sortie: String) {
        self.historique.insert(
            0,
            LigneHistorique {
                entree: self.entree.trim().to_string(),
                sortie,
            },
        );
        self.historique.truncate(HISTORIQUE_MAX);
    }
}
