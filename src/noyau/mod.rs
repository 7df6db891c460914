//! Noyau exact : fractions mixtes
//!
//! Organisation interne :
//! - fraction.rs : Fraction exacte (BigInt) + rendu canonique `w_n/d`
//! - litteral.rs : lecture d’un littéral (trois motifs, correspondance totale)
//! - jetons.rs   : lexèmes, opérateurs, classification
//! - eval.rs     : deux passes (* / puis + -) + API publique
//! - erreur.rs   : taxonomie des erreurs (messages affichés tels quels)
//! - lecture.rs  : lecture décimale tronquée
//! - autotest.rs : auto-test de référence (`--autotest`)

pub mod autotest;
pub mod erreur;
pub mod eval;
pub mod fraction;
pub mod jetons;
pub mod lecture;
pub mod litteral;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate_line, evaluate_line_display, evaluate_line_with, Limites};
pub use fraction::Fraction;
pub use litteral::parse_number;
