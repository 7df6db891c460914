// src/noyau/erreur.rs
//
// Taxonomie des erreurs d’évaluation d’une ligne.
// Les messages sont affichés tels quels par le REPL : ne pas les reformuler.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Opérateur là où on attendait un nombre (début de ligne, après un autre opérateur).
    #[error("Unexpected operator \"{0}\"")]
    UnexpectedOperator(String),

    /// La ligne se termine sur un opérateur.
    #[error("Expected number after \"{0}\"")]
    ExpectedNumberAfter(String),

    /// Deux nombres de suite.
    #[error("Unexpected number \"{0}\"")]
    UnexpectedNumber(String),

    /// Ni opérateur, ni littéral.
    #[error("Unexpected token \"{0}\"")]
    UnexpectedToken(String),

    #[error("Division by zero")]
    DivisionByZero,

    /// Garde-fou sur la taille de la ligne.
    #[error("Too many tokens ({count} > {max})")]
    TooManyTokens { count: usize, max: usize },
}
