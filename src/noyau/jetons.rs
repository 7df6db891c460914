// src/noyau/jetons.rs
//
// Jetons d’une ligne : lexèmes séparés par des espaces.
// Un lexème est soit un opérateur d’un seul caractère (+ - * /), soit un littéral.
// La classification est paresseuse : l’évaluateur classe les lexèmes dans l’ordre,
// pour signaler la PREMIÈRE faute rencontrée de gauche à droite.

use super::erreur::EvalError;
use super::fraction::Fraction;
use super::litteral::lire_motif;

/// Palier de précédence traité par une passe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Niveau {
    Multiplicatif, // * /
    Additif,       // + -
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    pub fn depuis_lexeme(lexeme: &str) -> Option<Op> {
        match lexeme {
            "+" => Some(Op::Plus),
            "-" => Some(Op::Minus),
            "*" => Some(Op::Star),
            "/" => Some(Op::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
        }
    }

    pub fn niveau(self) -> Niveau {
        match self {
            Op::Star | Op::Slash => Niveau::Multiplicatif,
            Op::Plus | Op::Minus => Niveau::Additif,
        }
    }

    pub fn appliquer(self, a: &Fraction, b: &Fraction) -> Result<Fraction, EvalError> {
        match self {
            Op::Plus => Ok(a.add(b)),
            Op::Minus => Ok(a.sub(b)),
            Op::Star => Ok(a.mul(b)),
            Op::Slash => a.div(b),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Operator(Op),
    /// Valeur + lexème d’origine (pour les messages d’erreur).
    Literal { valeur: Fraction, lexeme: String },
}

impl Token {
    /// Littéral reporté d’une passe à l’autre : son lexème est sa forme canonique.
    pub fn literal(valeur: Fraction) -> Token {
        let lexeme = valeur.to_string();
        Token::Literal { valeur, lexeme }
    }
}

/// Découpe une ligne en lexèmes (espaces quelconques).
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Classe un lexème : opérateur, littéral, ou erreur.
/// Un littéral bien formé mais de dénominateur nul donne `DivisionByZero`.
pub fn classer(lexeme: &str) -> Result<Token, EvalError> {
    if let Some(op) = Op::depuis_lexeme(lexeme) {
        return Ok(Token::Operator(op));
    }

    match lire_motif(lexeme) {
        Some((whole, num, den)) => Ok(Token::Literal {
            valeur: Fraction::new(whole, num, den)?,
            lexeme: lexeme.to_string(),
        }),
        None => Err(EvalError::UnexpectedToken(lexeme.to_string())),
    }
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Operator(op) => op.symbole(),
            Token::Literal { lexeme, .. } => lexeme.as_str(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
