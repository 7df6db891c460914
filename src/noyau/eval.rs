//! Noyau : évaluation d’une ligne
//!
//! lexèmes -> passe 1 (* /) -> passe 2 (+ -) -> Fraction
//!
//! Pas d’arbre d’expression : chaque passe est une réduction linéaire de gauche
//! à droite. Les opérateurs de l’autre palier sont reportés tels quels dans la
//! file de sortie, avec la valeur courante rendue en littéral canonique ; cette
//! file devient l’entrée de la passe suivante.

use tracing::{debug, trace};

use super::erreur::EvalError;
use super::fraction::Fraction;
use super::jetons::{classer, format_tokens, tokenize, Niveau, Op, Token};

/// Garde-fou par défaut sur le nombre de lexèmes d’une ligne.
pub const MAX_JETONS_DEFAUT: usize = 4096;

#[derive(Clone, Debug)]
pub struct Limites {
    pub max_jetons: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            max_jetons: MAX_JETONS_DEFAUT,
        }
    }
}

/// État de l’automate d’une passe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalState {
    ExpectFirstNumber,
    ExpectOperator,
    /// Un opérateur du palier courant attend son opérande droit.
    ExpectNumber(Op),
}

/// Une passe de réduction restreinte aux opérateurs de `niveau`.
///
/// Les jetons arrivent sous forme de `Result` : la passe 1 classe les lexèmes
/// au fil de l’eau, donc une faute de lexème n’est signalée que si aucune faute
/// de syntaxe ne la précède.
fn passe<I>(jetons: I, niveau: Niveau) -> Result<Vec<Token>, EvalError>
where
    I: IntoIterator<Item = Result<Token, EvalError>>,
{
    let mut sortie: Vec<Token> = Vec::new();
    let mut etat = EvalState::ExpectFirstNumber;
    let mut courant = Fraction::zero();

    // Dernier opérateur lu : sert au message "Expected number after".
    let mut dernier_op: Option<Op> = None;

    for jeton in jetons {
        let jeton = jeton?;
        trace!(?niveau, ?etat, ?jeton, "jeton");

        match (etat, jeton) {
            (EvalState::ExpectOperator, Token::Operator(op)) => {
                dernier_op = Some(op);
                if op.niveau() == niveau {
                    etat = EvalState::ExpectNumber(op);
                } else {
                    // Opérateur de l’autre palier : on le reporte et on repart à zéro.
                    let valeur = std::mem::replace(&mut courant, Fraction::zero());
                    sortie.push(Token::literal(valeur));
                    sortie.push(Token::Operator(op));
                    etat = EvalState::ExpectFirstNumber;
                }
            }

            (_, Token::Operator(op)) => {
                return Err(EvalError::UnexpectedOperator(op.symbole().to_string()));
            }

            (EvalState::ExpectFirstNumber, Token::Literal { valeur, .. }) => {
                courant = valeur;
                etat = EvalState::ExpectOperator;
            }

            (EvalState::ExpectNumber(op), Token::Literal { valeur, .. }) => {
                courant = op.appliquer(&courant, &valeur)?;
                etat = EvalState::ExpectOperator;
            }

            (EvalState::ExpectOperator, Token::Literal { lexeme, .. }) => {
                return Err(EvalError::UnexpectedNumber(lexeme));
            }
        }
    }

    match (etat, dernier_op) {
        (EvalState::ExpectOperator, _) => sortie.push(Token::literal(courant)),
        (EvalState::ExpectNumber(op), _) | (EvalState::ExpectFirstNumber, Some(op)) => {
            return Err(EvalError::ExpectedNumberAfter(op.symbole().to_string()));
        }
        // ligne vide
        (EvalState::ExpectFirstNumber, None) => {}
    }

    debug!(?niveau, sortie = %format_tokens(&sortie), "fin de passe");
    Ok(sortie)
}

/// API publique : évalue une ligne avec les limites par défaut.
///
/// Ligne vide (ou seulement des espaces) => `0`.
pub fn evaluate_line(line: &str) -> Result<Fraction, EvalError> {
    evaluate_line_with(line, &Limites::default())
}

/// Évalue une ligne en imposant `limites`.
pub fn evaluate_line_with(line: &str, limites: &Limites) -> Result<Fraction, EvalError> {
    let count = tokenize(line).count();
    if count > limites.max_jetons {
        return Err(EvalError::TooManyTokens {
            count,
            max: limites.max_jetons,
        });
    }

    let multiplicatif = passe(tokenize(line).map(classer), Niveau::Multiplicatif)?;
    let additif = passe(multiplicatif.into_iter().map(Ok), Niveau::Additif)?;

    let resultat = match additif.as_slice() {
        [] => Fraction::zero(),
        [Token::Literal { valeur, .. }] => valeur.clone(),
        // La passe additive applique tous les opérateurs restants.
        reste => unreachable!("file finale inattendue: {}", format_tokens(reste)),
    };

    debug!(line, resultat = %resultat, "ligne évaluée");
    Ok(resultat)
}

/// Ce que le REPL affiche : la forme canonique, ou le message d’erreur tel quel.
pub fn evaluate_line_display(line: &str) -> String {
    match evaluate_line(line) {
        Ok(f) => f.to_string(),
        Err(e) => e.to_string(),
    }
}
