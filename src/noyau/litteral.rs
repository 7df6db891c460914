// src/noyau/litteral.rs
//
// Lecture d’un littéral fraction (un seul lexème, sans espaces).
//
// Trois motifs, essayés dans cet ordre, chacun devant couvrir TOUT le lexème :
//   1) whole_num/den   -?\d+_-?\d+/-?\d+
//   2) num/den         -?\d+/-?\d+
//   3) whole           -?\d+
//
// Chiffres ASCII seulement. Un lexème avec un suffixe parasite ("9/8x") n’est
// pas un littéral : pas de correspondance partielle.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::fraction::Fraction;

/// Entier signé `-?\d+` sur tout le texte.
fn entier_signe(s: &str) -> Option<BigInt> {
    let (negatif, chiffres) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let v = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some(if negatif { -v } else { v })
}

fn motif_mixte(s: &str) -> Option<(BigInt, BigInt, BigInt)> {
    let (whole, reste) = s.split_once('_')?;
    let (num, den) = reste.split_once('/')?;
    Some((entier_signe(whole)?, entier_signe(num)?, entier_signe(den)?))
}

fn motif_fraction(s: &str) -> Option<(BigInt, BigInt, BigInt)> {
    let (num, den) = s.split_once('/')?;
    Some((BigInt::zero(), entier_signe(num)?, entier_signe(den)?))
}

fn motif_entier(s: &str) -> Option<(BigInt, BigInt, BigInt)> {
    Some((entier_signe(s)?, BigInt::zero(), BigInt::one()))
}

/// Reconnaît la forme d’un littéral et renvoie (whole, num, den) tels qu’écrits.
/// Ne vérifie PAS le dénominateur : `1/0` est un littéral bien formé.
pub fn lire_motif(lexeme: &str) -> Option<(BigInt, BigInt, BigInt)> {
    motif_mixte(lexeme)
        .or_else(|| motif_fraction(lexeme))
        .or_else(|| motif_entier(lexeme))
}

/// Littéral -> Fraction. `None` si le lexème n’est pas un nombre
/// (ou si son dénominateur est nul).
pub fn parse_number(lexeme: &str) -> Option<Fraction> {
    let (whole, num, den) = lire_motif(lexeme)?;
    Fraction::new(whole, num, den).ok()
}
