// src/noyau/fraction.rs
//
// Fraction exacte (BigInt / BigInt), sans flottants.
// - le signe est porté UNIQUEMENT par le numérateur
// - le dénominateur n’est jamais négatif ni nul
// - la simplification n’est PAS stockée : elle est calculée au rendu
//
// Les opérations retournent toujours une nouvelle valeur (aucune mutation).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use std::fmt;
use std::str::FromStr;

use super::erreur::EvalError;
use super::lecture::lecture_decimale;
use super::litteral::lire_motif;

#[derive(Clone, Debug)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

/// PGCD d’Euclide (sur les valeurs absolues).
/// Convention : gcd(0, 0) = 1, pour que la fraction nulle se simplifie sans division par zéro.
pub fn gcd(x: &BigInt, y: &BigInt) -> BigInt {
    let mut a = x.abs();
    let mut b = y.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    if a.is_zero() {
        BigInt::one()
    } else {
        a
    }
}

impl Fraction {
    /// Construit `whole_num/den`.
    ///
    /// Le signe est replié avant de combiner : la fraction est négative si un nombre
    /// impair de champs est négatif, et sa grandeur vaut |whole|*|den| + |num|.
    /// Ainsi `3_-1/2`, `3_1/-2` et `-3_1/2` valent tous -7/2.
    pub fn new(whole: BigInt, num: BigInt, den: BigInt) -> Result<Fraction, EvalError> {
        if den.is_zero() {
            return Err(EvalError::DivisionByZero);
        }

        let negatifs = [&whole, &num, &den]
            .iter()
            .filter(|v| v.is_negative())
            .count();

        let d = den.abs();
        let grandeur = whole.abs() * &d + num.abs();
        let n = if negatifs % 2 == 1 { -grandeur } else { grandeur };

        Ok(Fraction {
            numerator: n,
            denominator: d,
        })
    }

    pub fn from_integer(n: BigInt) -> Fraction {
        Fraction {
            numerator: n,
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Fraction {
        Fraction::from_integer(BigInt::zero())
    }

    /// Constructeur interne : (n, d) bruts, d ≠ 0. Remonte le signe au numérateur.
    fn brut(n: BigInt, d: BigInt) -> Fraction {
        if d.is_negative() {
            Fraction {
                numerator: -n,
                denominator: -d,
            }
        } else {
            Fraction {
                numerator: n,
                denominator: d,
            }
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn add(&self, b: &Fraction) -> Fraction {
        Fraction::brut(
            &self.numerator * &b.denominator + &b.numerator * &self.denominator,
            &self.denominator * &b.denominator,
        )
    }

    pub fn sub(&self, b: &Fraction) -> Fraction {
        Fraction::brut(
            &self.numerator * &b.denominator - &b.numerator * &self.denominator,
            &self.denominator * &b.denominator,
        )
    }

    pub fn mul(&self, b: &Fraction) -> Fraction {
        Fraction::brut(
            &self.numerator * &b.numerator,
            &self.denominator * &b.denominator,
        )
    }

    pub fn div(&self, b: &Fraction) -> Result<Fraction, EvalError> {
        if b.numerator.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        Ok(Fraction::brut(
            &self.numerator * &b.denominator,
            &self.denominator * &b.numerator,
        ))
    }

    /* ------------------------ Forme canonique ------------------------ */

    /// (n, d) irréductible : on divise par le PGCD jusqu’à ce qu’il vaille 1.
    pub fn reduite(&self) -> (BigInt, BigInt) {
        let mut n = self.numerator.clone();
        let mut d = self.denominator.clone();
        loop {
            let g = gcd(&n, &d);
            if g.is_one() {
                return (n, d);
            }
            n /= &g;
            d /= &g;
        }
    }

    /// (whole, num, den) en forme mixte.
    /// Le signe est porté par `whole`, ou par `num` quand `whole == 0` ; 0 ≤ |num| < den.
    pub fn parties_mixtes(&self) -> (BigInt, BigInt, BigInt) {
        let (n, d) = self.reduite();
        let negatif = n.is_negative();
        let n_abs = n.abs();

        let mut whole = &n_abs / &d;
        let mut num = &n_abs % &d;

        if negatif {
            if whole.is_zero() {
                num = -num;
            } else {
                whole = -whole;
            }
        }

        (whole, num, d)
    }

    /// Lecture décimale tronquée (vers zéro) à `digits` chiffres.
    pub fn lecture_decimale(&self, digits: usize) -> String {
        lecture_decimale(&BigRational::from(self), digits)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, num, den) = self.parties_mixtes();
        if num.is_zero() {
            write!(f, "{whole}")
        } else if whole.is_zero() {
            write!(f, "{num}/{den}")
        } else {
            write!(f, "{whole}_{num}/{den}")
        }
    }
}

/// Égalité de VALEUR (1/2 == 2/4), pas de représentation.
impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Fraction {}

impl FromStr for Fraction {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Fraction, EvalError> {
        let (whole, num, den) =
            lire_motif(s).ok_or_else(|| EvalError::UnexpectedToken(s.to_string()))?;
        Fraction::new(whole, num, den)
    }
}

impl From<&Fraction> for BigRational {
    fn from(f: &Fraction) -> BigRational {
        BigRational::new(f.numerator.clone(), f.denominator.clone())
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Fraction {
        Fraction::from_integer(BigInt::from(n))
    }
}
