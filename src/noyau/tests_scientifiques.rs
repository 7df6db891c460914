//! Tests scientifiques : invariants de la forme canonique et de l’arithmétique.
//!
//! Oracle : `num_rational::BigRational`, qui réduit toujours ses valeurs.
//! On vérifie que le noyau (qui ne réduit qu’au rendu) lui reste fidèle.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

use super::erreur::EvalError;
use super::eval::evaluate_line;
use super::fraction::{gcd, Fraction};

fn frac(w: i64, n: i64, d: i64) -> Fraction {
    Fraction::new(BigInt::from(w), BigInt::from(n), BigInt::from(d))
        .unwrap_or_else(|e| panic!("Fraction::new({w}, {n}, {d}) erreur: {e}"))
}

/// Valeur attendue d’un littéral `w_n/d` : signe = parité des champs négatifs.
fn valeur_attendue(w: i64, n: i64, d: i64) -> BigRational {
    let grandeur = BigRational::from_integer(BigInt::from(w.abs()))
        + BigRational::new(BigInt::from(n.abs()), BigInt::from(d.abs()));
    let negatifs = [w, n, d].iter().filter(|v| **v < 0).count();
    if negatifs % 2 == 1 {
        -grandeur
    } else {
        grandeur
    }
}

fn rat(f: &Fraction) -> BigRational {
    BigRational::from(f)
}

fn arb_triple() -> impl Strategy<Value = (i64, i64, i64)> {
    (-60i64..60, -60i64..60, prop_oneof![-40i64..=-1, 1i64..=40])
}

fn arb_op() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/")]
}

fn appliquer(op: &str, a: &BigRational, b: &BigRational) -> Option<BigRational> {
    match op {
        "+" => Some(a + b),
        "-" => Some(a - b),
        "*" => Some(a * b),
        "/" if b.is_zero() => None,
        "/" => Some(a / b),
        _ => unreachable!(),
    }
}

proptest! {
    #[test]
    fn forme_canonique_reduite((w, n, d) in arb_triple()) {
        let f = frac(w, n, d);
        let (whole, num, den) = f.parties_mixtes();

        prop_assert!(den.is_positive());
        prop_assert!(gcd(&num, &den).is_one());
        prop_assert!(num.abs() < den);
        if !whole.is_zero() {
            prop_assert!(!num.is_negative(), "signe porté par whole: {}", f);
        }

        prop_assert_eq!(rat(&f), valeur_attendue(w, n, d));
    }

    #[test]
    fn rendu_relu_identique((w, n, d) in arb_triple()) {
        let f = frac(w, n, d);
        let relu = evaluate_line(&f.to_string());
        prop_assert_eq!(relu, Ok(f));
    }

    #[test]
    fn formules_brutes((a, b, c) in arb_triple(), (x, y, z) in arb_triple()) {
        let p = frac(a, b, c);
        let q = frac(x, y, z);
        let (pn, pd) = (p.numerator(), p.denominator());
        let (qn, qd) = (q.numerator(), q.denominator());

        let s = p.add(&q);
        prop_assert_eq!(s.numerator(), &(pn * qd + qn * pd));
        prop_assert_eq!(s.denominator(), &(pd * qd));

        let s = p.sub(&q);
        prop_assert_eq!(s.numerator(), &(pn * qd - qn * pd));
        prop_assert_eq!(s.denominator(), &(pd * qd));

        let m = p.mul(&q);
        prop_assert_eq!(m.numerator(), &(pn * qn));
        prop_assert_eq!(m.denominator(), &(pd * qd));

        match p.div(&q) {
            Ok(quotient) => {
                prop_assert!(quotient.denominator().is_positive());
                prop_assert_eq!(rat(&quotient), rat(&p) / rat(&q));
            }
            Err(e) => {
                prop_assert!(q.is_zero());
                prop_assert_eq!(e, EvalError::DivisionByZero);
            }
        }
    }

    #[test]
    fn deux_operandes_comme_oracle(
        (a, b, c) in arb_triple(),
        op in arb_op(),
        (x, y, z) in arb_triple(),
    ) {
        let ligne = format!("{a}_{b}/{c} {op} {x}_{y}/{z}");
        let attendu = appliquer(op, &valeur_attendue(a, b, c), &valeur_attendue(x, y, z));

        match (evaluate_line(&ligne), attendu) {
            (Ok(f), Some(r)) => prop_assert_eq!(rat(&f), r),
            (Err(e), None) => prop_assert_eq!(e, EvalError::DivisionByZero),
            (obtenu, attendu) => {
                prop_assert!(false, "ligne={:?} obtenu={:?} attendu={:?}", ligne, obtenu, attendu)
            }
        }
    }

    #[test]
    fn precedence_trois_operandes(
        a in -30i64..30,
        b in -30i64..30,
        c in 1i64..30,
        op1 in prop_oneof![Just("+"), Just("-")],
        op2 in prop_oneof![Just("*"), Just("/")],
    ) {
        let ligne = format!("{a} {op1} {b} {op2} {c}");
        let ra = BigRational::from_integer(BigInt::from(a));
        let rb = BigRational::from_integer(BigInt::from(b));
        let rc = BigRational::from_integer(BigInt::from(c));

        let droite = appliquer(op2, &rb, &rc).unwrap();
        let attendu = appliquer(op1, &ra, &droite).unwrap();

        let f = evaluate_line(&ligne).unwrap();
        prop_assert_eq!(rat(&f), attendu);
    }
}

/* ------------------------ Cas fixes ------------------------ */

#[test]
fn sci_signe_replie() {
    for lexeme in ["3_-1/2", "3_1/-2", "-3_1/2"] {
        assert_eq!(evaluate_line(lexeme).unwrap().to_string(), "-3_1/2");
    }
    // deux signes négatifs s’annulent
    assert_eq!(evaluate_line("-3_-1/2").unwrap().to_string(), "3_1/2");
}

#[test]
fn sci_zero_algebrique() {
    assert_eq!(evaluate_line("1/2 + 1/3 - 5/6").unwrap().to_string(), "0");
    assert_eq!(evaluate_line("2/3 * 3/4 - 1/2").unwrap().to_string(), "0");
}

#[test]
fn sci_bigint_sans_debordement() {
    let big = "9".repeat(100);
    let f = evaluate_line(&format!("{big} * {big} + 1")).unwrap();
    let attendu: BigInt = BigInt::parse_bytes(big.as_bytes(), 10).unwrap().pow(2u32) + 1;
    assert_eq!(f.to_string(), attendu.to_string());

    let f = evaluate_line(&format!("{big}/7 + 1/7")).unwrap();
    let n = BigInt::parse_bytes(big.as_bytes(), 10).unwrap() + 1;
    assert_eq!(rat(&f), BigRational::new(n, BigInt::from(7)));
}

#[test]
fn sci_lecture_decimale() {
    let f = evaluate_line("1_7/8").unwrap();
    assert_eq!(f.lecture_decimale(4), "1.8750");
    let f = evaluate_line("-1 / 3").unwrap();
    assert_eq!(f.lecture_decimale(6), "-0.333333");
}
