//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - lignes bien formées : comparaison avec un oracle BigRational
//! - lignes abîmées : une seule erreur, toujours dans la taxonomie connue

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::EvalError;
use super::eval::{evaluate_line, MAX_JETONS_DEFAUT};
use super::fraction::Fraction;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de lignes ------------------------ */

/// Littéral aléatoire + sa valeur exacte. Dénominateur jamais nul.
fn gen_litteral(rng: &mut Rng) -> (String, BigRational) {
    let w = rng.pick(10) as i64;
    let n = rng.pick(10) as i64;
    let d = 1 + rng.pick(9) as i64;
    let negatif = rng.coin();

    let (texte, grandeur) = match rng.pick(3) {
        // "-0_n/d" vaut +n/d (le signe d’un zéro se perd) : whole ≥ 1 ici
        0 => (
            format!("{}_{n}/{d}", w + 1),
            BigRational::new(BigInt::from((w + 1) * d + n), BigInt::from(d)),
        ),
        1 => (
            format!("{n}/{d}"),
            BigRational::new(BigInt::from(n), BigInt::from(d)),
        ),
        _ => (format!("{w}"), BigRational::from_integer(BigInt::from(w))),
    };

    if negatif {
        (format!("-{texte}"), -grandeur)
    } else {
        (texte, grandeur)
    }
}

const OPS: [&str; 4] = ["+", "-", "*", "/"];

/// Ligne bien formée de `termes` opérandes + résultat attendu
/// (`None` si une division par zéro doit survenir).
fn gen_ligne(rng: &mut Rng, termes: usize) -> (String, Option<BigRational>) {
    let (premier, v0) = gen_litteral(rng);
    let mut lexemes = vec![premier];

    // somme de produits : (signe de l’addition, produit courant)
    let mut somme = BigRational::zero();
    let mut signe_courant = true;
    let mut produit = v0;
    let mut division_par_zero = false;

    for _ in 1..termes {
        let op = OPS[rng.pick(4) as usize];
        let (texte, v) = gen_litteral(rng);
        lexemes.push(op.to_string());
        lexemes.push(texte);

        match op {
            "*" => produit *= v,
            "/" => {
                if v.is_zero() {
                    division_par_zero = true;
                } else {
                    produit /= v;
                }
            }
            _ => {
                somme = if signe_courant { somme + &produit } else { somme - &produit };
                signe_courant = op == "+";
                produit = v;
            }
        }
    }
    somme = if signe_courant { somme + &produit } else { somme - &produit };

    let attendu = if division_par_zero { None } else { Some(somme) };
    (lexemes.join(" "), attendu)
}

/// Abîme une ligne : remplace, duplique ou supprime un lexème.
fn abimer(rng: &mut Rng, ligne: &str) -> String {
    let mut lexemes: Vec<String> = ligne.split_whitespace().map(str::to_string).collect();
    let i = rng.pick(lexemes.len() as u32) as usize;
    match rng.pick(4) {
        0 => lexemes[i] = "woierjwe".to_string(),
        1 => {
            let copie = lexemes[i].clone();
            lexemes.insert(i, copie);
        }
        2 => {
            lexemes.remove(i);
        }
        _ => lexemes[i].push('x'),
    }
    lexemes.join(" ")
}

fn is_erreur_attendue(e: &EvalError) -> bool {
    matches!(
        e,
        EvalError::UnexpectedOperator(_)
            | EvalError::ExpectedNumberAfter(_)
            | EvalError::UnexpectedNumber(_)
            | EvalError::UnexpectedToken(_)
            | EvalError::DivisionByZero
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_lignes_bien_formees_contre_oracle() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let termes = 1 + rng.pick(8) as usize;
        let (ligne, attendu) = gen_ligne(&mut rng, termes);

        match (evaluate_line(&ligne), attendu) {
            (Ok(f), Some(r)) => {
                assert_eq!(BigRational::from(&f), r, "ligne={ligne:?}");
                seen_ok += 1;
            }
            (Err(EvalError::DivisionByZero), None) => seen_div0 += 1,
            (obtenu, attendu) => {
                panic!("ligne={ligne:?} obtenu={obtenu:?} attendu={attendu:?}")
            }
        }
    }

    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_lignes_abimees_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let termes = 1 + rng.pick(6) as usize;
        let (ligne, _) = gen_ligne(&mut rng, termes);
        let ligne = abimer(&mut rng, &ligne);

        let r1 = evaluate_line(&ligne);
        let r2 = evaluate_line(&ligne);
        assert_eq!(r1, r2, "non déterministe: {ligne:?}");

        if let Err(e) = r1 {
            assert!(is_erreur_attendue(&e), "erreur non attendue: {ligne:?} err={e}");
            seen_err += 1;
        }
    }

    assert!(seen_err > 50, "trop peu d’erreurs vues: {seen_err}");
}

#[test]
fn fuzz_safe_longue_ligne_anti_gel() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // 2000 termes => 3999 lexèmes, sous la limite par défaut
    let ligne = vec!["1/2"; 2000].join(" + ");
    let f = evaluate_line(&ligne).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);
    assert_eq!(f.to_string(), "1000");

    let ligne = vec!["1"; MAX_JETONS_DEFAUT].join(" * ");
    assert_eq!(
        evaluate_line(&ligne),
        Err(EvalError::TooManyTokens {
            count: 2 * MAX_JETONS_DEFAUT - 1,
            max: MAX_JETONS_DEFAUT,
        })
    );
}

#[test]
fn fuzz_safe_produit_long_reste_exact() {
    // (1/2)^200 : le dénominateur grossit sans déborder
    let ligne = vec!["1/2"; 200].join(" * ");
    let f: Fraction = evaluate_line(&ligne).unwrap();
    let attendu = BigRational::new(BigInt::from(1), BigInt::from(2).pow(200u32));
    assert_eq!(BigRational::from(&f), attendu);
}
