//! Calculatrice de fractions mixtes (`w_n/d`, `n/d`, `w`) en arithmétique exacte.
//!
//! ```
//! use calculatrice_fractions::evaluate_line;
//!
//! let r = evaluate_line("1/2 * 3_3/4").unwrap();
//! assert_eq!(r.to_string(), "1_7/8");
//! ```

pub mod noyau;

pub use noyau::{
    evaluate_line, evaluate_line_display, evaluate_line_with, parse_number, EvalError, Fraction,
    Limites,
};
