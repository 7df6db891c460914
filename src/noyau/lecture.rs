// src/noyau/lecture.rs
//
// Lecture décimale tronquée d’un rationnel exact.
// Aucun flottant : on passe par un entier “scalé” (×10^digits).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let frac = frac_part.to_str_radix(10);
    format!("{signe}{int_part}.{frac:0>digits$}")
}

/// r -> entier “scalé” = trunc(r * 10^digits) (troncature vers zéro).
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    (r.numer() * pow10(digits)) / r.denom()
}

/// Lecture décimale tronquée de `r` à `digits` chiffres après la virgule.
pub fn lecture_decimale(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}
