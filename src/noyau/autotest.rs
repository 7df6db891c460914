//! Auto-test intégré (`--autotest`).
//!
//! Rejoue une table de référence (ligne, réponse attendue) et imprime pour chaque cas :
//!
//! ```text
//! Testing "1/2 * 3_3/4" == "1_7/8"
//!      PASS
//! ```
//!
//! La réponse attendue peut être un message d’erreur : on compare ce que le REPL afficherait.

use std::io::{self, Write};

use super::eval::evaluate_line_display;

/// Cas de référence (ligne, affichage attendu).
pub const CAS_REFERENCE: &[(&str, &str)] = &[
    ("1/2 * 3_3/4", "1_7/8"),
    ("2_3/8 + 9/8", "3_1/2"),
    ("2_3/8 / 9/8", "2_1/9"),
    ("2 * 3 + 4 * 5", "26"),
    ("3_-1/2", "-3_1/2"),
    ("3_1/-2", "-3_1/2"),
    ("-3_1/2", "-3_1/2"),
    ("", "0"),
    ("9/8 woierjwe", "Unexpected token \"woierjwe\""),
    ("2_3/8 +", "Expected number after \"+\""),
    ("2_3/8 + +", "Unexpected operator \"+\""),
    ("2_3/8 9/8", "Unexpected number \"9/8\""),
    ("+ 9/8", "Unexpected operator \"+\""),
];

/// Lance les cas de référence ; renvoie `true` si tout passe.
pub fn lancer_autotest<W: Write>(out: &mut W) -> io::Result<bool> {
    lancer_cas(CAS_REFERENCE, out)
}

fn lancer_cas<W: Write>(cas: &[(&str, &str)], out: &mut W) -> io::Result<bool> {
    let mut tout_ok = true;

    for (ligne, attendu) in cas {
        writeln!(out, "Testing \"{ligne}\" == \"{attendu}\"")?;

        let obtenu = evaluate_line_display(ligne);
        if obtenu == *attendu {
            writeln!(out, "\t PASS")?;
        } else {
            writeln!(out, "\t FAIL (GOT \"{obtenu}\")")?;
            tout_ok = false;
        }
    }

    Ok(tout_ok)
}
