// src/repl.rs
//
// REPL : invite -> ligne -> résultat canonique ou message d’erreur tel quel.
// Fin d’entrée (Ctrl-D) ou Ctrl-C : on sort avec un code NON nul.

use std::process::ExitCode;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use calculatrice_fractions::{evaluate_line_with, EvalError, Limites};

use crate::config::Config;

/// Ce qu’on affiche pour une ligne : la forme canonique (suivie de la lecture
/// décimale si `chiffres > 0`), ou l’erreur.
pub fn rendre(line: &str, limites: &Limites, chiffres: usize) -> Result<String, EvalError> {
    let f = evaluate_line_with(line, limites)?;
    if chiffres == 0 {
        Ok(f.to_string())
    } else {
        Ok(format!("{f} ({})", f.lecture_decimale(chiffres)))
    }
}

pub fn lancer(config: &Config) -> rustyline::Result<ExitCode> {
    let rl_config = rustyline::Config::builder()
        .max_history_size(100)?
        .auto_add_history(false)
        .build();
    let mut rl = DefaultEditor::with_config(rl_config)?;

    let historique = config.historique.then(Config::chemin_historique);
    if let Some(path) = &historique {
        // premier lancement : pas encore de fichier
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path.display(), "historique non chargé: {e}");
        }
    }

    let limites = config.limites();

    let resultat = loop {
        match rl.readline(&config.invite) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                match rendre(&line, &limites, config.chiffres) {
                    Ok(sortie) => println!("{sortie}"),
                    Err(e) => println!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("fin de l’entrée");
                break Ok(ExitCode::FAILURE);
            }
            Err(err) => break Err(err),
        }
    };

    if let Some(path) = &historique {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), "historique non sauvegardé: {e}");
        }
    }

    resultat
}
