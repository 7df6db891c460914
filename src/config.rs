// src/config.rs
//
// Configuration du binaire (REPL + GUI), lue depuis un fichier TOML.
// Fichier absent ou illisible => valeurs par défaut (avec avertissement).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use calculatrice_fractions::noyau::eval::MAX_JETONS_DEFAUT;
use calculatrice_fractions::Limites;

/// Fichier cherché dans le répertoire courant si `--config` n’est pas donné.
pub const FICHIER_CONFIG: &str = "calculatrice_fractions.toml";

/// Fichier d’historique du REPL, dans le répertoire personnel.
const FICHIER_HISTORIQUE: &str = ".calculatrice_fractions_history";

/// Garde-fou : on borne la précision de la lecture décimale.
pub const CHIFFRES_MAX: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Invite du REPL.
    pub invite: String,
    /// Chiffres de la lecture décimale affichée après chaque résultat (0 = aucune).
    pub chiffres: usize,
    /// Nombre maximal de lexèmes par ligne.
    pub max_jetons: usize,
    /// Conserver l’historique du REPL entre deux sessions.
    pub historique: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            invite: "> ".to_string(),
            chiffres: 0,
            max_jetons: MAX_JETONS_DEFAUT,
            historique: true,
        }
    }
}

impl Config {
    pub fn load(chemin: Option<&Path>) -> Self {
        let path = chemin.unwrap_or_else(|| Path::new(FICHIER_CONFIG));

        if !path.exists() {
            if chemin.is_some() {
                warn!(path = %path.display(), "fichier de configuration introuvable, valeurs par défaut");
            }
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contenu) => match Self::depuis_toml(&contenu) {
                Ok(config) => {
                    debug!(path = %path.display(), ?config, "configuration chargée");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), "configuration invalide ({e}), valeurs par défaut");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), "lecture impossible ({e}), valeurs par défaut");
                Self::default()
            }
        }
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(texte)?;
        config.chiffres = config.chiffres.min(CHIFFRES_MAX);
        Ok(config)
    }

    pub fn limites(&self) -> Limites {
        Limites {
            max_jetons: self.max_jetons,
        }
    }

    /// ~/.calculatrice_fractions_history (ou répertoire courant sans $HOME).
    pub fn chemin_historique() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(FICHIER_HISTORIQUE))
            .unwrap_or_else(|| PathBuf::from(FICHIER_HISTORIQUE))
    }
}
