// src/main.rs
//
// Calculatrice fractions : point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// NATIF : REPL (par défaut), évaluation ponctuelle, auto-test, ou fenêtre egui (--gui)
// WEB   : eframe::WebRunner sur <canvas id="the_canvas_id">

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod config;
#[cfg(not(target_arch = "wasm32"))]
mod repl;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice fractions";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io;
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;
    use tracing::error;
    use tracing_subscriber::EnvFilter;

    use calculatrice_fractions::noyau::autotest::lancer_autotest;

    use super::{egui, AppCalc, TITRE_APP};
    use crate::config::Config;
    use crate::repl;

    /// Évalue des expressions de fractions mixtes (`w_n/d`, `n/d`, `w`) avec + - * /.
    ///
    /// Sans argument : REPL sur l’entrée standard.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    struct Args {
        /// Lignes à évaluer (une par argument), puis sortie.
        expressions: Vec<String>,

        /// Ouvre la fenêtre graphique.
        #[arg(long)]
        gui: bool,

        /// Rejoue les cas de référence et affiche PASS/FAIL.
        #[arg(long)]
        autotest: bool,

        /// Fichier de configuration TOML.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Journal plus bavard (-v : debug, -vv : trace).
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    }

    fn installer_journal(verbose: u8) {
        let defaut = match verbose {
            0 => "warn",
            1 => "calculatrice_fractions=debug",
            _ => "calculatrice_fractions=trace",
        };
        // RUST_LOG prime sur -v
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(io::stderr)
            .try_init();
    }

    fn lancer_gui(digits: usize) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([480.0, 680.0])
                .with_min_inner_size([400.0, 560.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::avec_digits(digits)))),
        )
    }

    /// Mode ponctuel : code 2 si au moins une ligne échoue.
    fn evaluer_arguments(expressions: &[String], config: &Config) -> ExitCode {
        let limites = config.limites();
        let mut echec = false;

        for ligne in expressions {
            match repl::rendre(ligne, &limites, config.chiffres) {
                Ok(sortie) => println!("{sortie}"),
                Err(e) => {
                    println!("{e}");
                    echec = true;
                }
            }
        }

        if echec {
            ExitCode::from(2)
        } else {
            ExitCode::SUCCESS
        }
    }

    pub fn main() -> ExitCode {
        let args = Args::parse();
        installer_journal(args.verbose);

        let config = Config::load(args.config.as_deref());

        if args.autotest {
            return match lancer_autotest(&mut io::stdout().lock()) {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => ExitCode::FAILURE,
                Err(e) => {
                    error!("auto-test interrompu: {e}");
                    ExitCode::FAILURE
                }
            };
        }

        if args.gui {
            return match lancer_gui(config.chiffres) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("fenêtre egui: {e}");
                    ExitCode::FAILURE
                }
            };
        }

        if !args.expressions.is_empty() {
            return evaluer_arguments(&args.expressions, &config);
        }

        match repl::lancer(&config) {
            Ok(code) => code,
            Err(e) => {
                error!("REPL: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_err("document indisponible"))?;
        document.set_title(TITRE_APP);

        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
