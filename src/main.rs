// src/main.rs
//
// π hexadécimal (BBP) — point d’entrée
// ------------------------------------
// Aucun argument : 85 chiffres, queue de 20 termes, progression tous les 10.
// Journal sur stderr (RUST_LOG), résultat sur stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use chiffres_pi::app::{self, Parametres};

fn main() -> ExitCode {
    app::installer_journal();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match app::executer_pi_hex(&mut out, &Parametres::default()).and_then(|()| Ok(out.flush()?)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
