// src/bin/division_1_11.rs
//
// 1/11 par division longue : 100 chiffres décimaux, arrêt si reste nul.

use std::io::{self, Write};
use std::process::ExitCode;

use chiffres_pi::app;

fn main() -> ExitCode {
    app::installer_journal();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match app::executer_division(&mut out).and_then(|()| Ok(out.flush()?)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
