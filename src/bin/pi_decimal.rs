// src/bin/pi_decimal.rs
//
// π à 100 décimales : série BBP sommée exactement (BigRational).

use std::io::{self, Write};
use std::process::ExitCode;

use chiffres_pi::app;

fn main() -> ExitCode {
    app::installer_journal();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match app::executer_pi_decimal(&mut out).and_then(|()| Ok(out.flush()?)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
