// src/app/journal.rs
//
// Journal (tracing) sur stderr. Le niveau vient de -v, pas d’une variable
// d’environnement.

use tracing_subscriber::filter::EnvFilter;

/// -v compté -> directive de filtre.
pub fn niveau(verbosite: u8) -> &'static str {
    match verbosite {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installe l’abonné global. Sans effet si un abonné existe déjà.
pub fn initialiser(verbosite: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(niveau(verbosite)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
