//! # TriSolver CLI Application
//!
//! Line-oriented triangle solver. Each line names a configuration and three
//! values:
//!
//! ```text
//! -> SSS 3 4 5
//! -> SAS 3 90 4
//! -> ASA 30 2 60
//! -> SSA 6 8 30
//! -> bye
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see solver decisions.

mod repl;

use std::io;

use tracing::error;
use tracing_subscriber::EnvFilter;
use trisolver_core::SolverSettings;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let settings = SolverSettings::default();
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    if let Err(e) = repl::run_repl_with(&mut input, &mut out, &settings) {
        error!(code = e.error_code(), "session aborted");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
