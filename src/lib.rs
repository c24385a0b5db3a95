pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod project_identity;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

use clap::Parser;
use std::process::exit;

/// Run shacnify CLI entrypoint.
pub fn run_cli() {
    // 1. Signal handling: an open prompt returns as cancelled, anything else exits
    ctrlc::set_handler(move || {
        ui::mark_interrupted();
        if ui::prompt_active() {
            return;
        }
        eprintln!();
        ui::warning("Operation cancelled by user.");
        exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
