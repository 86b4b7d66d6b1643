#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! p4fetch: fetch a single Perforce depot file revision to a local path.

mod cli;
mod commands;
mod depot;
mod p4;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, init_logging, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.debug) {
        eprintln!("warning: {err:#}");
    }

    let ctx = OutputCtx::new(cli.json, cli.debug);

    let stdout = std::io::stdout();
    match commands::run(&cli, &ctx, &mut stdout.lock()) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = ?err, "fetch failed");
            let error_output = ErrorOutput::from_fetch_error(&err);
            write_error(&error_output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
