/// CLI layer: argument parsing, logging setup and output formatting.
pub mod args;
pub mod logging;
pub mod output;

pub use args::Cli;
pub use logging::init_logging;
pub use output::{OutputCtx, write_error};
