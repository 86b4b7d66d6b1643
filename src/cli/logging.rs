/// Diagnostic logging to stderr via `tracing`.
use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so stdout carries only the result line. The filter is
/// fixed by `--debug`; no environment variable is read.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(filter_directive(debug)))
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("installing log subscriber")
}

fn filter_directive(debug: bool) -> &'static str {
    if debug { "warn,p4fetch=debug" } else { "warn" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false), "warn");
        assert_eq!(filter_directive(true), "warn,p4fetch=debug");
    }
}
