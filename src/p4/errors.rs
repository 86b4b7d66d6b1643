/// Errors from the `p4` client layer.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Typed errors from invoking or parsing the `p4` command-line client.
#[derive(Debug, Error)]
pub enum P4Error {
    /// The client binary could not be found on the search path.
    #[error("'{program}' not found{}", searched_hint(.searched))]
    NotFound {
        /// The program name or path that was looked up.
        program: String,
        /// Directories that were searched, in order.
        searched: Vec<PathBuf>,
    },

    /// The process could not be launched at all.
    #[error("cannot run `{command}`: {source}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The process ran but reported failure, and the exit status is trusted.
    #[error("`{command}` failed with {}{}", describe_status(.status.code()), stderr_hint(.stderr))]
    ExitStatus {
        /// Rendered command line.
        command: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error, lossily decoded.
        stderr: String,
    },

    /// The textual response did not match the expected shape.
    #[error("format error in p4 response ({reason}): {}", .response.trim_end())]
    Format {
        /// The raw response text.
        response: String,
        /// What was wrong with it.
        reason: String,
    },
}

fn searched_hint(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        String::new()
    } else {
        format!(" on PATH ({} entries searched)", searched.len())
    }
}

fn stderr_hint(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

/// Render an exit status (its code, or `None` for a signal) the way a user
/// expects to read it.
#[must_use]
pub fn describe_status(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_owned(),
    }
}
