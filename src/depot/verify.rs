/// Local output file: clear it before the fetch, confirm it after.
use std::io::ErrorKind;
use std::path::Path;

use super::errors::FetchError;

/// Remove whatever sits at `local_file` before fetching into it.
///
/// A file left by an earlier run would otherwise satisfy
/// [`verify_produced`] even when this run wrote nothing.
///
/// # Errors
///
/// Returns `Err(FetchError::Stat)` if an existing file cannot be removed.
pub fn clear_target(local_file: &Path) -> Result<(), FetchError> {
    match std::fs::remove_file(local_file) {
        Ok(()) => {
            tracing::debug!(path = %local_file.display(), "removed previous file");
            Ok(())
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(FetchError::Stat {
            path: local_file.to_path_buf(),
            source,
            tool_output: String::new(),
        }),
    }
}

/// Confirm `local_file` was produced.
///
/// `tool_output` is the captured `p4 print` output, attached to the error
/// for diagnostics.
///
/// # Errors
///
/// Returns `Err(FetchError::NoOutputProduced)` if the file does not exist and
/// `Err(FetchError::Stat)` if its status cannot be read.
pub fn verify_produced(local_file: &Path, tool_output: &str) -> Result<(), FetchError> {
    match std::fs::metadata(local_file) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(FetchError::NoOutputProduced {
            path: local_file.to_path_buf(),
            tool_output: tool_output.to_owned(),
        }),
        Err(source) => Err(FetchError::Stat {
            path: local_file.to_path_buf(),
            source,
            tool_output: tool_output.to_owned(),
        }),
    }
}
