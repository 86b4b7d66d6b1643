/// Materialize a depot file revision locally via `p4 print`.
use std::ffi::OsStr;
use std::path::Path;

use super::client::{P4Client, ToolOutput};
use super::errors::{P4Error, describe_status};
use super::revision::Revision;

/// Revision-qualified depot reference, e.g. `//proj/a.txt#5`.
#[must_use]
pub fn revision_spec(depot_file: &str, revision: Revision) -> String {
    format!("{depot_file}#{revision}")
}

/// Write `depot_file` at `revision` to `local_file`.
///
/// Runs `p4 print -k -q -o <local_file> <depot_file>#<revision>`: no RCS
/// keyword expansion, no header line, raw content straight to the file.
///
/// The exit status of `p4 print` does not reliably tell whether the file was
/// written, so a non-zero status is only logged. Callers must check the file.
///
/// # Errors
///
/// Returns `Err(P4Error::Spawn)` if `p4` cannot be launched.
pub fn print_to_file(
    client: &P4Client,
    depot_file: &str,
    revision: Revision,
    local_file: &Path,
) -> Result<ToolOutput, P4Error> {
    let spec = revision_spec(depot_file, revision);
    let output = client.run_combined(&[
        OsStr::new("print"),
        OsStr::new("-k"),
        OsStr::new("-q"),
        OsStr::new("-o"),
        local_file.as_os_str(),
        OsStr::new(&spec),
    ])?;

    if !output.status.success() {
        tracing::warn!(
            status = %describe_status(output.status.code()),
            output = %output.text.trim_end(),
            "p4 print reported failure; checking for the file anyway"
        );
    }
    Ok(output)
}
