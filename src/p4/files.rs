/// Head revision lookup via `p4 files`.
use std::ffi::OsStr;

use super::client::P4Client;
use super::errors::P4Error;
use super::revision::{ParseRevisionError, Revision};

const REVISION_MARK: &str = "#";
const DESCRIPTION_MARK: &str = " - ";

/// Ask the depot for the head revision of `depot_file`.
///
/// # Errors
///
/// Returns `Err(P4Error::Spawn | P4Error::ExitStatus)` if `p4 files` cannot
/// run or fails, and `Err(P4Error::Format)` if its response is unreadable.
pub fn head_revision(client: &P4Client, depot_file: &str) -> Result<Revision, P4Error> {
    let response = client.run_stdout(&[OsStr::new("files"), OsStr::new(depot_file)])?;
    tracing::debug!(response = %response.trim_end(), "p4 files response");
    parse_head_revision(&response)
}

/// Extract the revision number from a `p4 files` response line.
///
/// The response looks like
/// `//Project/dev/afile.txt#8 - edit change 4924099 (utf16)`. The number is
/// the text strictly between the last `#` and the last ` - `.
///
/// # Errors
///
/// Returns `Err(P4Error::Format)` if either marker is missing, they are out
/// of order, or the text between them is not a positive integer.
pub fn parse_head_revision(response: &str) -> Result<Revision, P4Error> {
    let format_error = |reason: &str| P4Error::Format {
        response: response.to_owned(),
        reason: reason.to_owned(),
    };

    let hash = response
        .rfind(REVISION_MARK)
        .ok_or_else(|| format_error("no '#' revision marker"))?;
    let dash = response
        .rfind(DESCRIPTION_MARK)
        .ok_or_else(|| format_error("no ' - ' separator"))?;

    let start = hash + REVISION_MARK.len();
    if start >= dash {
        return Err(format_error("'#' does not precede ' - '"));
    }

    response[start..dash]
        .parse()
        .map_err(|e: ParseRevisionError| format_error(&e.to_string()))
}
