/// Serializable output types.
///
/// These are what gets written for `--json`. Plain-text mode prints only the
/// local path on success.
use serde::{Deserialize, Serialize};

use crate::depot::FetchError;

/// A successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOutput {
    /// Always `true`.
    pub ok: bool,
    /// Local file path that was written (contains `#<revision>`).
    pub path: String,
    /// Depot file as given on the command line.
    pub depot_file: String,
    /// Revision that was fetched.
    pub revision: u64,
    /// Whether the revision was resolved from the depot head.
    pub head: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Captured `p4 print` output, if the fetch had run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_output: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `FetchError`.
    #[must_use]
    pub fn from_fetch_error(err: &FetchError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                tool_output: err
                    .tool_output()
                    .map(str::trim_end)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned),
            },
        }
    }
}
