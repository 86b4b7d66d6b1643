/// Errors from the fetch pipeline.
use std::path::PathBuf;

use thiserror::Error;

use crate::p4::P4Error;

/// Everything that can abort a fetch. The first error ends the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The `p4` binary is not installed or not on `PATH`.
    #[error("p4 command line is not installed - {0}")]
    ToolNotFound(#[source] P4Error),

    /// `p4` could not be launched, or exited with a trusted failure status.
    #[error("p4 command line error - {0}")]
    ToolInvocation(#[source] P4Error),

    /// `p4` answered with text we could not read a revision from.
    #[error("{0}")]
    Format(#[source] P4Error),

    /// `p4 print` finished but the local file is not there.
    #[error("no file produced at '{}'", path.display())]
    NoOutputProduced {
        /// The local path that should have been written.
        path: PathBuf,
        /// Captured output of `p4 print`.
        tool_output: String,
    },

    /// The local file may exist but its status cannot be read.
    #[error("can't access the status of file produced at '{}': {source}", path.display())]
    Stat {
        /// The local path that should have been written.
        path: PathBuf,
        #[source]
        source: std::io::Error,
        /// Captured output of `p4 print`.
        tool_output: String,
    },
}

impl From<P4Error> for FetchError {
    fn from(err: P4Error) -> Self {
        match err {
            P4Error::NotFound { .. } => Self::ToolNotFound(err),
            P4Error::Spawn { .. } | P4Error::ExitStatus { .. } => Self::ToolInvocation(err),
            P4Error::Format { .. } => Self::Format(err),
        }
    }
}

impl FetchError {
    /// Return the CLI exit code for this error.
    ///
    /// Only "non-zero" is a stable promise; the individual values may change.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoOutputProduced { .. } | Self::Stat { .. } => 1,
            Self::ToolNotFound(_) => 3,
            Self::ToolInvocation(_) => 4,
            Self::Format(_) => 5,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ToolNotFound(_) => "tool_not_found",
            Self::ToolInvocation(_) => "tool_invocation_failed",
            Self::Format(_) => "format_error",
            Self::NoOutputProduced { .. } => "no_output_produced",
            Self::Stat { .. } => "stat_error",
        }
    }

    /// Captured `p4 print` output, when the error came after the fetch ran.
    #[must_use]
    pub fn tool_output(&self) -> Option<&str> {
        match self {
            Self::NoOutputProduced { tool_output, .. } | Self::Stat { tool_output, .. } => {
                Some(tool_output.as_str())
            }
            _ => None,
        }
    }
}
