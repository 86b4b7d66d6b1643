/// The fetch request built from command-line input.
use std::path::{Path, PathBuf};

use super::naming::normalize_local_dir;
use crate::p4::Revision;

/// Which revision to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionSpec {
    /// Ask the depot for the head revision first.
    Head,
    /// Fetch exactly this revision; no depot query needed.
    Exact(Revision),
}

impl From<Option<Revision>> for RevisionSpec {
    fn from(revision: Option<Revision>) -> Self {
        revision.map_or(Self::Head, Self::Exact)
    }
}

/// One depot file to fetch into one local directory. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    depot_file: String,
    local_dir: PathBuf,
    user: Option<String>,
    revision: RevisionSpec,
}

impl FetchRequest {
    /// Build a request, normalizing the raw local directory argument.
    #[must_use]
    pub fn new(
        depot_file: impl Into<String>,
        local_dir: &str,
        user: Option<String>,
        revision: RevisionSpec,
    ) -> Self {
        Self {
            depot_file: depot_file.into(),
            local_dir: normalize_local_dir(local_dir),
            user: user.filter(|u| !u.is_empty()),
            revision,
        }
    }

    #[must_use]
    pub fn depot_file(&self) -> &str {
        &self.depot_file
    }

    #[must_use]
    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    #[must_use]
    pub fn revision(&self) -> RevisionSpec {
        self.revision
    }
}
