/// Search-path lookup of the `p4` client binary.
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::errors::P4Error;

/// Resolve `program` to an executable path.
///
/// A value containing a path separator is checked as-is. A bare name is
/// searched for in each entry of `search_path` (the `PATH` value), trying
/// the platform's executable extensions on Windows.
///
/// # Errors
///
/// Returns `Err(P4Error::NotFound)` if no executable file matches.
pub fn locate(program: &str, search_path: Option<&OsStr>) -> Result<PathBuf, P4Error> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return if is_executable(candidate) {
            Ok(candidate.to_path_buf())
        } else {
            Err(P4Error::NotFound {
                program: program.to_owned(),
                searched: Vec::new(),
            })
        };
    }

    let dirs: Vec<PathBuf> = search_path
        .map(|p| std::env::split_paths(p).collect())
        .unwrap_or_default();

    for dir in &dirs {
        // An empty PATH entry means the current directory.
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir.as_path()
        };
        for name in executable_names(program) {
            let full = dir.join(&name);
            if is_executable(&full) {
                return Ok(full);
            }
        }
    }

    Err(P4Error::NotFound {
        program: program.to_owned(),
        searched: dirs,
    })
}

/// Resolve `program` against the current process `PATH`.
///
/// # Errors
///
/// Returns `Err(P4Error::NotFound)` if no executable file matches.
pub fn locate_on_path(program: &str) -> Result<PathBuf, P4Error> {
    let path = std::env::var_os("PATH");
    locate(program, path.as_deref())
}

#[cfg(windows)]
fn executable_names(program: &str) -> Vec<String> {
    if Path::new(program).extension().is_some() {
        return vec![program.to_owned()];
    }
    [".exe", ".bat", ".cmd", ""]
        .iter()
        .map(|ext| format!("{program}{ext}"))
        .collect()
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> Vec<String> {
    vec![program.to_owned()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}
