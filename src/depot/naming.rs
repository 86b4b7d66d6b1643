/// Local file naming: `<dir>/<name>#<rev><ext>`, the Perforce convention.
use std::path::{Component, Path, PathBuf};

use crate::p4::Revision;

/// Split a depot path into the base name without extension and the
/// extension (including the dot, possibly empty).
///
/// `//proj/dev/a.txt` → (`a`, `.txt`).
#[must_use]
pub fn split_depot_name(depot_file: &str) -> (&str, &str) {
    let base = depot_file
        .rfind(['/', '\\'])
        .map_or(depot_file, |i| &depot_file[i + 1..]);
    match base.rfind('.') {
        Some(dot) => base.split_at(dot),
        None => (base, ""),
    }
}

/// Compute the local file path for `depot_file` at `revision` in `local_dir`.
///
/// Depends on nothing but its three arguments.
#[must_use]
pub fn local_file_name(depot_file: &str, revision: Revision, local_dir: &Path) -> PathBuf {
    let (stem, ext) = split_depot_name(depot_file);
    local_dir.join(format!("{stem}#{revision}{ext}"))
}

/// Turn a user-supplied directory argument into a clean path.
///
/// Strips surrounding quote characters (left behind by some shells and
/// wrapper scripts), then cleans the path lexically.
#[must_use]
pub fn normalize_local_dir(raw: &str) -> PathBuf {
    clean_path(Path::new(raw.trim_matches(['"', '\''])))
}

/// Lexically clean a path: collapse repeated separators, drop `.`
/// components and trailing separators, fold `..` into a preceding normal
/// component. An empty result becomes `.`.
///
/// Never touches the filesystem.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`.
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
