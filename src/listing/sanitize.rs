//! Path sanitization for the directory listing endpoint.
//!
//! Defense against path traversal: the input is lexically normalized,
//! any surviving `..` segment is rejected, and the result is made
//! absolute against the working directory. This is normalization, not
//! confinement — an absolute path with no traversal segment is honored
//! wherever it points.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::http::AppError;

/// Validate and normalize a user-supplied path.
///
/// The returned path is absolute and contains no `..` segment. Pure
/// function of its input and the current working directory; never
/// touches the filesystem.
pub fn sanitize_path(raw: &str) -> Result<PathBuf, AppError> {
    let normalized = normalize(Path::new(raw));

    if normalized
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(AppError::InvalidPath("path traversal not allowed".into()));
    }

    if normalized.is_absolute() {
        return Ok(normalized);
    }

    let cwd = env::current_dir()
        .map_err(|e| AppError::InvalidPath(format!("cannot resolve working directory: {e}")))?;
    if normalized.as_os_str() == "." {
        Ok(cwd)
    } else {
        Ok(cwd.join(normalized))
    }
}

/// Lexically normalize a path: drop `.` segments, collapse redundant
/// separators, and resolve `..` against preceding segments.
///
/// A `..` that has nothing to collapse against is kept when the path is
/// relative (the caller rejects it) and dropped at the root, matching
/// how the filesystem itself resolves `/..`.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component.as_os_str()),
            },
            Component::Normal(segment) => out.push(segment),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
