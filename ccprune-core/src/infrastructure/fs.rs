// ccprune-core/src/infrastructure/fs.rs

use crate::domain::ports::FileRemover;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically normalizes `path`: drops `.` and folds `..` into its parent.
///
/// Symlinks are not resolved and nothing is read from disk, so the result is
/// stable for files that do not exist yet (manifest entries).
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` stays `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Absolute, normalized form of `path`, relative paths being taken from `base`.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Resolves the scan root against the process working directory.
pub fn resolve_root(root: &Path) -> io::Result<PathBuf> {
    if root.is_absolute() {
        return Ok(normalize(root));
    }
    let cwd = std::env::current_dir()?;
    Ok(absolutize(&cwd, root))
}

/// Plain `remove_file`. Each call is atomic on its own; there is no rollback.
pub struct FsRemover;

impl FileRemover for FsRemover {
    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}
