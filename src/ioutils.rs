use std::path::{Component, Path, PathBuf};

use crate::constants::GIT_DIR;
use crate::error::{Error, Result};

/// Reduces a project name to a path relative to the working directory.
///
/// Roots, drive prefixes and `.` are dropped; `..` and names with nothing
/// left are rejected with [`Error::InvalidProjectName`].
pub fn relative_project_path(name: &str) -> Result<PathBuf> {
    let invalid = || Error::InvalidProjectName { name: name.to_string() };
    let mut relative = PathBuf::new();

    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            Component::ParentDir => return Err(invalid()),
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(invalid());
    }
    Ok(relative)
}

/// Joins the project name onto the working directory. The result always
/// lies below `cwd`.
pub fn target_path<P: AsRef<Path>>(cwd: P, name: &str) -> Result<PathBuf> {
    Ok(cwd.as_ref().join(relative_project_path(name)?))
}

/// Fails with [`Error::DirectoryExists`] when anything is present at `path`.
///
/// Dangling symlinks count as present.
pub fn ensure_absent<P: AsRef<Path>>(path: P, name: &str) -> Result<()> {
    let path = path.as_ref();
    if path.symlink_metadata().is_ok() {
        return Err(Error::DirectoryExists {
            name: name.to_string(),
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// Recursively removes the `.git` directory under `project_dir`.
///
/// A clone without metadata is left as is.
pub fn remove_git_metadata<P: AsRef<Path>>(project_dir: P) -> Result<()> {
    let git_dir = project_dir.as_ref().join(GIT_DIR);
    if !git_dir.exists() {
        log::debug!("No '{}' to remove", git_dir.display());
        return Ok(());
    }
    log::debug!("Removing '{}'", git_dir.display());
    std::fs::remove_dir_all(&git_dir).map_err(|e| {
        Error::UnknownFailure(format!("Failed to remove '{}': {e}", git_dir.display()))
    })
}
