//! Chart directory layout and the path checks shared by the services.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{
    application::{
        ApplicationError,
        ports::{Diagnostics, EntryKind, Filesystem},
    },
    error::ChartResult,
};

/// Chart descriptor file name.
pub const CHART_FILE: &str = "Chart.yaml";
/// Values document file name.
pub const VALUES_FILE: &str = "values.yaml";
/// Directory holding the rendered-at-install templates.
pub const TEMPLATES_DIR: &str = "templates";
/// Shared helpers file inside [`TEMPLATES_DIR`].
pub const HELPERS_FILE: &str = "_helpers.tpl";
/// Directory for chart dependencies.
pub const CHARTS_DIR: &str = "charts";

/// Resolve `path` and require it to be an existing directory.
pub(crate) fn ensure_output_dir(fs: &dyn Filesystem, path: &Path) -> ChartResult<PathBuf> {
    let absolute = fs.absolute(path)?;
    match fs.stat(&absolute)? {
        Some(EntryKind::Directory) => Ok(absolute),
        Some(EntryKind::File) => Err(ApplicationError::InvalidOutputPath {
            path: absolute,
            reason: "not a directory".into(),
        }
        .into()),
        None => Err(ApplicationError::InvalidOutputPath {
            path: absolute,
            reason: "no such directory".into(),
        }
        .into()),
    }
}

/// Fail with `PathConflict` when `dir` exists as a regular file.
pub(crate) fn ensure_not_file(fs: &dyn Filesystem, dir: &Path) -> ChartResult<()> {
    match fs.stat(dir)? {
        Some(EntryKind::File) => Err(ApplicationError::PathConflict {
            path: dir.to_path_buf(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Report an upcoming overwrite. Returns whether `path` already existed.
pub(crate) fn warn_if_exists(
    fs: &dyn Filesystem,
    diagnostics: &dyn Diagnostics,
    path: &Path,
) -> ChartResult<bool> {
    if fs.stat(path)?.is_none() {
        return Ok(false);
    }
    warn!(path = %path.display(), "overwriting existing file");
    diagnostics.warn(&format!(
        "WARNING: File {:?} already exists. Overwriting.",
        path.display().to_string()
    ));
    Ok(true)
}
