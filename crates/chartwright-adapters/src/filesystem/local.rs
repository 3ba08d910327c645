//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use chartwright_core::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem},
    },
    error::{ChartError, ChartResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Files are written with the process umask (normally `0644`), directories
/// are created on demand.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn stat(&self, path: &Path) -> ChartResult<Option<EntryKind>> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(path, e, "stat")),
        }
    }

    fn absolute(&self, path: &Path) -> ChartResult<PathBuf> {
        std::path::absolute(path).map_err(|e| map_io_error(path, e, "resolve"))
    }

    fn create_dir_all(&self, path: &Path) -> ChartResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ChartResult<()> {
        ensure_parent(path)?;
        trace!(path = %path.display(), bytes = content.len(), "write");
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &[u8]) -> ChartResult<()> {
        ensure_parent(path)?;
        trace!(path = %path.display(), bytes = content.len(), "append");
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(content))
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn read_file(&self, path: &Path) -> ChartResult<Vec<u8>> {
        fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn list_files(&self, root: &Path) -> ChartResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                map_io_error(&path, io::Error::other(e), "list directory")
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(root) {
                files.push(relative.to_path_buf());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn ensure_parent(path: &Path) -> ChartResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| map_io_error(parent, e, "create directory")),
        _ => Ok(()),
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ChartError {
    ApplicationError::io(path, operation, e).into()
}
