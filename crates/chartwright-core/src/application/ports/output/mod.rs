//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `chartwright-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Chart, ValueMap};
use crate::error::ChartResult;

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `chartwright_adapters::filesystem::LocalFilesystem` (production)
/// - `chartwright_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_file` and `append_file` create missing parent directories
/// - `write_file` truncates, `append_file` creates or extends
/// - Calls block; there is no locking between concurrent writers
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// `None` when nothing exists at `path`.
    fn stat(&self, path: &Path) -> ChartResult<Option<EntryKind>>;

    /// Absolute form of `path`, without resolving symlinks.
    fn absolute(&self, path: &Path) -> ChartResult<PathBuf>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ChartResult<()>;

    /// Replace the contents of a file.
    fn write_file(&self, path: &Path, content: &[u8]) -> ChartResult<()>;

    /// Append to a file.
    fn append_file(&self, path: &Path, content: &[u8]) -> ChartResult<()>;

    /// Read a whole file.
    fn read_file(&self, path: &Path) -> ChartResult<Vec<u8>>;

    /// Every regular file below `root`, relative to `root`, sorted.
    fn list_files(&self, root: &Path) -> ChartResult<Vec<PathBuf>>;
}

/// Port for the structured configuration format of values documents.
#[cfg_attr(test, mockall::automock)]
pub trait ValuesCodec: Send + Sync {
    /// Serialize a values mapping, keeping key order.
    fn marshal(&self, values: &ValueMap) -> ChartResult<String>;

    /// Parse a values document. An empty document is an empty mapping.
    fn unmarshal(&self, text: &str) -> ChartResult<ValueMap>;
}

/// Port for loading and saving whole charts.
///
/// Implemented by:
/// - `chartwright_adapters::chart_store::FsChartStore`
#[cfg_attr(test, mockall::automock)]
pub trait ChartStore: Send + Sync {
    /// Load the chart rooted at `path`.
    fn load(&self, path: &Path) -> ChartResult<Chart>;

    /// Write `chart` to `dest/<chart name>/`, returning that directory.
    fn save_dir(&self, chart: &Chart, dest: &Path) -> ChartResult<PathBuf>;
}

/// Sink for non-fatal diagnostics such as overwrite warnings.
///
/// Implemented by:
/// - `chartwright_adapters::diagnostics::WriterDiagnostics` (stderr by default)
/// - `chartwright_adapters::diagnostics::MemoryDiagnostics` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);
}
