//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chartwright_core::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem},
    },
    error::ChartResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and
/// inspect the other.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug)]
struct MemoryFilesystemInner {
    cwd: PathBuf,
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    failing: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new memory filesystem containing only `/`.
    pub fn new() -> Self {
        let root = PathBuf::from("/");
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner {
                cwd: root.clone(),
                files: BTreeMap::new(),
                directories: BTreeSet::from([root]),
                failing: BTreeSet::new(),
            })),
        }
    }

    /// Builder: create `path` and its parents.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dirs(path.as_ref());
        }
        self
    }

    /// Builder: resolve relative paths against `cwd`.
    pub fn with_cwd(self, cwd: impl Into<PathBuf>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.cwd = cwd.into();
        }
        self
    }

    /// Make every write or append to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failing.insert(path.into());
        }
    }

    /// A file's content as text (testing helper).
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path.as_ref())
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    /// All file paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents except `/`.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.files.clear();
            inner.directories.retain(|d| d.parent().is_none());
            inner.failing.clear();
        }
    }

    fn read(&self) -> ChartResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> ChartResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn add_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    /// Prepare `path` for writing: reject injected failures and file
    /// ancestors, then create the parent directories.
    fn prepare_write(&mut self, path: &Path, operation: &'static str) -> ChartResult<()> {
        if self.failing.contains(path) {
            return Err(ApplicationError::io(path, operation, "injected failure").into());
        }
        if self.directories.contains(path) {
            return Err(ApplicationError::io(path, operation, "is a directory").into());
        }
        if let Some(blocker) = path.ancestors().skip(1).find(|a| self.files.contains_key(*a)) {
            return Err(ApplicationError::io(
                path,
                operation,
                format!("{} is not a directory", blocker.display()),
            )
            .into());
        }
        if let Some(parent) = path.parent() {
            self.add_dirs(parent);
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn stat(&self, path: &Path) -> ChartResult<Option<EntryKind>> {
        let inner = self.read()?;
        Ok(if inner.directories.contains(path) {
            Some(EntryKind::Directory)
        } else if inner.files.contains_key(path) {
            Some(EntryKind::File)
        } else {
            None
        })
    }

    fn absolute(&self, path: &Path) -> ChartResult<PathBuf> {
        let inner = self.read()?;
        let joined = inner.cwd.join(path);
        // Lexical normalization, like std::path::absolute on Unix.
        let mut out = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                other => out.push(other),
            }
        }
        Ok(out)
    }

    fn create_dir_all(&self, path: &Path) -> ChartResult<()> {
        let mut inner = self.write()?;
        if let Some(blocker) = path.ancestors().find(|a| inner.files.contains_key(*a)) {
            return Err(ApplicationError::io(
                path,
                "create directory",
                format!("{} is a file", blocker.display()),
            )
            .into());
        }
        inner.add_dirs(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ChartResult<()> {
        let mut inner = self.write()?;
        inner.prepare_write(path, "write file")?;
        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &[u8]) -> ChartResult<()> {
        let mut inner = self.write()?;
        inner.prepare_write(path, "append to file")?;
        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(content);
        Ok(())
    }

    fn read_file(&self, path: &Path) -> ChartResult<Vec<u8>> {
        let inner = self.read()?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ApplicationError::io(path, "read file", "no such file").into())
    }

    fn list_files(&self, root: &Path) -> ChartResult<Vec<PathBuf>> {
        let inner = self.read()?;
        Ok(inner
            .files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .collect())
    }
}
