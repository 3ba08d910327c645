//! Chart directory store.
//!
//! Loads a chart directory into a [`Chart`] and writes one back out:
//!
//! ```text
//! <chart>/
//! ├── Chart.yaml       → Chart::metadata
//! ├── values.yaml      → Chart::values (parsed) and Chart::raw (as read)
//! ├── templates/**     → Chart::templates
//! └── everything else  → Chart::raw
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use chartwright_core::{
    application::{
        ApplicationError,
        ports::{ChartStore, EntryKind, Filesystem, ValuesCodec},
        services::{CHART_FILE, TEMPLATES_DIR, VALUES_FILE},
    },
    domain::{Chart, ChartFile, ChartMetadata, DomainError},
    error::ChartResult,
};

use crate::codec::YamlCodec;

/// [`ChartStore`] over a [`Filesystem`].
pub struct FsChartStore {
    filesystem: Box<dyn Filesystem>,
    codec: YamlCodec,
}

impl FsChartStore {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            codec: YamlCodec::new(),
        }
    }

    fn load_metadata(&self, root: &Path) -> ChartResult<ChartMetadata> {
        let chart_file = root.join(CHART_FILE);
        if self.filesystem.stat(&chart_file)? != Some(EntryKind::File) {
            return Err(load_error(root, format!("{CHART_FILE} not found")));
        }
        let data = self.filesystem.read_file(&chart_file)?;
        serde_yaml::from_slice(&data)
            .map_err(|e| load_error(root, format!("invalid {CHART_FILE}: {e}")))
    }
}

impl ChartStore for FsChartStore {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> ChartResult<Chart> {
        let root = self.filesystem.absolute(path)?;
        if self.filesystem.stat(&root)? != Some(EntryKind::Directory) {
            return Err(load_error(&root, "not a directory".to_string()));
        }

        let metadata = self.load_metadata(&root)?;
        if metadata.deprecated {
            return Err(DomainError::InvalidChart(format!(
                "chart {:?} is deprecated",
                metadata.name
            ))
            .into());
        }

        let mut chart = Chart::new(metadata);
        for relative in self.filesystem.list_files(&root)? {
            let name = entry_name(&relative);
            if name == CHART_FILE {
                continue;
            }
            let data = self.filesystem.read_file(&root.join(&relative))?;
            if name == VALUES_FILE {
                chart.values = self
                    .codec
                    .unmarshal(&String::from_utf8_lossy(&data))
                    .map_err(|e| load_error(&root, e.to_string()))?;
            }

            let file = ChartFile::new(name, data);
            if file.name.starts_with(&format!("{TEMPLATES_DIR}/")) {
                chart.templates.push(file);
            } else {
                chart.raw.push(file);
            }
        }

        debug!(
            chart = %chart.name(),
            templates = chart.templates.len(),
            raw = chart.raw.len(),
            "chart loaded"
        );
        Ok(chart)
    }

    #[instrument(skip_all, fields(chart = %chart.name(), dest = %dest.display()))]
    fn save_dir(&self, chart: &Chart, dest: &Path) -> ChartResult<PathBuf> {
        chart.metadata.validate()?;

        let dir = self.filesystem.absolute(dest)?.join(chart.name());
        if self.filesystem.stat(&dir)? == Some(EntryKind::File) {
            return Err(ApplicationError::PathConflict { path: dir }.into());
        }
        self.filesystem.create_dir_all(&dir)?;

        let descriptor =
            serde_yaml::to_string(&chart.metadata).map_err(|e| ApplicationError::Serialization {
                reason: e.to_string(),
            })?;
        self.filesystem
            .write_file(&dir.join(CHART_FILE), descriptor.as_bytes())?;

        // The raw copy keeps comments; fall back to the parsed mapping.
        if chart.raw_file(VALUES_FILE).is_none() && !chart.values.is_empty() {
            let values = self.codec.marshal(&chart.values)?;
            self.filesystem
                .write_file(&dir.join(VALUES_FILE), values.as_bytes())?;
        }

        for file in chart.templates.iter().chain(&chart.raw) {
            self.filesystem.write_file(&dir.join(&file.name), &file.data)?;
        }

        debug!(dir = %dir.display(), "chart saved");
        Ok(dir)
    }
}

/// `/`-separated name of a path relative to the chart root.
fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn load_error(path: &Path, reason: String) -> chartwright_core::error::ChartError {
    ApplicationError::ChartLoad {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
