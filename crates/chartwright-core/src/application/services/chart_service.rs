//! Chart Service - single-chart creation.
//!
//! Two entry points:
//! - [`ChartService::create`] writes the standard starter chart
//! - [`ChartService::create_from`] copies an existing chart under new metadata

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{ChartStore, Diagnostics, Filesystem, ValuesCodec},
        services::layout::{
            CHART_FILE, CHARTS_DIR, VALUES_FILE, ensure_not_file, ensure_output_dir,
            warn_if_exists,
        },
    },
    domain::{
        ChartMetadata, DEFAULT_CHART_VERSION, Placeholder, TemplateRegistry, substitute_chart_name,
        validate_name,
    },
    error::ChartResult,
};

/// Creates standalone charts.
pub struct ChartService {
    filesystem: Box<dyn Filesystem>,
    codec: Box<dyn ValuesCodec>,
    store: Box<dyn ChartStore>,
    diagnostics: Box<dyn Diagnostics>,
    registry: Arc<TemplateRegistry>,
}

impl ChartService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        codec: Box<dyn ValuesCodec>,
        store: Box<dyn ChartStore>,
        diagnostics: Box<dyn Diagnostics>,
        registry: Arc<TemplateRegistry>,
    ) -> Self {
        Self {
            filesystem,
            codec,
            store,
            diagnostics,
            registry,
        }
    }

    /// Write the starter chart `name` under `dest` and return its directory.
    ///
    /// `dest` must already exist. Files already present are overwritten,
    /// with a warning for each.
    #[instrument(skip_all, fields(chart = %name, dest = %dest.display()))]
    pub fn create(&self, name: &str, dest: &Path) -> ChartResult<PathBuf> {
        validate_name(name)?;

        let base = ensure_output_dir(self.filesystem.as_ref(), dest)?;
        let chart_dir = base.join(name);
        ensure_not_file(self.filesystem.as_ref(), &chart_dir)?;

        let descriptor = Placeholder::ChartVersion.apply(
            &substitute_chart_name(self.registry.chart_file(), name),
            DEFAULT_CHART_VERSION,
        );
        self.write_checked(&chart_dir.join(CHART_FILE), &descriptor)?;

        for file in self.registry.starter_files() {
            let path = chart_dir.join(&file.path);
            self.write_checked(&path, &substitute_chart_name(&file.body, name))?;
        }

        self.filesystem.create_dir_all(&chart_dir.join(CHARTS_DIR))?;

        info!(
            chart_dir = %chart_dir.display(),
            files = self.registry.starter_files().len() + 1,
            "Chart created"
        );
        Ok(chart_dir)
    }

    /// Copy the chart at `src` to `dest/<metadata.name>` under new metadata.
    ///
    /// `<CHARTNAME>` in templates and values is replaced by the new name.
    #[instrument(
        skip_all,
        fields(chart = %metadata.name, dest = %dest.display(), src = %src.display())
    )]
    pub fn create_from(
        &self,
        metadata: ChartMetadata,
        dest: &Path,
        src: &Path,
    ) -> ChartResult<PathBuf> {
        metadata.validate()?;

        let mut chart = self.store.load(src)?;
        chart.metadata = metadata;
        let name = chart.name().to_string();

        for template in &mut chart.templates {
            let data = substitute_chart_name(&template.text(), &name).into_bytes();
            template.data = data;
        }

        let serialized = self.codec.marshal(&chart.values)?;
        chart.values = self
            .codec
            .unmarshal(&substitute_chart_name(&serialized, &name))?;

        if let Some(raw) = chart.raw_file_mut(VALUES_FILE) {
            let data = substitute_chart_name(&raw.text(), &name).into_bytes();
            raw.data = data;
        }

        debug!(templates = chart.templates.len(), "Chart rewritten");
        let chart_dir = self.store.save_dir(&chart, dest)?;
        info!(chart_dir = %chart_dir.display(), "Chart derived");
        Ok(chart_dir)
    }

    fn write_checked(&self, path: &Path, content: &str) -> ChartResult<()> {
        warn_if_exists(self.filesystem.as_ref(), self.diagnostics.as_ref(), path)?;
        self.filesystem.write_file(path, content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::application::ports::{
        EntryKind,
        output::{MockChartStore, MockDiagnostics, MockFilesystem, MockValuesCodec},
    };
    use crate::domain::{Chart, ChartFile, StarterFile, Value, ValueMap};

    type Written = Arc<Mutex<Vec<(PathBuf, String)>>>;

    fn registry() -> Arc<TemplateRegistry> {
        Arc::new(
            TemplateRegistry::builder()
                .chart_file("name: <CHARTNAME>\nversion: <CHARTVERSION>\n")
                .starter_file(StarterFile::new("values.yaml", "# values for <CHARTNAME>\n"))
                .starter_file(StarterFile::new(
                    "templates/service.yaml",
                    "name: {{ include \"<CHARTNAME>.fullname\" . }}\n",
                ))
                .build(),
        )
    }

    fn fs_with_existing(existing: &'static [&'static str], written: Written) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_absolute()
            .returning(|p: &Path| Ok(p.to_path_buf()));
        fs.expect_stat().returning(move |p: &Path| {
            Ok(if p == Path::new("/out") {
                Some(EntryKind::Directory)
            } else if existing.iter().any(|e| p.ends_with(e)) {
                Some(EntryKind::File)
            } else {
                None
            })
        });
        fs.expect_write_file().returning(move |p: &Path, c: &[u8]| {
            written
                .lock()
                .unwrap()
                .push((p.to_path_buf(), String::from_utf8_lossy(c).into_owned()));
            Ok(())
        });
        fs.expect_create_dir_all()
            .withf(|p: &Path| p == Path::new("/out/mychart/charts"))
            .times(1)
            .returning(|_: &Path| Ok(()));
        fs
    }

    fn silent_diagnostics() -> MockDiagnostics {
        let mut d = MockDiagnostics::new();
        d.expect_warn().never();
        d
    }

    fn service_with(
        fs: MockFilesystem,
        codec: MockValuesCodec,
        store: MockChartStore,
        diagnostics: MockDiagnostics,
    ) -> ChartService {
        ChartService::new(
            Box::new(fs),
            Box::new(codec),
            Box::new(store),
            Box::new(diagnostics),
            registry(),
        )
    }

    #[test]
    fn create_writes_starter_files_with_name() {
        let written: Written = Arc::default();
        let svc = service_with(
            fs_with_existing(&[], Arc::clone(&written)),
            MockValuesCodec::new(),
            MockChartStore::new(),
            silent_diagnostics(),
        );

        let dir = svc.create("mychart", Path::new("/out")).unwrap();
        assert_eq!(dir, Path::new("/out/mychart"));

        let written = written.lock().unwrap();
        let paths: Vec<_> = written.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("/out/mychart/Chart.yaml"),
                PathBuf::from("/out/mychart/values.yaml"),
                PathBuf::from("/out/mychart/templates/service.yaml"),
            ]
        );
        assert_eq!(written[0].1, "name: mychart\nversion: 0.1.0\n");
        assert!(written[2].1.contains("\"mychart.fullname\""));
        assert!(written.iter().all(|(_, c)| !c.contains("<CHARTNAME>")));
    }

    #[test]
    fn create_warns_on_existing_files() {
        let mut diagnostics = MockDiagnostics::new();
        diagnostics
            .expect_warn()
            .withf(|m: &str| m.starts_with("WARNING: File") && m.contains("values.yaml"))
            .times(1)
            .return_const(());

        let svc = service_with(
            fs_with_existing(&["values.yaml"], Arc::default()),
            MockValuesCodec::new(),
            MockChartStore::new(),
            diagnostics,
        );
        svc.create("mychart", Path::new("/out")).unwrap();
    }

    #[test]
    fn create_rejects_invalid_name() {
        let svc = service_with(
            MockFilesystem::new(),
            MockValuesCodec::new(),
            MockChartStore::new(),
            silent_diagnostics(),
        );
        assert!(svc.create("my chart", Path::new("/out")).unwrap_err().is_invalid_name());
    }

    #[test]
    fn create_rejects_missing_destination() {
        let mut fs = MockFilesystem::new();
        fs.expect_absolute()
            .returning(|p: &Path| Ok(p.to_path_buf()));
        fs.expect_stat().returning(|_: &Path| Ok(None));
        fs.expect_write_file().never();

        let svc = service_with(
            fs,
            MockValuesCodec::new(),
            MockChartStore::new(),
            silent_diagnostics(),
        );
        let err = svc.create("mychart", Path::new("/out")).unwrap_err();
        assert!(err.is_invalid_output_path());
    }

    fn source_chart() -> Chart {
        let mut chart = Chart::new(ChartMetadata::new("<CHARTNAME>"));
        chart.templates.push(ChartFile::new(
            "templates/deployment.yaml",
            "name: {{ template \"<CHARTNAME>.fullname\" . }}\n",
        ));
        chart.values = ValueMap::new().with("nameOverride", "<CHARTNAME>");
        chart.raw.push(ChartFile::new(
            "values.yaml",
            "# Default values for <CHARTNAME>.\nnameOverride: <CHARTNAME>\n",
        ));
        chart.raw.push(ChartFile::new(".helmignore", ".git/\n"));
        chart
    }

    fn echo_codec() -> MockValuesCodec {
        let mut codec = MockValuesCodec::new();
        codec.expect_marshal().returning(|values: &ValueMap| {
            Ok(values
                .iter()
                .map(|(k, v)| format!("{k}: {}\n", v.as_str().unwrap_or_default()))
                .collect())
        });
        codec.expect_unmarshal().returning(|text: &str| {
            Ok(text
                .lines()
                .filter_map(|line| line.split_once(": "))
                .map(|(k, v)| (k.to_string(), Value::from(v)))
                .collect())
        });
        codec
    }

    #[test]
    fn create_from_substitutes_new_name() {
        let mut store = MockChartStore::new();
        store
            .expect_load()
            .withf(|p: &Path| p == Path::new("/src/starter"))
            .times(1)
            .returning(|_: &Path| Ok(source_chart()));

        let saved: Arc<Mutex<Option<Chart>>> = Arc::default();
        let sink = Arc::clone(&saved);
        store
            .expect_save_dir()
            .withf(|_: &Chart, dest: &Path| dest == Path::new("/out"))
            .times(1)
            .returning(move |chart: &Chart, dest: &Path| {
                *sink.lock().unwrap() = Some(chart.clone());
                Ok(dest.join(chart.name()))
            });

        let svc = service_with(
            MockFilesystem::new(),
            echo_codec(),
            store,
            silent_diagnostics(),
        );
        let metadata = ChartMetadata::new("billing").with_version("1.2.3");
        let dir = svc
            .create_from(metadata.clone(), Path::new("/out"), Path::new("/src/starter"))
            .unwrap();
        assert_eq!(dir, Path::new("/out/billing"));

        let chart = saved.lock().unwrap().take().unwrap();
        assert_eq!(chart.metadata, metadata);
        assert_eq!(
            chart.templates[0].text(),
            "name: {{ template \"billing.fullname\" . }}\n"
        );
        assert_eq!(
            chart.values.get("nameOverride").and_then(Value::as_str),
            Some("billing")
        );
        assert_eq!(
            chart.raw_file("values.yaml").unwrap().text(),
            "# Default values for billing.\nnameOverride: billing\n"
        );
        assert_eq!(chart.raw_file(".helmignore").unwrap().text(), ".git/\n");
    }

    #[test]
    fn create_from_propagates_load_failure() {
        let mut store = MockChartStore::new();
        store.expect_load().returning(|p: &Path| {
            Err(crate::application::ApplicationError::ChartLoad {
                path: p.to_path_buf(),
                reason: "no Chart.yaml".into(),
            }
            .into())
        });
        store.expect_save_dir().never();

        let svc = service_with(
            MockFilesystem::new(),
            MockValuesCodec::new(),
            store,
            silent_diagnostics(),
        );
        let err = svc
            .create_from(ChartMetadata::new("billing"), Path::new("/out"), Path::new("/nope"))
            .unwrap_err();
        assert!(err.to_string().contains("no Chart.yaml"));
    }

    #[test]
    fn create_from_validates_metadata_first() {
        let mut store = MockChartStore::new();
        store.expect_load().never();

        let svc = service_with(
            MockFilesystem::new(),
            MockValuesCodec::new(),
            store,
            silent_diagnostics(),
        );
        let err = svc
            .create_from(
                ChartMetadata::new("billing").with_version("one"),
                Path::new("/out"),
                Path::new("/src"),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ChartError::Domain(crate::domain::DomainError::InvalidVersion { .. })
        ));
    }
}
