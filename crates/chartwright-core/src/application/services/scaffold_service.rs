//! Scaffold Service - the chart scaffolding engine.
//!
//! This service turns an [`ApplicationSet`] into a chart directory:
//! 1. Validate the set and resolve the output directory
//! 2. Write the shared helpers prologue
//! 3. Per application: validate, append its helpers fragment, emit its
//!    resource templates
//! 4. Write the combined `values.yaml` and the `Chart.yaml`
//!
//! Writes are not transactional. A failure aborts the run and leaves the
//! files written so far in place; re-running is the recovery path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Diagnostics, Filesystem, ValuesCodec},
        services::layout::{
            CHART_FILE, HELPERS_FILE, TEMPLATES_DIR, VALUES_FILE, ensure_not_file,
            ensure_output_dir, warn_if_exists,
        },
    },
    domain::{
        Application, ApplicationSet, DomainValidator, Lookup, Placeholder,
        TemplateRegistry, substitute_chart_name, substitute_names,
    },
    error::ChartResult,
};

/// How `templates/_helpers.tpl` is treated across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HelpersPolicy {
    /// Start every run with a fresh file, then append one fragment per
    /// application. Re-running yields the same file.
    #[default]
    TruncatePerRun,
    /// Only ever append. Re-running without clearing the directory
    /// duplicates every fragment.
    AppendAcrossRuns,
}

/// Knobs for [`ScaffoldService`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    pub helpers: HelpersPolicy,
}

/// What a scaffold run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// `<output>/<chart name>`, absolute.
    pub chart_dir: PathBuf,
    /// Every file written, in write order, without duplicates.
    pub files: Vec<PathBuf>,
    /// Template files that existed before this run and were replaced.
    pub overwritten: Vec<PathBuf>,
    /// `(application, resource type)` pairs that produced no file.
    pub skipped: Vec<(String, String)>,
}

impl ScaffoldReport {
    fn record(&mut self, path: PathBuf) {
        if !self.files.contains(&path) {
            self.files.push(path);
        }
    }
}

/// Chart scaffolding engine.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    codec: Box<dyn ValuesCodec>,
    diagnostics: Box<dyn Diagnostics>,
    registry: Arc<TemplateRegistry>,
    options: ScaffoldOptions,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use chartwright_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem,  // impl Filesystem
    ///     codec,       // impl ValuesCodec
    ///     diagnostics, // impl Diagnostics
    ///     registry,    // Arc<TemplateRegistry>
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        codec: Box<dyn ValuesCodec>,
        diagnostics: Box<dyn Diagnostics>,
        registry: Arc<TemplateRegistry>,
    ) -> Self {
        Self {
            filesystem,
            codec,
            diagnostics,
            registry,
            options: ScaffoldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScaffoldOptions) -> Self {
        self.options = options;
        self
    }

    /// Generate the chart tree for `set` and return the chart directory.
    pub fn generate_chart_tree(&self, set: &ApplicationSet) -> ChartResult<PathBuf> {
        self.scaffold(set).map(|report| report.chart_dir)
    }

    /// Generate the chart tree for `set`, reporting every file written.
    #[instrument(
        skip_all,
        fields(
            chart = %set.name(),
            output_path = %set.output_path().display(),
            applications = set.applications().len()
        )
    )]
    pub fn scaffold(&self, set: &ApplicationSet) -> ChartResult<ScaffoldReport> {
        // 1. Validate before touching anything
        DomainValidator::validate_application_set(set)?;

        // 2. Resolve paths
        let base = ensure_output_dir(self.filesystem.as_ref(), set.output_path())?;
        let chart_dir = base.join(set.name());
        ensure_not_file(self.filesystem.as_ref(), &chart_dir)?;

        let templates_dir = chart_dir.join(TEMPLATES_DIR);
        let helpers_path = templates_dir.join(HELPERS_FILE);

        let mut report = ScaffoldReport {
            chart_dir: chart_dir.clone(),
            ..ScaffoldReport::default()
        };

        // 3. Helpers prologue
        self.write_helpers_prologue(&helpers_path, set.name())?;
        report.record(helpers_path.clone());

        // 4. Applications, in declared order
        for app in set.applications() {
            self.emit_application(app, set.name(), &templates_dir, &helpers_path, &mut report)?;
        }

        // 5. Combined values
        let values_path = chart_dir.join(VALUES_FILE);
        let values = self.codec.marshal(&set.combined_values())?;
        self.filesystem.write_file(&values_path, values.as_bytes())?;
        report.record(values_path);

        // 6. Chart descriptor
        let chart_path = chart_dir.join(CHART_FILE);
        let descriptor = Placeholder::ChartVersion.apply(
            &substitute_chart_name(self.registry.chart_file(), set.name()),
            set.version(),
        );
        self.filesystem
            .write_file(&chart_path, descriptor.as_bytes())?;
        report.record(chart_path);

        info!(
            files = report.files.len(),
            skipped = report.skipped.len(),
            "Chart tree generated"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_helpers_prologue(&self, helpers_path: &Path, chart_name: &str) -> ChartResult<()> {
        let prologue = substitute_chart_name(self.registry.chart_helpers(), chart_name);
        match self.options.helpers {
            HelpersPolicy::TruncatePerRun => self
                .filesystem
                .write_file(helpers_path, prologue.as_bytes()),
            HelpersPolicy::AppendAcrossRuns => self
                .filesystem
                .append_file(helpers_path, prologue.as_bytes()),
        }
    }

    /// Validate one application and write everything it contributes.
    #[instrument(skip_all, fields(app = %app.name()))]
    fn emit_application(
        &self,
        app: &Application,
        chart_name: &str,
        templates_dir: &Path,
        helpers_path: &Path,
        report: &mut ScaffoldReport,
    ) -> ChartResult<()> {
        DomainValidator::validate_application(app)?;

        let fragment = substitute_names(self.registry.app_helpers(), app.name(), chart_name);
        self.filesystem
            .append_file(helpers_path, fragment.as_bytes())?;

        for tag in app.resource_types() {
            let descriptor = match self.registry.lookup(tag) {
                Lookup::Found(descriptor) => descriptor,
                Lookup::Reserved => {
                    debug!(resource_type = tag, "resource type is reserved, skipping");
                    report.skipped.push((app.name().to_string(), tag.to_string()));
                    continue;
                }
                Lookup::Unknown => {
                    debug!(resource_type = tag, "unknown resource type, skipping");
                    report.skipped.push((app.name().to_string(), tag.to_string()));
                    continue;
                }
            };

            let path = templates_dir.join(descriptor.file_name(app.name()));
            if warn_if_exists(self.filesystem.as_ref(), self.diagnostics.as_ref(), &path)? {
                report.overwritten.push(path.clone());
            }

            let content = descriptor.render(app.name(), chart_name);
            self.filesystem.write_file(&path, content.as_bytes())?;
            debug!(path = %path.display(), resource_type = tag, "template written");
            report.record(path);
        }

        Ok(())
    }
}
