//! `chartwright generate`: build a chart from an application-set manifest.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use chartwright_adapters::{LocalFilesystem, WriterDiagnostics, YamlCodec, builtin_templates};
use chartwright_core::{
    application::{HelpersPolicy, ScaffoldOptions, ScaffoldReport, ScaffoldService},
    domain::ApplicationSet,
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `chartwright generate` command.
///
/// 1. Read and parse the manifest
/// 2. Apply `-o` / `--version` overrides
/// 3. Run the scaffolding engine
/// 4. Report the written files
#[instrument(skip_all, fields(manifest = %args.manifest.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut set = load_manifest(&args.manifest)?;
    if let Some(dir) = args.output {
        set = set.with_output_path(dir);
    }
    if let Some(version) = args.chart_version {
        set = set.with_version(version);
    }

    let helpers = if args.append_helpers || config.generate.append_helpers {
        HelpersPolicy::AppendAcrossRuns
    } else {
        HelpersPolicy::TruncatePerRun
    };

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(YamlCodec::new()),
        Box::new(WriterDiagnostics::stderr()),
        builtin_templates::shared(),
    )
    .with_options(ScaffoldOptions { helpers });

    output.header(&format!("Generating chart '{}'...", set.name()))?;
    let report = service.scaffold(&set)?;
    info!(chart = %set.name(), files = report.files.len(), "Chart generated");

    output.json(&Summary::new(set.name(), &report))?;
    output.success(&format!(
        "Chart '{}' written to {}",
        set.name(),
        report.chart_dir.display()
    ))?;

    if global.quiet {
        return Ok(());
    }
    for file in &report.files {
        output.print(&format!("  {}", relative(&report.chart_dir, file).display()))?;
    }
    for file in &report.overwritten {
        output.warning(&format!(
            "replaced {}",
            relative(&report.chart_dir, file).display()
        ))?;
    }
    for (app, tag) in &report.skipped {
        output.info(&format!("no template for '{tag}' (application '{app}')"))?;
    }

    Ok(())
}

/// Parse a YAML or JSON manifest into an [`ApplicationSet`].
pub fn load_manifest(path: &Path) -> CliResult<ApplicationSet> {
    if !path.is_file() {
        return Err(CliError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read manifest '{}'", path.display()))?;
    parse_manifest(path, &text)
}

/// YAML is a superset of JSON, so one parser covers both syntaxes.
fn parse_manifest(path: &Path, text: &str) -> CliResult<ApplicationSet> {
    serde_yaml::from_str(text).map_err(|e| CliError::InvalidManifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn relative<'a>(root: &Path, file: &'a Path) -> &'a Path {
    file.strip_prefix(root).unwrap_or(file)
}

/// `--output-format json` document.
#[derive(Debug, Serialize)]
struct Summary {
    chart: String,
    chart_dir: PathBuf,
    files: Vec<PathBuf>,
    overwritten: Vec<PathBuf>,
    skipped: Vec<Skipped>,
}

#[derive(Debug, Serialize)]
struct Skipped {
    application: String,
    resource_type: String,
}

impl Summary {
    fn new(chart: &str, report: &ScaffoldReport) -> Self {
        Self {
            chart: chart.to_string(),
            chart_dir: report.chart_dir.clone(),
            files: report.files.clone(),
            overwritten: report.overwritten.clone(),
            skipped: report
                .skipped
                .iter()
                .map(|(application, resource_type)| Skipped {
                    application: application.clone(),
                    resource_type: resource_type.clone(),
                })
                .collect(),
        }
    }
}
