//! `chartwright derive`: copy an existing chart under a new name.

use tracing::{info, instrument};

use chartwright_core::domain::ChartMetadata;

use crate::{
    cli::{DeriveArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(chart = %args.name, src = %args.src.display()))]
pub fn execute(
    args: DeriveArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dest = args.output.clone().unwrap_or(config.generate.output_dir);
    let metadata = metadata_for(&args);

    output.header(&format!(
        "Deriving '{}' from {}...",
        args.name,
        args.src.display()
    ))?;
    let chart_dir = super::chart_service().create_from(metadata, &dest, &args.src)?;
    info!(chart_dir = %chart_dir.display(), "Chart derived");

    output.json(&serde_json::json!({
        "chart": args.name,
        "chart_dir": chart_dir,
        "source": args.src,
    }))?;
    output.success(&format!(
        "Chart '{}' created at {}",
        args.name,
        chart_dir.display()
    ))?;

    Ok(())
}

fn metadata_for(args: &DeriveArgs) -> ChartMetadata {
    let mut metadata = ChartMetadata::new(args.name.as_str());
    if let Some(version) = &args.chart_version {
        metadata = metadata.with_version(version.as_str());
    }
    if let Some(description) = &args.description {
        metadata = metadata.with_description(description.as_str());
    }
    metadata
}
