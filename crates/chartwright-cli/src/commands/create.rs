//! `chartwright create`: write a standard single-application chart.

use tracing::{info, instrument};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(chart = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dest = args.output.unwrap_or(config.generate.output_dir);

    output.header(&format!("Creating chart '{}'...", args.name))?;
    let chart_dir = super::chart_service().create(&args.name, &dest)?;
    info!(chart_dir = %chart_dir.display(), "Chart created");

    output.json(&serde_json::json!({
        "chart": args.name,
        "chart_dir": chart_dir,
    }))?;
    output.success(&format!(
        "Chart '{}' created at {}",
        args.name,
        chart_dir.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  helm lint {}", chart_dir.display()))?;
        output.print(&format!("  helm template {}", chart_dir.display()))?;
    }

    Ok(())
}
