//! Diagnostics go to stderr through `tracing-subscriber`.
//!
//! `-q` keeps errors only, each `-v` lowers the threshold one step from
//! `warn`. A `RUST_LOG` in the environment replaces the computed filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events pass the computed filter.
const TARGETS: [&str; 3] = ["chartwright", "chartwright_core", "chartwright_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(level(args))));

    let events = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(events)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn filter_for(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn each_v_lowers_the_threshold() {
        let levels: Vec<_> = (0..4).map(|v| level(&args(v, false))).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE
            ]
        );
        assert_eq!(level(&args(12, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level(&args(0, true)), LevelFilter::ERROR);
        assert_eq!(level(&args(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn filter_names_every_workspace_crate() {
        let filter = filter_for(LevelFilter::DEBUG);
        for target in TARGETS {
            assert!(
                filter.contains(&format!("{target}={}", LevelFilter::DEBUG)),
                "{filter}"
            );
        }
        assert!(EnvFilter::try_new(&filter).is_ok());
    }
}
