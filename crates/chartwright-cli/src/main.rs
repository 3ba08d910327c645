//! `chartwright`: Helm chart scaffolding for application sets.
//!
//! Exit status follows [`CliError::exit_code`]: 0 on success, 1 for
//! internal failures, 2 for rejected input, 3 when a manifest or source
//! chart is missing and 4 for configuration problems.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = parse_exit_code(&e);
            if code == 0 {
                let _ = e.print();
            } else {
                eprintln!("{}", e.render().ansi());
            }
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    debug!(verbose = cli.global.verbose, quiet = cli.global.quiet, "arguments parsed");

    let global = cli.global.clone();
    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, &global),
    }
}

/// Load configuration and run the selected command.
fn start(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;
    let output = OutputManager::new(&cli.global, &config);
    run(cli, config, output)
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Generate(cmd) => commands::generate::execute(cmd, cli.global, config, output),
        Commands::Create(cmd) => commands::create::execute(cmd, cli.global, config, output),
        Commands::Derive(cmd) => commands::derive::execute(cmd, cli.global, config, output),
        Commands::Example(cmd) => commands::example::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// `--help` and `--version` come back from clap as errors meant for stdout.
fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() { 2 } else { 0 }
}

/// Print `err` to stderr and turn it into the process exit status.
fn report(err: &CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    let verbose = global.verbose > 0;
    let text = if !global.no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{text}");

    ExitCode::from(err.exit_code())
}
