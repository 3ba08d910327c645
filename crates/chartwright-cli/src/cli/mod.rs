//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "chartwright",
    bin_name = "chartwright",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2388} Helm chart scaffolding for application sets",
    long_about = "chartwright turns a manifest of applications into a single \
                  Helm chart: one template per selected resource type, a \
                  combined values.yaml and a shared _helpers.tpl.",
    after_help = "EXAMPLES:\n\
        \x20 chartwright example > apps.yaml\n\
        \x20 chartwright generate apps.yaml -o ./charts\n\
        \x20 chartwright create web -o ./charts\n\
        \x20 chartwright derive ./charts/web billing --version 1.0.0\n\
        \x20 chartwright completions bash > /usr/share/bash-completion/completions/chartwright",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a chart from an application-set manifest.
    #[command(
        visible_alias = "gen",
        about = "Generate a chart from a manifest",
        after_help = "EXAMPLES:\n\
            \x20 chartwright generate apps.yaml\n\
            \x20 chartwright generate apps.json -o ./out --version 2.0.0\n\
            \x20 chartwright generate apps.yaml --append-helpers"
    )]
    Generate(GenerateArgs),

    /// Create a standard single-application chart.
    #[command(
        about = "Create a standard chart",
        after_help = "EXAMPLES:\n\
            \x20 chartwright create web\n\
            \x20 chartwright create web -o ./charts"
    )]
    Create(CreateArgs),

    /// Copy an existing chart under a new name.
    #[command(
        about = "Derive a chart from an existing one",
        after_help = "EXAMPLES:\n\
            \x20 chartwright derive ./charts/web billing\n\
            \x20 chartwright derive ./starters/base api -o ./charts --version 1.2.0"
    )]
    Derive(DeriveArgs),

    /// Print an example manifest.
    #[command(
        about = "Print an example manifest",
        after_help = "EXAMPLES:\n\
            \x20 chartwright example > apps.yaml\n\
            \x20 chartwright example --format json > apps.json"
    )]
    Example(ExampleArgs),

    /// Initialise a chartwright configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 chartwright init           # default location\n\
            \x20 chartwright init --local   # .chartwright.toml in CWD\n\
            \x20 chartwright init --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 chartwright completions bash > ~/.local/share/bash-completion/completions/chartwright\n\
            \x20 chartwright completions zsh  > ~/.zfunc/_chartwright\n\
            \x20 chartwright completions fish > ~/.config/fish/completions/chartwright.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the chartwright configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 chartwright config get generate.append_helpers\n\
            \x20 chartwright config list\n\
            \x20 chartwright config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `chartwright generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// YAML or JSON manifest describing the application set.
    #[arg(value_name = "MANIFEST", help = "Path to the application-set manifest")]
    pub manifest: PathBuf,

    /// Override the manifest's `path`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory the chart is created in (overrides the manifest)"
    )]
    pub output: Option<PathBuf>,

    /// Override the manifest's `version`.
    #[arg(
        long = "version",
        value_name = "VERSION",
        help = "Chart version (overrides the manifest)"
    )]
    pub chart_version: Option<String>,

    /// Append `_helpers.tpl` across runs instead of rewriting it.
    #[arg(
        long = "append-helpers",
        help = "Append to an existing _helpers.tpl instead of rewriting it"
    )]
    pub append_helpers: bool,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `chartwright create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Chart name.
    #[arg(value_name = "NAME", help = "Chart name")]
    pub name: String,

    /// Destination directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory the chart is created in (default: config or CWD)"
    )]
    pub output: Option<PathBuf>,
}

// ── derive ────────────────────────────────────────────────────────────────────

/// Arguments for `chartwright derive`.
#[derive(Debug, Args)]
pub struct DeriveArgs {
    /// Existing chart directory.
    #[arg(value_name = "SRC", help = "Existing chart directory to copy")]
    pub src: PathBuf,

    /// Name of the new chart.
    #[arg(value_name = "NAME", help = "Name of the new chart")]
    pub name: String,

    /// Destination directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory the chart is created in (default: config or CWD)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "version", value_name = "VERSION", help = "Chart version")]
    pub chart_version: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "Chart description")]
    pub description: Option<String>,
}

// ── example ───────────────────────────────────────────────────────────────────

/// Arguments for `chartwright example`.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Manifest syntax.
    #[arg(
        long = "format",
        value_enum,
        default_value = "yaml",
        help = "Manifest syntax"
    )]
    pub format: ManifestFormat,
}

/// Manifest syntaxes understood by `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `chartwright init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.chartwright.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `chartwright completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `chartwright config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.append_helpers`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "chartwright",
            "generate",
            "apps.yaml",
            "-o",
            "out",
            "--version",
            "1.2.3",
            "--append-helpers",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.manifest, PathBuf::from("apps.yaml"));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.chart_version.as_deref(), Some("1.2.3"));
        assert!(args.append_helpers);
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["chartwright", "gen", "apps.yaml"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn parse_derive_command() {
        let cli = Cli::parse_from([
            "chartwright",
            "derive",
            "./base",
            "billing",
            "--description",
            "Billing service",
        ]);
        let Commands::Derive(args) = cli.command else {
            panic!("expected Derive command");
        };
        assert_eq!(args.src, PathBuf::from("./base"));
        assert_eq!(args.name, "billing");
        assert_eq!(args.chart_version, None);
        assert_eq!(args.description.as_deref(), Some("Billing service"));
    }

    #[test]
    fn example_defaults_to_yaml() {
        let cli = Cli::parse_from(["chartwright", "example"]);
        let Commands::Example(args) = cli.command else {
            panic!("expected Example command");
        };
        assert_eq!(args.format, ManifestFormat::Yaml);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["chartwright", "create", "web", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["chartwright", "--quiet", "--verbose", "example"]);
        assert!(result.is_err());
    }
}
