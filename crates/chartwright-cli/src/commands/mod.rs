//! Subcommand handlers. Each module exposes one `execute` entry point.

use chartwright_adapters::{
    FsChartStore, LocalFilesystem, WriterDiagnostics, YamlCodec, builtin_templates,
};
use chartwright_core::application::ChartService;

pub mod completions;
pub mod config;
pub mod create;
pub mod derive;
pub mod example;
pub mod generate;
pub mod init;

/// [`ChartService`] wired to the local filesystem and stderr.
pub(crate) fn chart_service() -> ChartService {
    ChartService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(YamlCodec::new()),
        Box::new(FsChartStore::new(Box::new(LocalFilesystem::new()))),
        Box::new(WriterDiagnostics::stderr()),
        builtin_templates::shared(),
    )
}
