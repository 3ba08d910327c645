//! Infrastructure adapters for chartwright.
//!
//! This crate implements the ports defined in `chartwright-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod chart_store;
pub mod codec;
pub mod diagnostics;
pub mod filesystem;

// Re-export commonly used adapters
pub use chart_store::FsChartStore;
pub use codec::YamlCodec;
pub use diagnostics::{MemoryDiagnostics, WriterDiagnostics};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
