//! Application layer for chartwright.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ChartService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or templating rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ChartService, HelpersPolicy, ScaffoldOptions,
    ScaffoldReport, // what a generation run wrote
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ChartStore, Diagnostics, EntryKind, Filesystem, ValuesCodec};

pub use error::ApplicationError;
