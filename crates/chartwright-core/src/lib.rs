//! chartwright core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! chartwright Helm chart generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          chartwright-cli (CLI)          │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, ChartService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ValuesCodec, ChartStore,   │
//! │            Diagnostics)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   chartwright-adapters (Infrastructure) │
//! │ (LocalFilesystem, YamlCodec, builtin    │
//! │          template registry)             │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ApplicationSet, TemplateRegistry,      │
//! │    Placeholder, Value, validation)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chartwright_core::{
//!     application::ScaffoldService,
//!     domain::{Application, ApplicationSet},
//! };
//!
//! // 1. Describe the chart
//! let set = ApplicationSet::new("demo", ".")
//!     .with_application(Application::new("web").with_resource_types(["deployment", "svc"]));
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, codec, diagnostics, registry);
//! let chart_dir = service.generate_chart_tree(&set)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ChartService, HelpersPolicy, ScaffoldOptions, ScaffoldReport, ScaffoldService,
        ports::{ChartStore, Diagnostics, EntryKind, Filesystem, ValuesCodec},
    };
    pub use crate::domain::{
        Application, ApplicationSet, Chart, ChartFile, ChartMetadata, Lookup, Placeholder,
        StarterFile, TemplateDescriptor, TemplateRegistry, Value, ValueMap,
    };
    pub use crate::error::{ChartError, ChartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
