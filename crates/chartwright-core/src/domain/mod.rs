//! Core domain layer for chartwright.
//!
//! This module contains pure logic with no I/O. Filesystem access,
//! serialization and chart persistence are reached through the ports
//! defined in the application layer.
//!
//! - **No I/O**: names, versions, values and templates only
//! - **Few external crates**: std, thiserror and serde
//! - **Immutable templates**: the registry is built once and only read
pub mod entities;
pub mod error;
pub mod placeholder;
pub mod registry;
pub mod validation;
pub mod value;

// Re-exports for convenience
pub use entities::{
    Application, ApplicationSet, CHART_API_VERSION, Chart, ChartFile, ChartMetadata,
    DEFAULT_CHART_VERSION, DEFAULT_DESCRIPTION, StarterFile, TemplateDescriptor,
};

pub use error::DomainError;

pub use placeholder::{
    APP_NAME_MARKER, CHART_NAME_MARKER, CHART_VERSION_MARKER, Placeholder, substitute_app_name,
    substitute_chart_name, substitute_names,
};
pub use registry::{Lookup, TemplateRegistry, TemplateRegistryBuilder};
pub use validation::{DomainValidator, MAX_NAME_LENGTH, validate_name, validate_version};
pub use value::{Value, ValueMap};
