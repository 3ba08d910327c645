//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a chart tree" or "derive a chart".

pub mod chart_service;
pub(crate) mod layout;
pub mod scaffold_service;

pub use chart_service::ChartService;
pub use layout::{CHART_FILE, CHARTS_DIR, HELPERS_FILE, TEMPLATES_DIR, VALUES_FILE};
pub use scaffold_service::{HelpersPolicy, ScaffoldOptions, ScaffoldReport, ScaffoldService};
