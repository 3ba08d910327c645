pub mod application;
pub mod chart;
pub mod template;

pub use crate::domain::DomainError;
pub use application::{Application, ApplicationSet, DEFAULT_CHART_VERSION};
pub use chart::{CHART_API_VERSION, Chart, ChartFile, ChartMetadata, DEFAULT_DESCRIPTION};
pub use template::{StarterFile, TemplateDescriptor};
