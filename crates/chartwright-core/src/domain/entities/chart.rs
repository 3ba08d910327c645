use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::application::DEFAULT_CHART_VERSION, error::DomainError, value::ValueMap,
};

/// `apiVersion` written into chart descriptors.
pub const CHART_API_VERSION: &str = "v2";

/// Default description for generated charts.
pub const DEFAULT_DESCRIPTION: &str = "A Helm chart for Kubernetes";

/// Contents of a `Chart.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    pub api_version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

impl ChartMetadata {
    /// Metadata of a fresh application chart.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: CHART_API_VERSION.into(),
            name: name.into(),
            description: Some(DEFAULT_DESCRIPTION.into()),
            chart_type: Some("application".into()),
            version: DEFAULT_CHART_VERSION.into(),
            app_version: Some(DEFAULT_CHART_VERSION.into()),
            deprecated: false,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        crate::domain::validation::validate_name(&self.name)?;
        crate::domain::validation::validate_version(&self.version)
    }
}

/// A named file inside a chart, with a path relative to the chart root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl ChartFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Contents as text, replacing invalid UTF-8.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

/// A chart loaded into memory.
///
/// - `templates`: entries under `templates/`, named relative to the chart root
///   (`templates/deployment.yaml`).
/// - `values`: the parsed `values.yaml`.
/// - `raw`: every other file as read, including `values.yaml` itself so that
///   comments survive a load/save cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub metadata: ChartMetadata,
    pub templates: Vec<ChartFile>,
    pub values: ValueMap,
    pub raw: Vec<ChartFile>,
}

impl Chart {
    pub fn new(metadata: ChartMetadata) -> Self {
        Self {
            metadata,
            templates: Vec::new(),
            values: ValueMap::new(),
            raw: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn raw_file(&self, name: &str) -> Option<&ChartFile> {
        self.raw.iter().find(|f| f.name == name)
    }

    pub fn raw_file_mut(&mut self, name: &str) -> Option<&mut ChartFile> {
        self.raw.iter_mut().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_serializes_camel_case() {
        let json = serde_json::to_value(ChartMetadata::new("demo")).unwrap();
        assert_eq!(json["apiVersion"], "v2");
        assert_eq!(json["type"], "application");
        assert_eq!(json["appVersion"], "0.1.0");
        assert!(json.get("deprecated").is_none());
    }

    #[test]
    fn metadata_validation() {
        assert!(ChartMetadata::new("demo").validate().is_ok());
        assert!(ChartMetadata::new("bad name").validate().is_err());
        assert!(
            ChartMetadata::new("demo")
                .with_version("latest")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn raw_lookup() {
        let mut chart = Chart::new(ChartMetadata::new("demo"));
        chart.raw.push(ChartFile::new("values.yaml", "a: 1\n"));
        assert_eq!(chart.raw_file("values.yaml").unwrap().text(), "a: 1\n");
        assert!(chart.raw_file(".helmignore").is_none());
    }
}
