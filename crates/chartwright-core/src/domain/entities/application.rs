use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value::ValueMap;

/// Chart version used when the caller does not pick one.
pub const DEFAULT_CHART_VERSION: &str = "0.1.0";

/// One deployable unit within a chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Application {
    name: String,
    #[serde(default, rename = "types", alias = "resource_types")]
    resource_types: Vec<String>,
    #[serde(default)]
    values: ValueMap,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_types: Vec::new(),
            values: ValueMap::new(),
        }
    }

    /// Select a resource type. Tags already selected are ignored so the list
    /// behaves as an ordered set.
    pub fn with_resource_type(mut self, tag: impl Into<String>) -> Self {
        self.add_resource_type(tag);
        self
    }

    pub fn with_resource_types<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.add_resource_type(tag);
        }
        self
    }

    pub fn with_values(mut self, values: ValueMap) -> Self {
        self.values = values;
        self
    }

    fn add_resource_type(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.resource_types.contains(&tag) {
            self.resource_types.push(tag);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected resource types, duplicates removed, in declaration order.
    ///
    /// Deserialized applications may carry duplicates; iterate through this
    /// accessor rather than the raw field.
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.resource_types
            .iter()
            .enumerate()
            .filter(|(i, tag)| !self.resource_types[..*i].contains(*tag))
            .map(|(_, tag)| tag.as_str())
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }
}

/// The set of applications combined into one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSet {
    name: String,
    #[serde(rename = "path", alias = "output_path")]
    output_path: PathBuf,
    #[serde(default)]
    applications: Vec<Application>,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    DEFAULT_CHART_VERSION.to_string()
}

impl ApplicationSet {
    pub fn new(name: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            output_path: output_path.into(),
            applications: Vec::new(),
            version: default_version(),
        }
    }

    pub fn with_application(mut self, app: Application) -> Self {
        self.applications.push(app);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Combined values document: application name → application values.
    ///
    /// Applications sharing a name collapse into one entry at the first
    /// one's position, holding the last one's values.
    pub fn combined_values(&self) -> ValueMap {
        self.applications
            .iter()
            .map(|app| (app.name().to_string(), app.values().clone()))
            .collect()
    }
}
