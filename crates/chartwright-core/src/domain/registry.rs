//! The template registry.
//!
//! Maps resource-type tags to [`TemplateDescriptor`]s and holds the shared
//! chart texts (helpers, chart descriptor, starter files). A registry is
//! assembled once through [`TemplateRegistry::builder`] and is read-only
//! afterwards; share it between services with an `Arc`.

use std::collections::HashMap;

use crate::domain::entities::{StarterFile, TemplateDescriptor};

/// Outcome of looking up a resource-type tag.
///
/// Neither `Reserved` nor `Unknown` is an error: the engine skips both.
/// They are separate so callers and tests can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// A descriptor with a body to emit.
    Found(&'a TemplateDescriptor),
    /// The tag is known but reserved for a future resource kind.
    Reserved,
    /// The tag is not registered.
    Unknown,
}

/// Immutable registry of chart templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    resources: HashMap<String, TemplateDescriptor>,
    chart_helpers: String,
    app_helpers: String,
    chart_file: String,
    starter: Vec<StarterFile>,
}

impl TemplateRegistry {
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::default()
    }

    pub fn lookup(&self, resource_type: &str) -> Lookup<'_> {
        match self.resources.get(resource_type) {
            Some(descriptor) if descriptor.is_empty() => Lookup::Reserved,
            Some(descriptor) => Lookup::Found(descriptor),
            None => Lookup::Unknown,
        }
    }

    /// Registered tags, sorted.
    pub fn resource_types(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Chart-level `_helpers.tpl` prologue (uses `<CHARTNAME>`).
    pub fn chart_helpers(&self) -> &str {
        &self.chart_helpers
    }

    /// Per-application `_helpers.tpl` fragment (uses `<APPNAME>`, `<CHARTNAME>`).
    pub fn app_helpers(&self) -> &str {
        &self.app_helpers
    }

    /// `Chart.yaml` text (uses `<CHARTNAME>`, `<CHARTVERSION>`).
    pub fn chart_file(&self) -> &str {
        &self.chart_file
    }

    /// Files of the standard single-application chart.
    pub fn starter_files(&self) -> &[StarterFile] {
        &self.starter
    }
}

#[derive(Debug, Default)]
pub struct TemplateRegistryBuilder {
    registry: TemplateRegistry,
}

impl TemplateRegistryBuilder {
    /// Register a descriptor under its resource type. A later registration
    /// for the same tag replaces the earlier one.
    pub fn resource(mut self, descriptor: TemplateDescriptor) -> Self {
        self.registry
            .resources
            .insert(descriptor.resource_type().to_string(), descriptor);
        self
    }

    /// Register a tag that resolves to nothing.
    pub fn reserved(self, resource_type: impl Into<String>) -> Self {
        self.resource(TemplateDescriptor::reserved(resource_type))
    }

    pub fn chart_helpers(mut self, text: impl Into<String>) -> Self {
        self.registry.chart_helpers = text.into();
        self
    }

    pub fn app_helpers(mut self, text: impl Into<String>) -> Self {
        self.registry.app_helpers = text.into();
        self
    }

    pub fn chart_file(mut self, text: impl Into<String>) -> Self {
        self.registry.chart_file = text.into();
        self
    }

    pub fn starter_file(mut self, file: StarterFile) -> Self {
        self.registry.starter.push(file);
        self
    }

    pub fn build(self) -> TemplateRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TemplateRegistry {
        TemplateRegistry::builder()
            .resource(TemplateDescriptor::new(
                "deployment",
                "deployment_%s.yaml",
                "kind: Deployment\n",
            ))
            .reserved("pvc")
            .build()
    }

    #[test]
    fn lookup_branches() {
        let registry = registry();
        assert!(matches!(registry.lookup("deployment"), Lookup::Found(d) if d.resource_type() == "deployment"));
        assert_eq!(registry.lookup("pvc"), Lookup::Reserved);
        assert_eq!(registry.lookup("cronjob"), Lookup::Unknown);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(registry().lookup("Deployment"), Lookup::Unknown);
    }

    #[test]
    fn resource_types_sorted() {
        assert_eq!(registry().resource_types(), ["deployment", "pvc"]);
    }
}
