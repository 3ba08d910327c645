//! Template descriptors.
//!
//! A [`TemplateDescriptor`] tells the engine how to emit one resource type
//! for one application: which file to create under `templates/` and which
//! body to put in it. Descriptors are static data; they are built once into
//! a [`TemplateRegistry`](crate::domain::TemplateRegistry) and only read
//! afterwards.
//!
//! ```text
//! "deployment" ──► TemplateDescriptor {
//!                      file_pattern: "deployment_%s.yaml",
//!                      body:         "kind: Deployment ... <APPNAME> ...",
//!                  }
//! ```

use std::path::PathBuf;

use crate::domain::placeholder::substitute_names;

/// Slot in a filename pattern that receives the application name.
pub const NAME_SLOT: &str = "%s";

/// Per-resource-type template: output filename pattern plus raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    resource_type: String,
    file_pattern: String,
    body: String,
}

impl TemplateDescriptor {
    pub fn new(
        resource_type: impl Into<String>,
        file_pattern: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            file_pattern: file_pattern.into(),
            body: body.into(),
        }
    }

    /// A tag reserved for a future resource kind. Never emitted.
    pub fn reserved(resource_type: impl Into<String>) -> Self {
        Self::new(resource_type, String::new(), String::new())
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn file_pattern(&self) -> &str {
        &self.file_pattern
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// `true` when there is nothing to emit for this descriptor.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() || self.file_pattern.is_empty()
    }

    /// Output filename for `app_name`, e.g. `deployment_web.yaml`.
    pub fn file_name(&self, app_name: &str) -> String {
        self.file_pattern.replacen(NAME_SLOT, app_name, 1)
    }

    /// Body with both name markers substituted.
    pub fn render(&self, app_name: &str, chart_name: &str) -> String {
        substitute_names(&self.body, app_name, chart_name)
    }
}

/// One file of the standard starter chart, relative to the chart root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterFile {
    pub path: PathBuf,
    pub body: String,
}

impl StarterFile {
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc() -> TemplateDescriptor {
        TemplateDescriptor::new(
            "svc",
            "svc_%s.yaml",
            "name: {{ .Values.<APPNAME>.appname }}\nlabels: {{ include \"<CHARTNAME>.labels\" . }}\n",
        )
    }

    #[test]
    fn file_name_fills_the_slot() {
        assert_eq!(svc().file_name("app1"), "svc_app1.yaml");
    }

    #[test]
    fn render_substitutes_both_markers() {
        let out = svc().render("app1", "demo");
        assert!(out.contains(".Values.app1.appname"));
        assert!(out.contains("\"demo.labels\""));
    }

    #[test]
    fn reserved_descriptor_is_empty() {
        assert!(TemplateDescriptor::reserved("pvc").is_empty());
        assert!(!svc().is_empty());
    }
}
