//! Built-in template registry.
//!
//! This module provides [`registry`], the single entry-point for the
//! templates that ship with chartwright. Template texts live under
//! `templates/` in this crate and are compiled into the binary.
//!
//! # Layout
//!
//! ```text
//! templates/
//! ├── scaffold/              ← multi-application chart generation
//! │   ├── Chart.yaml         ← <CHARTNAME>, <CHARTVERSION>
//! │   ├── _helpers.tpl       ← chart-level helpers prologue
//! │   ├── app_helpers.tpl    ← per-application helpers fragment
//! │   ├── deployment.yaml    ← "deployment"
//! │   └── service.yaml       ← "svc" and "service"
//! └── starter/               ← `create`: standard single-application chart
//!     ├── values.yaml
//!     ├── .helmignore
//!     └── templates/...
//! ```
//!
//! # Resource types
//!
//! | tag          | file                      |
//! |--------------|---------------------------|
//! | `deployment` | `deployment_<app>.yaml`   |
//! | `svc`        | `svc_<app>.yaml`          |
//! | `service`    | `service_<app>.yaml`      |
//! | `pv`, `pvc`, `set` | reserved, never written |

use std::sync::{Arc, OnceLock};

use tracing::debug;

use chartwright_core::domain::{StarterFile, TemplateDescriptor, TemplateRegistry};

const CHART_FILE: &str = include_str!("../templates/scaffold/Chart.yaml");
const CHART_HELPERS: &str = include_str!("../templates/scaffold/_helpers.tpl");
const APP_HELPERS: &str = include_str!("../templates/scaffold/app_helpers.tpl");
const DEPLOYMENT: &str = include_str!("../templates/scaffold/deployment.yaml");
const SERVICE: &str = include_str!("../templates/scaffold/service.yaml");

/// Tags that are recognised but have no template yet.
pub const RESERVED_TYPES: [&str; 3] = ["pv", "pvc", "set"];

/// Files of the standard chart, relative to the chart directory.
/// `Chart.yaml` is rendered separately from [`TemplateRegistry::chart_file`].
const STARTER: &[(&str, &str)] = &[
    (
        "values.yaml",
        include_str!("../templates/starter/values.yaml"),
    ),
    (
        ".helmignore",
        include_str!("../templates/starter/.helmignore"),
    ),
    (
        "templates/deployment.yaml",
        include_str!("../templates/starter/templates/deployment.yaml"),
    ),
    (
        "templates/service.yaml",
        include_str!("../templates/starter/templates/service.yaml"),
    ),
    (
        "templates/serviceaccount.yaml",
        include_str!("../templates/starter/templates/serviceaccount.yaml"),
    ),
    (
        "templates/hpa.yaml",
        include_str!("../templates/starter/templates/hpa.yaml"),
    ),
    (
        "templates/ingress.yaml",
        include_str!("../templates/starter/templates/ingress.yaml"),
    ),
    (
        "templates/NOTES.txt",
        include_str!("../templates/starter/templates/NOTES.txt"),
    ),
    (
        "templates/_helpers.tpl",
        include_str!("../templates/starter/templates/_helpers.tpl"),
    ),
    (
        "templates/tests/test-connection.yaml",
        include_str!("../templates/starter/templates/tests/test-connection.yaml"),
    ),
];

/// Build the built-in registry.
pub fn registry() -> TemplateRegistry {
    let mut builder = TemplateRegistry::builder()
        .resource(TemplateDescriptor::new(
            "deployment",
            "deployment_%s.yaml",
            DEPLOYMENT,
        ))
        .resource(TemplateDescriptor::new("svc", "svc_%s.yaml", SERVICE))
        .resource(TemplateDescriptor::new("service", "service_%s.yaml", SERVICE))
        .chart_helpers(CHART_HELPERS)
        .app_helpers(APP_HELPERS)
        .chart_file(CHART_FILE);

    for tag in RESERVED_TYPES {
        builder = builder.reserved(tag);
    }
    for (path, body) in STARTER {
        builder = builder.starter_file(StarterFile::new(*path, *body));
    }

    let registry = builder.build();
    debug!(
        resource_types = registry.resource_types().len(),
        starter_files = registry.starter_files().len(),
        "built-in registry ready"
    );
    registry
}

/// Process-wide shared copy of [`registry`].
pub fn shared() -> Arc<TemplateRegistry> {
    static SHARED: OnceLock<Arc<TemplateRegistry>> = OnceLock::new();
    Arc::clone(SHARED.get_or_init(|| Arc::new(registry())))
}
