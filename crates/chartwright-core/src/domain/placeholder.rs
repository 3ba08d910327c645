//! Literal placeholder markers and their substitution.
//!
//! Templates carry fixed multi-character markers such as `<APPNAME>`.
//! Substitution is a plain replace-all: no escaping, no recursive expansion.
//! The markers are pairwise disjoint (none is a substring of another), so
//! the order in which they are substituted never changes the result.

use std::fmt;

/// Marker replaced with an application name.
pub const APP_NAME_MARKER: &str = "<APPNAME>";

/// Marker replaced with the chart (application set) name.
pub const CHART_NAME_MARKER: &str = "<CHARTNAME>";

/// Marker replaced with the chart version. Only the chart descriptor uses it.
pub const CHART_VERSION_MARKER: &str = "<CHARTVERSION>";

/// The markers a template body may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    AppName,
    ChartName,
    ChartVersion,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Self::AppName, Self::ChartName, Self::ChartVersion];

    /// The literal text of this marker.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::AppName => APP_NAME_MARKER,
            Self::ChartName => CHART_NAME_MARKER,
            Self::ChartVersion => CHART_VERSION_MARKER,
        }
    }

    /// Replace every occurrence of this marker in `src`.
    pub fn apply(self, src: &str, replacement: &str) -> String {
        src.replace(self.marker(), replacement)
    }

    /// Whether `src` mentions this marker at all.
    pub fn occurs_in(self, src: &str) -> bool {
        src.contains(self.marker())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Replace every `<CHARTNAME>` in `src` with `replacement`.
pub fn substitute_chart_name(src: &str, replacement: &str) -> String {
    Placeholder::ChartName.apply(src, replacement)
}

/// Replace every `<APPNAME>` in `src` with `replacement`.
pub fn substitute_app_name(src: &str, replacement: &str) -> String {
    Placeholder::AppName.apply(src, replacement)
}

/// Substitute both name markers, app name first.
pub fn substitute_names(src: &str, app_name: &str, chart_name: &str) -> String {
    substitute_chart_name(&substitute_app_name(src, app_name), chart_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "name: {{ .Values.<APPNAME>.appname }}\n\
                        labels: {{- include \"<CHARTNAME>.labels\" . }}\n\
                        other: <APPNAME>-<CHARTNAME>\n";

    #[test]
    fn replaces_every_occurrence() {
        let out = substitute_app_name(BODY, "web");
        assert!(!out.contains(APP_NAME_MARKER));
        assert_eq!(out.matches("web").count(), 2);
        assert!(out.contains(CHART_NAME_MARKER));
    }

    #[test]
    fn chart_name_substitution() {
        let out = substitute_chart_name(BODY, "demo");
        assert!(out.contains("include \"demo.labels\""));
        assert!(out.contains("<APPNAME>-demo"));
    }

    #[test]
    fn input_is_left_untouched() {
        let src = String::from(BODY);
        let _ = substitute_chart_name(&src, "demo");
        assert_eq!(src, BODY);
    }

    #[test]
    fn self_replacement_is_identity() {
        for p in Placeholder::ALL {
            assert_eq!(p.apply(BODY, p.marker()), BODY);
        }
    }

    #[test]
    fn substitution_order_does_not_matter() {
        let app_first = substitute_chart_name(&substitute_app_name(BODY, "web"), "demo");
        let chart_first = substitute_app_name(&substitute_chart_name(BODY, "demo"), "web");
        assert_eq!(app_first, chart_first);
        assert_eq!(substitute_names(BODY, "web", "demo"), app_first);
    }

    #[test]
    fn markers_are_disjoint() {
        for a in Placeholder::ALL {
            for b in Placeholder::ALL {
                if a != b {
                    assert!(!a.marker().contains(b.marker()));
                }
            }
        }
    }

    #[test]
    fn no_markers_means_no_change() {
        let plain = "apiVersion: v1\nkind: Service\n";
        assert_eq!(substitute_names(plain, "a", "b"), plain);
        assert!(!Placeholder::AppName.occurs_in(plain));
    }
}
