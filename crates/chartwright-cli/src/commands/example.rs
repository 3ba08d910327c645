//! `chartwright example`: print a manifest that `generate` accepts as-is.

use chartwright_core::domain::{Application, ApplicationSet, ValueMap};

use crate::{
    cli::{ExampleArgs, ManifestFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

const EXAMPLE_VALUES: &str = r#"{
  "version": "1.0.0",
  "value": {
    "replicaCount": 1,
    "image": { "repository": "nginx", "pullPolicy": "IfNotPresent", "tag": "" },
    "imagePullSecrets": [],
    "nameOverride": "",
    "fullnameOverride": "",
    "podAnnotations": {},
    "podSecurityContext": {},
    "securityContext": {},
    "service": { "type": "ClusterIP", "port": 80 },
    "resources": {},
    "nodeSelector": {},
    "affinity": {},
    "volumeMounts": [],
    "volumes": [],
    "env": [
      { "name": "APP_PORT", "value": "8088" },
      { "name": "APP_RUN_MODE", "value": "fg" }
    ]
  }
}"#;

pub fn execute(args: ExampleArgs, output: OutputManager) -> CliResult<()> {
    let set = example_set()?;
    let text = render(&set, args.format)?;
    output.raw(&text)?;
    Ok(())
}

/// Chart `demo` with three applications, each a deployment plus a service.
pub fn example_set() -> CliResult<ApplicationSet> {
    let mut set = ApplicationSet::new("demo", ".").with_version("1.0.0");
    for name in ["app1", "app2", "app3"] {
        let mut values: ValueMap =
            serde_json::from_str(EXAMPLE_VALUES).map_err(|e| CliError::InvalidInput {
                message: format!("example values are not valid JSON: {e}"),
                source: Some(Box::new(e)),
            })?;
        values.insert("appname", name);
        set = set.with_application(
            Application::new(name)
                .with_resource_types(["deployment", "svc"])
                .with_values(values),
        );
    }
    Ok(set)
}

fn render(set: &ApplicationSet, format: ManifestFormat) -> CliResult<String> {
    let rendered = match format {
        ManifestFormat::Yaml => serde_yaml::to_string(set).map_err(|e| e.to_string()),
        ManifestFormat::Json => serde_json::to_string_pretty(set)
            .map(|json| json + "\n")
            .map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| CliError::InvalidInput {
        message: format!("cannot render example manifest: {message}"),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartwright_core::domain::{DomainValidator, Value};

    #[test]
    fn example_is_valid() {
        let set = example_set().unwrap();
        DomainValidator::validate_application_set(&set).unwrap();
        assert_eq!(set.applications().len(), 3);
        assert_eq!(
            set.applications()[1].values().get("appname").and_then(Value::as_str),
            Some("app2")
        );
    }

    #[test]
    fn both_formats_parse_back() {
        let set = example_set().unwrap();
        for format in [ManifestFormat::Yaml, ManifestFormat::Json] {
            let text = render(&set, format).unwrap();
            let back: ApplicationSet = serde_yaml::from_str(&text).unwrap();
            assert_eq!(back, set, "{format:?}");
        }
    }

    #[test]
    fn yaml_uses_manifest_keys() {
        let text = render(&example_set().unwrap(), ManifestFormat::Yaml).unwrap();
        assert!(text.contains("name: demo\n"));
        assert!(text.contains("path: .\n"));
        assert!(text.contains("- deployment\n"));
    }
}
