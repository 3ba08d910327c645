//! Standard chart creation and derivation from an existing chart.

use std::fs;
use std::path::Path;

use chartwright_adapters::{
    FsChartStore, LocalFilesystem, MemoryDiagnostics, YamlCodec, builtin_templates,
};
use chartwright_core::{
    application::{ChartService, ports::ValuesCodec},
    domain::{ChartMetadata, Value},
};
use tempfile::TempDir;

fn service(diagnostics: &MemoryDiagnostics) -> ChartService {
    ChartService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(YamlCodec::new()),
        Box::new(FsChartStore::new(Box::new(LocalFilesystem::new()))),
        Box::new(diagnostics.clone()),
        builtin_templates::shared(),
    )
}

#[test]
fn create_writes_standard_layout() {
    let tmp = TempDir::new().unwrap();
    let dir = service(&MemoryDiagnostics::new())
        .create("web", tmp.path())
        .unwrap();

    for file in [
        "Chart.yaml",
        "values.yaml",
        ".helmignore",
        "templates/deployment.yaml",
        "templates/service.yaml",
        "templates/serviceaccount.yaml",
        "templates/hpa.yaml",
        "templates/ingress.yaml",
        "templates/NOTES.txt",
        "templates/_helpers.tpl",
        "templates/tests/test-connection.yaml",
    ] {
        let text = fs::read_to_string(dir.join(file)).unwrap();
        assert!(!text.contains("<CHARTNAME>"), "{file}");
    }
    assert!(dir.join("charts").is_dir());

    let chart = fs::read_to_string(dir.join("Chart.yaml")).unwrap();
    assert!(chart.contains("\nname: web\n"));

    let values = YamlCodec
        .unmarshal(&fs::read_to_string(dir.join("values.yaml")).unwrap())
        .unwrap();
    assert_eq!(values.get("replicaCount").and_then(Value::as_i64), Some(1));
    assert_eq!(
        Value::from(values)
            .lookup("service.type")
            .and_then(Value::as_str),
        Some("ClusterIP")
    );
}

#[test]
fn create_twice_warns_for_every_file() {
    let tmp = TempDir::new().unwrap();
    let diagnostics = MemoryDiagnostics::new();
    let svc = service(&diagnostics);

    svc.create("web", tmp.path()).unwrap();
    assert!(diagnostics.messages().is_empty());

    svc.create("web", tmp.path()).unwrap();
    assert_eq!(
        diagnostics.messages().len(),
        builtin_templates::registry().starter_files().len() + 1
    );
}

#[test]
fn create_requires_existing_destination() {
    let tmp = TempDir::new().unwrap();
    let err = service(&MemoryDiagnostics::new())
        .create("web", &tmp.path().join("missing"))
        .unwrap_err();
    assert!(err.is_invalid_output_path());
}

#[test]
fn derive_renames_created_chart() {
    let tmp = TempDir::new().unwrap();
    let svc = service(&MemoryDiagnostics::new());

    // A starter chart that still carries the marker.
    let starter = tmp.path().join("starters/base");
    fs::create_dir_all(starter.join("templates")).unwrap();
    fs::write(
        starter.join("Chart.yaml"),
        "apiVersion: v2\nname: base\nversion: 0.3.0\n",
    )
    .unwrap();
    fs::write(
        starter.join("values.yaml"),
        "# Values for <CHARTNAME>\nnameOverride: <CHARTNAME>\n",
    )
    .unwrap();
    fs::write(
        starter.join("templates/deployment.yaml"),
        "name: {{ include \"<CHARTNAME>.fullname\" . }}\n",
    )
    .unwrap();

    let out = tmp.path().join("out");
    fs::create_dir_all(&out).unwrap();

    let metadata = ChartMetadata::new("billing")
        .with_version("1.0.0")
        .with_description("Billing service");
    let dir = svc.create_from(metadata, &out, &starter).unwrap();
    assert_eq!(dir, out.join("billing"));

    assert_eq!(
        fs::read_to_string(dir.join("values.yaml")).unwrap(),
        "# Values for billing\nnameOverride: billing\n"
    );
    assert_eq!(
        fs::read_to_string(dir.join("templates/deployment.yaml")).unwrap(),
        "name: {{ include \"billing.fullname\" . }}\n"
    );

    let chart: ChartMetadata =
        serde_yaml::from_str(&fs::read_to_string(dir.join("Chart.yaml")).unwrap()).unwrap();
    assert_eq!(chart.name, "billing");
    assert_eq!(chart.version, "1.0.0");
    assert_eq!(chart.description.as_deref(), Some("Billing service"));
}

#[test]
fn derive_from_missing_source_fails() {
    let tmp = TempDir::new().unwrap();
    let err = service(&MemoryDiagnostics::new())
        .create_from(
            ChartMetadata::new("billing"),
            tmp.path(),
            Path::new("/definitely/not/here"),
        )
        .unwrap_err();
    assert!(err.to_string().contains("could not load chart"));
    assert!(!tmp.path().join("billing").exists());
}
