//! YAML values codec backed by `serde_yaml`.
//!
//! `<<` merge keys are expanded on read, so anchors shared between
//! sections of a values file resolve the way Helm resolves them.

use tracing::trace;

use chartwright_core::{
    application::{ApplicationError, ports::ValuesCodec},
    domain::ValueMap,
    error::{ChartError, ChartResult},
};

/// Reads and writes `values.yaml` documents, keeping key order.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl YamlCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ValuesCodec for YamlCodec {
    fn marshal(&self, values: &ValueMap) -> ChartResult<String> {
        trace!(keys = values.len(), "marshal values");
        serde_yaml::to_string(values).map_err(serialization)
    }

    fn unmarshal(&self, text: &str) -> ChartResult<ValueMap> {
        if is_blank_document(text) {
            return Ok(ValueMap::new());
        }
        let mut document: serde_yaml::Value = serde_yaml::from_str(text).map_err(serialization)?;
        document.apply_merge().map_err(serialization)?;
        serde_yaml::from_value(document).map_err(serialization)
    }
}

fn serialization(err: serde_yaml::Error) -> ChartError {
    ApplicationError::Serialization {
        reason: err.to_string(),
    }
    .into()
}

/// Only whitespace and comments.
fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}
