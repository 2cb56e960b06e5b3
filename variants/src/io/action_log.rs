//! Action log loading with JSON Schema validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use jsonschema::Draft;
use serde_json::Value;
use tracing::debug;

use crate::core::types::VariantAction;

/// JSON Schema (Draft 2020-12) every action log must satisfy.
pub const ACTION_LOG_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/variant_action/v1.schema.json"
));

/// Read, schema-check and deserialize an action log from disk.
pub fn load_action_log(path: &Path) -> Result<Vec<VariantAction>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read action log {}", path.display()))?;
    let actions =
        parse_action_log(&raw).with_context(|| format!("load action log {}", path.display()))?;
    debug!(path = %path.display(), actions = actions.len(), "loaded action log");
    Ok(actions)
}

/// Parse an action log from a JSON string.
pub fn parse_action_log(raw: &str) -> Result<Vec<VariantAction>> {
    let value: Value = serde_json::from_str(raw).context("parse action log json")?;
    validate_schema(&value)?;
    let actions: Vec<VariantAction> =
        serde_json::from_value(value).context("deserialize action log")?;
    Ok(actions)
}

fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(ACTION_LOG_SCHEMA).context("parse action log schema")?;
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .context("compile action log schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("action log schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}
