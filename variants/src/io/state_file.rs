//! State snapshot loading and JSON rendering.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::types::VariantState;

/// Load a `VariantState` snapshot (`{ "<type>": { "<name>": "<variant>" } }`).
pub fn load_state(path: &Path) -> Result<VariantState> {
    let raw = fs::read_to_string(path).with_context(|| format!("read state {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse state {}", path.display()))
}

/// Load a snapshot if a path was given, else start from the empty state.
pub fn load_state_or_default(path: Option<&Path>) -> Result<VariantState> {
    match path {
        Some(path) => load_state(path),
        None => Ok(VariantState::default()),
    }
}

/// Render state as JSON with a trailing newline.
pub fn render_state(state: &VariantState, compact: bool) -> Result<String> {
    let mut buf = if compact {
        serde_json::to_string(state)
    } else {
        serde_json::to_string_pretty(state)
    }
    .context("serialize state json")?;
    buf.push('\n');
    Ok(buf)
}
