//! Test-only helpers for building variant states and action logs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::types::{VariantAction, VariantState};

/// Build a state from `(type, name, variant)` triples, applied in order.
pub fn state_from(entries: &[(&str, &str, &str)]) -> VariantState {
    entries
        .iter()
        .fold(VariantState::default(), |state, (ty, name, variant)| {
            state.with_variant(ty, name, variant)
        })
}

/// Write `actions` as `actions.json` under `dir` and return its path.
pub fn write_action_log(dir: &Path, actions: &[VariantAction]) -> Result<PathBuf> {
    let path = dir.join("actions.json");
    let mut buf = serde_json::to_string_pretty(actions).context("serialize actions")?;
    buf.push('\n');
    fs::write(&path, buf).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Scratch directory for CLI tests, removed on drop.
pub struct TestDir {
    dir: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("create tempdir")?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the scratch directory, creating parents.
    pub fn write(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
