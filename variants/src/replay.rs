//! Replay orchestration for `variants apply` and `variants validate`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::core::types::{VariantAction, VariantState};
use crate::core::validation::validate_payload;
use crate::io::action_log::load_action_log;
use crate::io::config::VariantsConfig;
use crate::io::state_file::load_state_or_default;
use crate::store::VariantStore;

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub state: VariantState,
    pub applied: u64,
}

/// Check every action's payload when `strict_resource_types` is set.
///
/// Lenient configs accept any payload, same as the reducer. Errors are
/// prefixed with the action index so a log can be fixed in one pass.
pub fn check_actions(cfg: &VariantsConfig, actions: &[VariantAction]) -> Vec<String> {
    if !cfg.strict_resource_types {
        return Vec::new();
    }
    actions
        .iter()
        .enumerate()
        .flat_map(|(index, action)| {
            validate_payload(action.payload())
                .into_iter()
                .map(move |err| format!("action {}: {}", index, err))
        })
        .collect()
}

/// Validate and apply `actions` on top of `initial`.
///
/// Nothing is dispatched if any action fails validation.
pub fn replay(
    cfg: &VariantsConfig,
    initial: VariantState,
    actions: &[VariantAction],
) -> Result<ReplayOutcome> {
    let errors = check_actions(cfg, actions);
    if !errors.is_empty() {
        warn!(violations = errors.len(), "action log rejected");
        bail!("invalid actions:\n- {}", errors.join("\n- "));
    }

    let mut store = VariantStore::with_state(initial);
    for action in actions {
        store.dispatch(action);
    }
    let applied = store.dispatched();
    info!(applied, selections = store.state().len(), "replay complete");
    Ok(ReplayOutcome {
        state: store.into_state(),
        applied,
    })
}

/// Load the optional snapshot and the action log from disk, then replay.
pub fn replay_files(
    cfg: &VariantsConfig,
    state_path: Option<&Path>,
    log_path: &Path,
) -> Result<ReplayOutcome> {
    let initial = load_state_or_default(state_path).context("load initial state")?;
    let actions = load_action_log(log_path)?;
    replay(cfg, initial, &actions)
}

/// Load the action log and report payload violations without applying anything.
pub fn validate_file(cfg: &VariantsConfig, log_path: &Path) -> Result<usize> {
    let actions = load_action_log(log_path)?;
    let errors = check_actions(cfg, &actions);
    if !errors.is_empty() {
        bail!("invalid actions:\n- {}", errors.join("\n- "));
    }
    Ok(actions.len())
}
