//! Pure reducer for the variant slice.

use crate::core::types::{SetVariantPayload, VariantAction, VariantState};

/// Transforms state in response to actions.
///
/// The reducer is the only place where state transitions happen. It must be a
/// pure function of `(state, action)`: the prior state is borrowed, never
/// mutated, and the next state is returned.
pub trait Reducer {
    type State;
    type Action;

    fn reduce(state: &Self::State, action: &Self::Action) -> Self::State;
}

/// Reducer for selected resource variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantSlice;

impl Reducer for VariantSlice {
    type State = VariantState;
    type Action = VariantAction;

    fn reduce(state: &VariantState, action: &VariantAction) -> VariantState {
        match action {
            VariantAction::SetVariant(payload) => {
                state.with_variant(&payload.resource_type, &payload.name, &payload.variant)
            }
        }
    }
}

/// Apply `action` to `state`, treating a missing state as the empty default.
pub fn reduce(state: Option<&VariantState>, action: &VariantAction) -> VariantState {
    match state {
        Some(state) => VariantSlice::reduce(state, action),
        None => VariantSlice::reduce(&VariantState::default(), action),
    }
}

/// Action creator for "set variant".
pub fn set_variant(
    resource_type: impl Into<String>,
    name: impl Into<String>,
    variant: impl Into<String>,
) -> VariantAction {
    VariantAction::SetVariant(SetVariantPayload {
        resource_type: resource_type.into(),
        name: name.into(),
        variant: variant.into(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::selectors::selected_variant;
    use crate::test_support::state_from;
    use serde_json::json;

    /// Starting from no state yields exactly the one selection.
    #[test]
    fn reduce_sets_variant_from_undefined_state() {
        let action = set_variant("Feature", "abc", "v1");
        let next = reduce(None, &action);
        assert_eq!(
            serde_json::to_value(&next).expect("serialize"),
            json!({ "Feature": { "abc": "v1" } })
        );
    }

    /// Setting a pair that already has a variant replaces it.
    #[test]
    fn reduce_overwrites_existing_variant() {
        let prev = state_from(&[("Feature", "abc", "v1")]);
        let next = reduce(Some(&prev), &set_variant("Feature", "abc", "v2"));
        assert_eq!(selected_variant(&next, "Feature", "abc"), Some("v2"));
        assert_eq!(next.len(), 1);
    }

    /// Other (type, name) pairs survive untouched.
    #[test]
    fn reduce_preserves_other_entries() {
        let prev = state_from(&[
            ("Feature", "abc", "v1"),
            ("Feature", "def", "v7"),
            ("Label", "fraud", "default"),
        ]);
        let next = reduce(Some(&prev), &set_variant("Feature", "abc", "v2"));

        assert_eq!(selected_variant(&next, "Feature", "abc"), Some("v2"));
        assert_eq!(selected_variant(&next, "Feature", "def"), Some("v7"));
        assert_eq!(selected_variant(&next, "Label", "fraud"), Some("default"));
        assert_eq!(next.len(), 3);
    }

    /// The borrowed prior state is never mutated.
    #[test]
    fn reduce_leaves_prior_state_unchanged() {
        let prev = state_from(&[("Feature", "abc", "v1")]);
        let snapshot = prev.clone();
        let _ = reduce(Some(&prev), &set_variant("Feature", "abc", "v2"));
        let _ = reduce(Some(&prev), &set_variant("Source", "s", "v1"));
        assert_eq!(prev, snapshot);
    }

    /// Inner maps for untouched resource types are shared, not copied.
    #[test]
    fn reduce_shares_untouched_types() {
        let prev = state_from(&[("Feature", "abc", "v1"), ("Label", "fraud", "default")]);
        let next = reduce(Some(&prev), &set_variant("Feature", "abc", "v2"));

        let prev_labels = prev.names_shared("Label").expect("labels before");
        let next_labels = next.names_shared("Label").expect("labels after");
        assert!(Arc::ptr_eq(prev_labels, next_labels));

        let prev_features = prev.names_shared("Feature").expect("features before");
        let next_features = next.names_shared("Feature").expect("features after");
        assert!(!Arc::ptr_eq(prev_features, next_features));
    }

    /// Every (type, name, variant) triple lands where it was aimed, whatever
    /// was stored before.
    #[test]
    fn reduce_sets_requested_pair_for_many_inputs() {
        let priors = [
            VariantState::default(),
            state_from(&[("Feature", "abc", "old")]),
            state_from(&[("TrainingSet", "ts", "v1"), ("Provider", "pg", "main")]),
        ];
        let inputs = [
            ("Feature", "abc", "v1"),
            ("Label", "", "v2"),
            ("custom kind", "name with spaces", "ünïcode"),
        ];

        for prior in &priors {
            for (ty, name, variant) in inputs {
                let next = VariantSlice::reduce(prior, &set_variant(ty, name, variant));
                assert_eq!(selected_variant(&next, ty, name), Some(variant));
                for (other_ty, other_name, other_variant) in prior.iter() {
                    if (other_ty, other_name) != (ty, name) {
                        assert_eq!(
                            selected_variant(&next, other_ty, other_name),
                            Some(other_variant)
                        );
                    }
                }
            }
        }
    }
}
