//! Read-side queries over [`VariantState`].

use crate::core::types::{NameVariants, VariantState};

/// Selected variant for `(resource_type, name)`, if one has been set.
pub fn selected_variant<'a>(
    state: &'a VariantState,
    resource_type: &str,
    name: &str,
) -> Option<&'a str> {
    state
        .names(resource_type)
        .and_then(|names| names.get(name))
        .map(String::as_str)
}

/// Selected variant, or `default` when nothing is selected for the pair.
pub fn selected_variant_or<'a>(
    state: &'a VariantState,
    resource_type: &str,
    name: &str,
    default: &'a str,
) -> &'a str {
    selected_variant(state, resource_type, name).unwrap_or(default)
}

/// All selections for one resource type.
pub fn variants_for_type<'a>(
    state: &'a VariantState,
    resource_type: &str,
) -> Option<&'a NameVariants> {
    state.names(resource_type)
}

/// Resource types with at least one selection, sorted.
pub fn resource_types(state: &VariantState) -> impl Iterator<Item = &str> {
    state.resource_types()
}
