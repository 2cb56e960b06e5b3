//! Shared deterministic types for the variant slice.
//!
//! These types define the stable contract between the reducer, the store and
//! the serialized action/state files. They hold no I/O state and serialize in
//! a deterministic key order.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Variants keyed by resource name, for a single resource type.
pub type NameVariants = BTreeMap<String, String>;

/// Selected variant per `resource type -> resource name`.
///
/// Serializes as the plain nested object `{ "<type>": { "<name>": "<variant>" } }`.
/// Inner maps sit behind an [`Arc`] so an update only copies the map it writes;
/// every other resource type keeps pointing at the same allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantState {
    types: BTreeMap<String, Arc<NameVariants>>,
}

impl VariantState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new state with `state[resource_type][name] = variant`.
    ///
    /// `self` is left untouched. Unrelated inner maps are shared with the
    /// returned state rather than copied.
    pub fn with_variant(&self, resource_type: &str, name: &str, variant: &str) -> Self {
        let mut types = self.types.clone();
        let names = types.entry(resource_type.to_string()).or_default();
        Arc::make_mut(names).insert(name.to_string(), variant.to_string());
        Self { types }
    }

    /// Variants stored for one resource type.
    pub fn names(&self, resource_type: &str) -> Option<&NameVariants> {
        self.types.get(resource_type).map(Arc::as_ref)
    }

    /// Shared handle to the inner map, for callers that need to compare identity.
    pub fn names_shared(&self, resource_type: &str) -> Option<&Arc<NameVariants>> {
        self.types.get(resource_type)
    }

    /// Resource types with at least one stored selection, in sorted order.
    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Iterate `(type, name, variant)` triples in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.types.iter().flat_map(|(ty, names)| {
            names
                .iter()
                .map(move |(name, variant)| (ty.as_str(), name.as_str(), variant.as_str()))
        })
    }

    /// Total number of stored `(type, name)` selections.
    pub fn len(&self) -> usize {
        self.types.values().map(|names| names.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Payload of the "set variant" action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetVariantPayload {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub variant: String,
}

/// Actions understood by the variant slice.
///
/// Wire shape: `{ "type": "variant/setVariant", "payload": { "type", "name", "variant" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum VariantAction {
    #[serde(
        rename = "variant/setVariant",
        alias = "SET_VARIANT",
        alias = "setVariant"
    )]
    SetVariant(SetVariantPayload),
}

impl VariantAction {
    /// Action type string as written on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            VariantAction::SetVariant(_) => "variant/setVariant",
        }
    }

    pub fn payload(&self) -> &SetVariantPayload {
        match self {
            VariantAction::SetVariant(payload) => payload,
        }
    }
}
