//! Payload checks applied before replaying actions in strict mode.
//!
//! The reducer itself accepts any payload; these checks only gate what the
//! replay path is willing to dispatch when `strict_resource_types` is set.

use crate::core::resource_type::ResourceType;
use crate::core::types::SetVariantPayload;

/// Validate a "set variant" payload against the strict-mode rules.
///
/// Returns a sorted, de-duplicated list of error messages (empty when valid).
pub fn validate_payload(payload: &SetVariantPayload) -> Vec<String> {
    let mut errors = Vec::new();

    if payload.resource_type.trim().is_empty() {
        errors.push("type must be non-empty".to_string());
    } else if let Err(err) = payload.resource_type.parse::<ResourceType>() {
        errors.push(err);
    }
    if payload.name.trim().is_empty() {
        errors.push("name must be non-empty".to_string());
    }
    if payload.variant.trim().is_empty() {
        errors.push("variant must be non-empty".to_string());
    }

    errors.sort();
    errors.dedup();
    errors
}
