//! Selected-variant state for feature-store resources.
//!
//! Tracks which variant of each resource (keyed by resource type and name) is
//! selected, updated by a single "set variant" action through a pure reducer.
//!
//! - **[`core`]**: Pure, deterministic logic (state, reducer, selectors, validation).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Config, action log and state snapshot files.
//!
//! [`store`] owns the live state; [`replay`] wires core logic to I/O for the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod replay;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
