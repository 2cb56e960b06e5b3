//! Deterministic, pure logic for the variant slice.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod reducer;
pub mod resource_type;
pub mod selectors;
pub mod types;
pub mod validation;
