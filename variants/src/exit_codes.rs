//! Stable exit codes for variants CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, config or log, or any other error.
pub const INVALID: i32 = 1;
/// `variants get` found no selection and no default was given.
pub const NOT_SELECTED: i32 = 2;
