//! I/O helpers for variants commands.

pub mod action_log;
pub mod config;
pub mod state_file;
