//! Selected-variant state CLI.
//!
//! Applies "set variant" actions to a variant state snapshot and prints the
//! resulting state as JSON. Nothing is written back to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use variants::core::reducer::set_variant;
use variants::core::selectors::{selected_variant, selected_variant_or};
use variants::exit_codes;
use variants::io::config::{DEFAULT_CONFIG_PATH, VariantsConfig, load_config};
use variants::io::state_file::{load_state_or_default, render_state};
use variants::replay::{replay, replay_files, validate_file};

#[derive(Parser)]
#[command(
    name = "variants",
    version,
    about = "Selected-variant state for feature-store resources"
)]
struct Cli {
    /// Path to config.toml (defaults are used if the file is missing).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a single "set variant" action and print the new state.
    Set {
        /// Resource type (e.g. Feature, Label, Source, TrainingSet).
        #[arg(long = "type")]
        resource_type: String,
        /// Resource name.
        #[arg(long)]
        name: String,
        /// Variant to select.
        #[arg(long)]
        variant: String,
        /// Initial state snapshot (JSON). Starts empty if omitted.
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Replay an action log (JSON array) and print the final state.
    Apply {
        log: PathBuf,
        /// Initial state snapshot (JSON). Starts empty if omitted.
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Print the selected variant for one resource.
    Get {
        #[arg(long = "type")]
        resource_type: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        state: Option<PathBuf>,
        /// Printed when no variant is selected.
        #[arg(long)]
        default: Option<String>,
    },
    /// Check an action log against the schema and payload rules without applying it.
    Validate { log: PathBuf },
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config).context("load config")?;
    variants::logging::init(&cfg.log_filter);
    debug!(config = %cli.config.display(), "config loaded");

    match cli.command {
        Command::Set {
            resource_type,
            name,
            variant,
            state,
        } => cmd_set(&cfg, &resource_type, &name, &variant, state.as_deref()),
        Command::Apply { log, state } => cmd_apply(&cfg, &log, state.as_deref()),
        Command::Get {
            resource_type,
            name,
            state,
            default,
        } => cmd_get(
            &resource_type,
            &name,
            state.as_deref(),
            default.as_deref(),
        ),
        Command::Validate { log } => cmd_validate(&cfg, &log),
    }
}

fn cmd_set(
    cfg: &VariantsConfig,
    resource_type: &str,
    name: &str,
    variant: &str,
    state_path: Option<&Path>,
) -> Result<i32> {
    let initial = load_state_or_default(state_path)?;
    let action = set_variant(resource_type, name, variant);
    let outcome = replay(cfg, initial, std::slice::from_ref(&action))?;
    print!("{}", render_state(&outcome.state, cfg.output.compact)?);
    Ok(exit_codes::OK)
}

fn cmd_apply(cfg: &VariantsConfig, log: &Path, state_path: Option<&Path>) -> Result<i32> {
    let outcome = replay_files(cfg, state_path, log)?;
    print!("{}", render_state(&outcome.state, cfg.output.compact)?);
    Ok(exit_codes::OK)
}

fn cmd_get(
    resource_type: &str,
    name: &str,
    state_path: Option<&Path>,
    default: Option<&str>,
) -> Result<i32> {
    let state = load_state_or_default(state_path)?;
    let variant = match default {
        Some(default) => selected_variant_or(&state, resource_type, name, default),
        None => match selected_variant(&state, resource_type, name) {
            Some(variant) => variant,
            None => {
                eprintln!("no variant selected for {} '{}'", resource_type, name);
                return Ok(exit_codes::NOT_SELECTED);
            }
        },
    };
    println!("{}", variant);
    Ok(exit_codes::OK)
}

fn cmd_validate(cfg: &VariantsConfig, log: &Path) -> Result<i32> {
    let count = validate_file(cfg, log)?;
    println!("ok: {} actions", count);
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_set() {
        let cli = Cli::parse_from([
            "variants", "set", "--type", "Feature", "--name", "abc", "--variant", "v1",
        ]);
        match cli.command {
            Command::Set {
                resource_type,
                name,
                variant,
                state,
            } => {
                assert_eq!(resource_type, "Feature");
                assert_eq!(name, "abc");
                assert_eq!(variant, "v1");
                assert!(state.is_none());
            }
            _ => panic!("expected set"),
        }
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn parse_apply_with_state_and_config() {
        let cli = Cli::parse_from([
            "variants",
            "apply",
            "log.json",
            "--state",
            "state.json",
            "--config",
            "cfg.toml",
        ]);
        assert_eq!(cli.config, PathBuf::from("cfg.toml"));
        assert!(matches!(
            cli.command,
            Command::Apply { ref log, state: Some(ref state) }
                if log == Path::new("log.json") && state == Path::new("state.json")
        ));
    }

    #[test]
    fn parse_get_default() {
        let cli = Cli::parse_from([
            "variants", "get", "--type", "Label", "--name", "l", "--default", "main",
        ]);
        assert!(matches!(
            cli.command,
            Command::Get { default: Some(ref d), .. } if d == "main"
        ));
    }

    #[test]
    fn set_requires_variant() {
        assert!(
            Cli::try_parse_from(["variants", "set", "--type", "Feature", "--name", "abc"]).is_err()
        );
    }
}
