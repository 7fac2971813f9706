//! CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode, and verbosity levels. Status lines go to
//! stderr-adjacent styling on stdout; JSON mode emits one structured line
//! per event so output stays scriptable.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
///
/// Call this early in the CLI entry point, before any handler prints.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether quiet mode is enabled.
#[must_use]
pub fn is_quiet() -> bool {
    read_config().quiet
}

/// Emit a JSON line with type and payload structure.
pub fn emit_json(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Print a success line, or a JSON event in JSON mode.
pub fn success(message: impl Display) {
    let config = read_config();
    if config.json {
        emit_json("success", json!({ "message": message.to_string() }));
    } else if !config.quiet {
        println!("{} {message}", "✓".green());
    }
}

/// Print an informational line, or a JSON event in JSON mode.
pub fn info(message: impl Display) {
    let config = read_config();
    if config.json {
        emit_json("info", json!({ "message": message.to_string() }));
    } else if !config.quiet {
        println!("{} {message}", "·".dimmed());
    }
}

/// Print a warning line. Not suppressed by quiet mode.
pub fn warn(message: impl Display) {
    let config = read_config();
    if config.json {
        emit_json("warning", json!({ "message": message.to_string() }));
    } else {
        eprintln!("{} {message}", "!".yellow());
    }
}

/// Print an error line. Not suppressed by quiet mode.
pub fn error(message: impl Display) {
    let config = read_config();
    if config.json {
        emit_json("error", json!({ "message": message.to_string() }));
    } else {
        eprintln!("{} {message}", "✗".red());
    }
}

/// Print raw text (tables, plain listings) unless JSON or quiet mode is on.
pub fn raw(message: impl Display) {
    let config = read_config();
    if !config.json && !config.quiet {
        println!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_updates_the_global_flags() {
        configure(OutputConfig::new(false, false, 2));
        assert!(!is_json());
        assert!(!is_quiet());

        configure(OutputConfig::new(true, true, 0));
        assert!(is_json());
        assert!(is_quiet());

        // Reset for any test that runs after in the same process.
        configure(OutputConfig::default());
    }
}
