//! CLI output formatting.
//!
//! Provides consistent terminal output with support for JSON mode (for
//! scripting), quiet mode and color control. Handlers print through these
//! helpers instead of calling `println!` with ad-hoc styling.

use std::fmt::Display;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Style};
use serde_json::json;

use super::command::ColorChoice;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Emit ANSI colors.
    pub color: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, color: bool) -> Self {
        Self { json, quiet, color }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(false, false, false)
    }
}

impl ColorChoice {
    /// Whether colors should be emitted on stdout.
    #[must_use]
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
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

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
///
/// Call this early in the CLI entry point.
pub fn configure(config: OutputConfig) {
    write_config(config);
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

/// Emit a typed JSON record. No-op outside JSON mode.
pub fn record(kind: &str, payload: serde_json::Value) {
    if is_json() {
        emit_json_line(kind, payload);
    }
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("{} {}", positive("✓"), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("{} {}", paint("⚠", Style::new().yellow()), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("{} {}", negative("×"), message);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("{}", paint(title, Style::new().bold()));
}

/// Print a note.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("{}", message);
}

/// Print pre-rendered text line by line.
///
/// Suppressed in JSON and quiet modes; JSON callers emit [`record`]s
/// instead.
pub fn lines(content: &str) {
    let config = read_config();
    if config.json || config.quiet {
        return;
    }
    for line in content.lines() {
        println!("{}", line);
    }
}

/// Apply `style` when colors are enabled.
pub fn paint(value: impl Display, style: Style) -> String {
    if read_config().color {
        format!("{}", value.style(style))
    } else {
        value.to_string()
    }
}

/// Format a winning/positive value in green.
pub fn positive(value: impl Display) -> String {
    paint(value, Style::new().green())
}

/// Format a losing/negative value in red.
pub fn negative(value: impl Display) -> String {
    paint(value, Style::new().red())
}

/// Format a shutout count in blue.
pub fn shutout(value: impl Display) -> String {
    paint(value, Style::new().blue())
}

/// Format an event heading in yellow.
pub fn heading(value: impl Display) -> String {
    paint(value, Style::new().yellow())
}

/// The banner printed under a shutout game.
pub fn flawless_victory() -> String {
    paint(
        "FLAWLESS VICTORY!",
        Style::new().red().reversed().blink().bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_plain_text() {
        let config = OutputConfig::default();
        assert!(!config.json && !config.quiet && !config.color);
        assert!(!regular_output_suppressed(OutputConfig::new(true, true, false)));
    }

    #[test]
    fn never_and_always_ignore_terminal() {
        assert!(!ColorChoice::Never.resolve());
        assert!(ColorChoice::Always.resolve());
    }
}
