//! Shared output layer for pretty/text/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: pretty output for humans, compact text for pipes, or stable JSON.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format` / `--json` flag
//! 2. `SHOPFRONT_FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. `output` in the user config file
//! 4. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

use shopfront_core::error::ShopfrontError;

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 72;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<12} {}", format!("{key}:"), value.as_ref())
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (sections, labels, visual framing).
    Pretty,
    /// Token-efficient plain text for pipes and scripts.
    Text,
    /// Machine-readable JSON (one object per result, or a JSON array).
    Json,
}

impl OutputMode {
    #[allow(dead_code, non_upper_case_globals)]
    pub const Human: Self = Self::Pretty;
    #[allow(dead_code, non_upper_case_globals)]
    pub const Table: Self = Self::Text;

    /// Returns `true` if JSON output was requested.
    #[allow(dead_code)]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Returns `true` if pretty output was requested.
    #[allow(dead_code)]
    pub fn is_pretty(self) -> bool {
        matches!(self, Self::Pretty)
    }

    /// Returns `true` if text output was requested.
    #[allow(dead_code)]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

/// Core resolution logic, separated from I/O for testability.
///
/// `format_flag` — explicit `--format` value if provided.
/// `json_flag` — the `--json` shorthand.
/// `format_env` — the value of `SHOPFRONT_FORMAT` if set.
/// `user_output` — the `output` entry from the user config file, if any.
/// `is_tty` — true if stdout is a TTY.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    user_output: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    for candidate in [format_env, user_output].into_iter().flatten() {
        // Legacy names from older releases still resolve.
        match candidate.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" | "table" => return OutputMode::Text,
            "pretty" | "human" => return OutputMode::Pretty,
            _ => {} // unknown value — fall through to the next source
        }
    }

    // Default: pretty if TTY, text if piped.
    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from CLI flags, environment, user config, and
/// TTY defaults.
pub fn resolve_output_mode(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    user_output: Option<&str>,
) -> OutputMode {
    let env_val = std::env::var("SHOPFRONT_FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(format_flag, json_flag, env_val.as_deref(), user_output, is_tty)
}

/// Trait implemented by any CLI result type that can be rendered in all modes.
///
/// Implementors provide rendering methods used by pretty/text/json dispatch.
/// The [`render_list`] free function dispatches to the appropriate method
/// based on [`OutputMode`].
pub trait Renderable {
    /// Render for human consumption: text with labels, truncated for readability.
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Render as a JSON value (schema-stable, streaming-safe).
    ///
    /// Implementors should serialize a self-contained JSON object.
    fn render_json(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Render as a single text row (no header; see [`table_headers`]).
    ///
    /// Fields must appear in the same column order as [`table_headers`].
    ///
    /// [`table_headers`]: Renderable::table_headers
    fn render_table(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Column headers for text mode, in the same order as [`render_table`] fields.
    ///
    /// Default: returns an empty slice (no header printed).
    ///
    /// [`render_table`]: Renderable::render_table
    fn table_headers() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }
}

/// Render a serializable value with explicit pretty/text renderers.
pub fn render_mode<T: Serialize>(
    mode: OutputMode,
    value: &T,
    text_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => text_fn(value, &mut out)?,
        OutputMode::Pretty => pretty_fn(value, &mut out)?,
    }
    Ok(())
}

/// Render a list of [`Renderable`] items to stdout.
///
/// - In JSON mode, wraps items in a JSON array.
/// - In pretty/text mode, renders items sequentially.
pub fn render_list<R: Renderable>(items: &[R], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Pretty => {
            for item in items {
                item.render_human(&mut out)?;
            }
        }
        OutputMode::Text => {
            // Text defaults to TSV-like rows for token efficiency.
            let headers = if items.is_empty() {
                &[] as &[&str]
            } else {
                R::table_headers()
            };
            if !headers.is_empty() {
                writeln!(out, "{}", headers.join("  "))?;
            }
            for item in items {
                item.render_table(&mut out)?;
            }
        }
        OutputMode::Json => {
            // Streaming-safe JSON array: brackets around one item per line.
            write!(out, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(out, ",")?;
                }
                writeln!(out)?;
                let mut buf = Vec::new();
                item.render_json(&mut buf)?;
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                }
                out.write_all(&buf)?;
            }
            writeln!(out, "\n]")?;
        }
    }
    Ok(())
}

/// A structured error with optional suggestion and error code.
#[derive(Debug, Serialize)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable error code (e.g. "E1001").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CliError {
    /// Create a simple error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            error_code: None,
        }
    }

    /// Create an error with a suggestion and error code.
    #[allow(dead_code)]
    pub fn with_details(
        message: impl Into<String>,
        suggestion: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            suggestion: Some(suggestion.into()),
            error_code: Some(error_code.into()),
        }
    }
}

/// Convert a [`ShopfrontError`] into a [`CliError`], carrying its stable
/// code and hint along.
impl From<&ShopfrontError> for CliError {
    fn from(err: &ShopfrontError) -> Self {
        Self {
            message: err.to_string(),
            suggestion: err.suggestion(),
            error_code: Some(err.error_code().to_string()),
        }
    }
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({
                "error": error,
            });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Pretty | OutputMode::Text => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ── OutputMode ──────────────────────────────────────────────────────────

    #[test]
    fn output_mode_is_json() {
        assert!(OutputMode::Json.is_json());
        assert!(!OutputMode::Human.is_json());
        assert!(!OutputMode::Table.is_json());
    }

    #[test]
    fn output_mode_pretty_and_text() {
        assert!(OutputMode::Pretty.is_pretty());
        assert!(OutputMode::Text.is_text());
        assert!(!OutputMode::Json.is_text());
    }

    // ── resolve_output_mode_inner (testable pure function) ──────────────────

    #[test]
    fn resolve_format_flag_wins_over_everything() {
        let mode = resolve_output_mode_inner(
            Some(OutputMode::Text),
            true,
            Some("pretty"),
            Some("json"),
            true,
        );
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn resolve_json_flag_beats_env_and_user() {
        let mode = resolve_output_mode_inner(None, true, Some("pretty"), Some("text"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn resolve_env_beats_user_config() {
        let mode = resolve_output_mode_inner(None, false, Some("text"), Some("json"), true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn resolve_env_values() {
        for (val, expected) in [
            ("json", OutputMode::Json),
            ("text", OutputMode::Text),
            ("pretty", OutputMode::Pretty),
            ("JSON", OutputMode::Json),
        ] {
            let mode = resolve_output_mode_inner(None, false, Some(val), None, false);
            assert_eq!(mode, expected, "env value {val}");
        }
    }

    #[test]
    fn resolve_legacy_names_still_work() {
        let human = resolve_output_mode_inner(None, false, Some("human"), None, false);
        assert_eq!(human, OutputMode::Pretty);
        let table = resolve_output_mode_inner(None, false, None, Some("table"), true);
        assert_eq!(table, OutputMode::Text);
    }

    #[test]
    fn resolve_user_config_applies_when_no_flag_or_env() {
        let mode = resolve_output_mode_inner(None, false, None, Some("json"), true);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn resolve_unknown_values_fall_through_to_tty() {
        let mode = resolve_output_mode_inner(None, false, Some("yaml"), Some("bogus"), true);
        assert_eq!(mode, OutputMode::Pretty);
        let piped = resolve_output_mode_inner(None, false, Some("yaml"), None, false);
        assert_eq!(piped, OutputMode::Text);
    }

    #[test]
    fn resolve_tty_defaults() {
        assert_eq!(
            resolve_output_mode_inner(None, false, None, None, true),
            OutputMode::Pretty
        );
        assert_eq!(
            resolve_output_mode_inner(None, false, None, None, false),
            OutputMode::Text
        );
    }

    // ── CliError ────────────────────────────────────────────────────────────

    #[test]
    fn cli_error_new_has_no_details() {
        let err = CliError::new("boom");
        assert_eq!(err.message, "boom");
        assert!(err.suggestion.is_none());
        assert!(err.error_code.is_none());
    }

    #[test]
    fn cli_error_with_details_serializes_all_fields() {
        let err = CliError::with_details("boom", "try again", "E9001");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["message"], "boom");
        assert_eq!(json["suggestion"], "try again");
        assert_eq!(json["error_code"], "E9001");
    }

    #[test]
    fn cli_error_skips_missing_fields_in_json() {
        let err = CliError::new("boom");
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("suggestion").is_none());
        assert!(json.get("error_code").is_none());
    }

    #[test]
    fn shopfront_error_converts_with_code_and_hint() {
        let source = serde_json::from_str::<serde_json::Value>("oops").unwrap_err();
        let err = ShopfrontError::PayloadMalformed {
            path: PathBuf::from("/tmp/p.json"),
            source,
        };
        let cli: CliError = (&err).into();
        assert!(cli.message.contains("/tmp/p.json"));
        assert_eq!(cli.error_code.as_deref(), Some("E1002"));
        assert!(cli.suggestion.is_some());
    }

    // ── pretty helpers ──────────────────────────────────────────────────────

    #[test]
    fn pretty_rule_has_fixed_width() {
        let mut buf = Vec::new();
        pretty_rule(&mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line.trim_end().len(), PRETTY_RULE_WIDTH);
    }

    #[test]
    fn pretty_section_writes_heading_and_rule() {
        let mut buf = Vec::new();
        pretty_section(&mut buf, "My Orders").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("My Orders\n"));
        assert!(text.contains("----"));
    }

    #[test]
    fn pretty_kv_aligns_keys() {
        let mut buf = Vec::new();
        pretty_kv(&mut buf, "Status", "processing").unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with("Status:"));
        assert!(line.contains(" processing"));
    }

    // ── Renderable dispatch ─────────────────────────────────────────────────

    struct Sample {
        name: &'static str,
    }

    impl Renderable for Sample {
        fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
            writeln!(w, "name: {}", self.name)
        }

        fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
            writeln!(w, "{{\"name\":\"{}\"}}", self.name)
        }

        fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
            writeln!(w, "{}", self.name)
        }

        fn table_headers() -> &'static [&'static str] {
            &["NAME"]
        }
    }

    #[test]
    fn renderable_methods_produce_each_shape() {
        let sample = Sample { name: "widget" };
        let mut human = Vec::new();
        sample.render_human(&mut human).unwrap();
        assert_eq!(String::from_utf8(human).unwrap(), "name: widget\n");

        let mut json = Vec::new();
        sample.render_json(&mut json).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&json).unwrap();
        assert_eq!(parsed["name"], "widget");

        assert_eq!(Sample::table_headers(), &["NAME"]);
    }
}
