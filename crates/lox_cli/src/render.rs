//! Console output: token dumps and diagnostics.

use crate::error::Result;
use clap::ValueEnum;
use lox_core::text::LineMap;
use lox_diagnostics::Diagnostic;
use lox_scanner::Token;
use std::fmt::Write as _;

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Token dump format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `KIND lexeme literal` line per token.
    Text,
    /// A JSON array of tokens.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => stderr_is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

pub fn format_tokens(tokens: &[Token], format: Format) -> Result<String> {
    match format {
        Format::Text => {
            let mut out = String::new();
            for token in tokens {
                let _ = writeln!(out, "{}", token);
            }
            Ok(out)
        }
        Format::Json => {
            let mut out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Renders diagnostics against the source they were reported for.
pub struct Renderer<'s> {
    source: &'s str,
    line_map: LineMap,
    color: bool,
}

impl<'s> Renderer<'s> {
    pub fn new(source: &'s str, color: bool) -> Self {
        Self {
            source,
            line_map: LineMap::new(source),
            color,
        }
    }

    /// The diagnostic header followed, when a span is known, by the offending
    /// source line and a caret marker under the span.
    pub fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();
        if self.color {
            if let Some(ref file) = diag.file {
                let _ = write!(out, "{}{}{}:", CYAN, file, RESET);
            }
            let _ = write!(
                out,
                "[line {}] {}{}error{}",
                diag.line, BOLD, RED, RESET
            );
            if diag.code != 0 {
                let _ = write!(out, " {}LOX{}{}", CYAN, diag.code, RESET);
            }
            let _ = writeln!(out, ": {}", diag.message_text);
        } else {
            let _ = writeln!(out, "{}", diag);
        }

        if let Some(span) = diag.span {
            let position = self.line_map.line_and_column_of(span.start);
            if let Some(text) = self.source.lines().nth((position.line - 1) as usize) {
                let gutter = format!("{} | ", position.line);
                let line_len = text.chars().count() as u32;
                let available = line_len.saturating_sub(position.column - 1);
                let width = span.length.min(available).max(1) as usize;
                // Tabs in the prefix are kept so the caret lines up however
                // the terminal expands them.
                let mut pad = " ".repeat(gutter.len());
                pad.extend(
                    text.chars()
                        .take((position.column - 1) as usize)
                        .map(|c| if c == '\t' { '\t' } else { ' ' }),
                );
                let marker = "^".repeat(width);
                if self.color {
                    let _ = writeln!(out, "{}{}{}{}", GRAY, gutter, RESET, text);
                    let _ = writeln!(out, "{}{}{}{}", pad, RED, marker, RESET);
                } else {
                    let _ = writeln!(out, "{}{}", gutter, text);
                    let _ = writeln!(out, "{}{}", pad, marker);
                }
            }
        }
        out
    }

    /// Closing summary line, e.g. `Found 2 errors.`
    pub fn summary(&self, count: usize) -> String {
        let text = format!("Found {} error{}.", count, if count == 1 { "" } else { "s" });
        if self.color {
            format!("{}{}{}", RED, text, RESET)
        } else {
            text
        }
    }
}

fn stderr_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_diagnostics::DiagnosticCollection;
    use lox_scanner::scan_tokens;

    fn diagnostics_for(source: &str) -> Vec<Diagnostic> {
        let mut diagnostics = DiagnosticCollection::new();
        scan_tokens(source, &mut diagnostics);
        diagnostics.into_diagnostics()
    }

    #[test]
    fn test_render_points_at_character() {
        let source = "var a;\nvar b = @;";
        let diags = diagnostics_for(source);
        let rendered = Renderer::new(source, false).render(&diags[0]);
        assert_eq!(
            rendered,
            "[line 2] error LOX1001: Unexpected character '@'.\n2 | var b = @;\n            ^\n"
        );
    }

    #[test]
    fn test_render_clamps_multi_line_span() {
        let source = "x = \"abc\ndef";
        let diags = diagnostics_for(source);
        let rendered = Renderer::new(source, false).render(&diags[0]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "[line 1] error LOX1002: Unterminated string.");
        assert_eq!(lines[1], "1 | x = \"abc");
        assert_eq!(lines[2], "        ^^^^");
    }

    #[test]
    fn test_render_keeps_tabs_before_caret() {
        let source = "\tif (x)\t@";
        let diags = diagnostics_for(source);
        let rendered = Renderer::new(source, false).render(&diags[0]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "1 | \tif (x)\t@");
        assert_eq!(lines[2], "    \t      \t^");
    }

    #[test]
    fn test_render_without_span() {
        let diag = Diagnostic::from_text(3, "Odd.");
        assert_eq!(Renderer::new("", false).render(&diag), "[line 3] error: Odd.\n");
    }

    #[test]
    fn test_summary_pluralizes() {
        let renderer = Renderer::new("", false);
        assert_eq!(renderer.summary(1), "Found 1 error.");
        assert_eq!(renderer.summary(3), "Found 3 errors.");
    }

    #[test]
    fn test_text_dump() {
        let mut diagnostics = DiagnosticCollection::new();
        let tokens = scan_tokens("print 1;", &mut diagnostics);
        let dump = format_tokens(&tokens, Format::Text).unwrap();
        assert_eq!(dump, "PRINT print null\nNUMBER 1 1.0\nSEMICOLON ; null\nEOF  null\n");
    }

    #[test]
    fn test_json_dump_is_an_array() {
        let mut diagnostics = DiagnosticCollection::new();
        let tokens = scan_tokens("a", &mut diagnostics);
        let dump = format_tokens(&tokens, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&dump).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["kind"], "IDENTIFIER");
    }
}
