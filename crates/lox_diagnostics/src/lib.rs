//! lox_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! The scanner never aborts on malformed input. It hands every problem to a
//! [`Reporter`] owned by the host and keeps going, so one pass surfaces all
//! lexical errors in a source.

use lox_core::text::TextSpan;
use std::fmt;

/// A diagnostic message template with a code. Every lexical problem is an
/// error; the scanner has nothing to warn about.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code, rendered as `LOX{code}`.
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The file path where this diagnostic occurred, if any.
    pub file: Option<String>,
    /// 1-based line where the problem starts.
    pub line: u32,
    /// The source span of the offending text, if known.
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new diagnostic at a line.
    pub fn new(line: u32, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            line,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
        }
    }

    /// Create a diagnostic from a bare line and message, as handed to
    /// [`Reporter::report`] by callers that have no message template.
    pub fn from_text(line: u32, message: &str) -> Self {
        Self {
            file: None,
            line,
            span: None,
            message_text: message.to_string(),
            code: 0,
        }
    }

    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}:", file)?;
        }
        write!(f, "[line {}] error", self.line)?;
        if self.code != 0 {
            write!(f, " LOX{}", self.code)?;
        }
        write!(f, ": {}", self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// The error sink the scanner reports lexical problems to.
///
/// Reporting is side-effect only: nothing flows back into the scanner, and
/// implementations must not panic to unwind out of a scan.
pub trait Reporter {
    /// Record a problem starting on `line` (1-based).
    fn report(&mut self, line: u32, message: &str);

    /// Record a structured diagnostic. Sinks that only care about text can
    /// rely on the default, which forwards to [`Reporter::report`].
    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.report(diagnostic.line, &diagnostic.message_text);
    }
}

impl<F> Reporter for F
where
    F: FnMut(u32, &str),
{
    fn report(&mut self, line: u32, message: &str) {
        self(line, message)
    }
}

/// A collection of diagnostics accumulated while scanning.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl Reporter for DiagnosticCollection {
    fn report(&mut self, line: u32, message: &str) {
        self.add(Diagnostic::from_text(line, message));
    }

    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNEXPECTED_CHARACTER: DiagnosticMessage = diag!(1001, "Unexpected character '{0}'.");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(1002, "Unterminated string.");
}
