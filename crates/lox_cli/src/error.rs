//! Host-side failures. Lexical errors are not here: they are diagnostics.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes, following sysexits.h.
pub const EXIT_USAGE: i32 = 64;
pub const EXIT_DATA_ERROR: i32 = 65;
pub const EXIT_NO_INPUT: i32 = 66;
pub const EXIT_SOFTWARE: i32 = 70;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("cannot encode tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => EXIT_NO_INPUT,
            CliError::Readline(_) | CliError::Json(_) => EXIT_SOFTWARE,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
