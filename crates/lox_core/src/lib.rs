//! lox_core: Source-location primitives shared by the Lox front end.
//!
//! Provides text spans over the scanned source and a line map for turning
//! offsets back into line/column positions for diagnostics.

pub mod text;

// Re-export commonly used types
pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
