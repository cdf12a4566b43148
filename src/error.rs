//! Unified error types for the classifier crate.
//!
//! The per-cycle classification path is infallible: every brand is matched
//! exhaustively, so nothing there can go wrong at runtime.  Errors only arise
//! at the edges, when a configuration or an external enumeration value is
//! parsed from text.  An unknown brand or gear is a configuration fault and
//! must stop the process at load time rather than fall back to another
//! brand's rules.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Brand identifier outside the known enumeration.
    UnknownBrand,
    /// Gear shifter position outside the known enumeration.
    UnknownGear,
    /// Button type outside the known enumeration.
    UnknownButton,
    /// Configuration is structurally valid but semantically rejected.
    Config(&'static str),
    /// Input text could not be decoded.
    Parse(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBrand => write!(f, "unknown vehicle brand"),
            Self::UnknownGear => write!(f, "unknown gear shifter position"),
            Self::UnknownButton => write!(f, "unknown button type"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Parse(msg) => write!(f, "parse: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match e.classify() {
            Category::Io => Self::Parse("I/O failure while reading JSON"),
            Category::Syntax => Self::Parse("malformed JSON"),
            Category::Data => Self::Parse("JSON does not match the expected schema"),
            Category::Eof => Self::Parse("unexpected end of JSON input"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
