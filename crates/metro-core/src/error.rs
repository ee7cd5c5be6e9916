//! Crate-wide error type, shared by every `metro-*` crate.
//!
//! Sub-crates may define their own narrower error enums and convert them
//! into `MetroError` via `From`, the way `dt_mobility::MobilityError` wraps
//! `dt_spatial::SpatialError` — both patterns are used below, per crate.

use thiserror::Error;

/// The three error kinds named in §7, plus an `Io` convenience variant for
/// `#[from] std::io::Error` conversions at the parsing boundary.
#[derive(Debug, Error)]
pub enum MetroError {
    /// Missing argument, unopenable input file, or malformed content (§7).
    #[error("input error: {0}")]
    Input(String),

    /// Receive count mismatch with the statically expected per-tick message
    /// count (§4.5, §7). A correct implementation never triggers this.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A failure reported by the message-passing runtime (§7). Fatal; no
    /// retry, no partial progress is preserved.
    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `metro-*` crates.
pub type MetroResult<T> = Result<T, MetroError>;
