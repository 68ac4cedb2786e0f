//! Error Types for Reading Checks and Rendering
//!
//! ## Design Philosophy
//!
//! The error system follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: each variant is a few bytes at most; errors may be
//!    returned from hot paths on the sensor node.
//!
//! 2. **No Heap Allocation**: all error data is inline - no String, only
//!    `&'static str` field names. This ensures deterministic memory usage.
//!
//! 3. **Copy Semantics**: errors implement Copy for efficient return from
//!    functions without move semantics complications.
//!
//! Note that none of the core reading operations fail: construction accepts
//! any numeric input, and normalization and `Display` are infallible. The
//! fallible surface is limited to [`Reading::check`](crate::Reading::check)
//! and the fixed-capacity renderers.

use thiserror_no_std::Error;

/// Result type for reading checks and rendering operations
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Reading errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingError {
    /// The reading was constructed empty - no measurements are present
    #[error("reading constructed empty; no measurements present")]
    Empty,

    /// A measurement is NaN or infinite
    #[error("field {field} is not a finite number")]
    NotFinite {
        /// Name of the offending measurement field
        field: &'static str,
    },

    /// A fixed-capacity render buffer was too small for the formatted text
    #[error("render buffer too small for formatted reading")]
    BufferOverflow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Empty =>
                defmt::write!(fmt, "reading empty"),
            Self::NotFinite { field } =>
                defmt::write!(fmt, "field {} not finite", field),
            Self::BufferOverflow =>
                defmt::write!(fmt, "render buffer overflow"),
        }
    }
}
