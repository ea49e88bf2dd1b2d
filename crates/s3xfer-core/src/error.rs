//! Error types for part planning and header parsing.
//!
//! Planning errors are caller defects (bad arguments) and must not be retried.
//! Header errors describe a response that did not carry what the transfer
//! needed; whether that is worth a retry is the caller's decision.

use thiserror::Error;

/// Invalid arguments passed to the part planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Part size of zero.
    #[error("part size must be nonzero")]
    ZeroPartSize,

    /// Range start is past range end.
    #[error("inverted range: start {start} > end {end}")]
    InvertedRange { start: u64, end: u64 },

    /// Part number outside `[1, num_parts]`.
    #[error("part number {part_number} out of range 1..={num_parts}")]
    PartNumberOutOfRange { part_number: u32, num_parts: u32 },

    /// The range would need more parts than a `u32` part number can address.
    #[error("range needs {num_parts} parts, more than a part number can address")]
    TooManyParts { num_parts: u64 },

    /// A zero-length object has no byte range to plan.
    #[error("cannot plan parts for an empty object")]
    EmptyObject,
}

/// What went wrong with a response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderErrorKind {
    /// Header absent or empty.
    Missing,
    /// Header present but does not match its grammar.
    Malformed,
    /// A numeric field does not fit in a `u64`.
    Overflow,
}

/// Failure to read a required value from response headers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("missing {name} header")]
    Missing { name: &'static str },

    #[error("malformed {name} header {value:?}: {reason}")]
    Malformed {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("{name} header {value:?} overflows a 64-bit length")]
    Overflow { name: &'static str, value: String },
}

impl HeaderError {
    pub fn kind(&self) -> HeaderErrorKind {
        match self {
            HeaderError::Missing { .. } => HeaderErrorKind::Missing,
            HeaderError::Malformed { .. } => HeaderErrorKind::Malformed,
            HeaderError::Overflow { .. } => HeaderErrorKind::Overflow,
        }
    }

    /// Name of the header this error is about.
    pub fn header_name(&self) -> &'static str {
        match self {
            HeaderError::Missing { name }
            | HeaderError::Malformed { name, .. }
            | HeaderError::Overflow { name, .. } => *name,
        }
    }
}

/// Any error produced by this crate's planning or parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Header(#[from] HeaderError),
}

impl Error {
    /// True for errors caused by the caller's arguments rather than by a response.
    /// Callers treat these as non-retryable.
    pub fn is_defect(&self) -> bool {
        matches!(self, Error::Plan(_))
    }
}
