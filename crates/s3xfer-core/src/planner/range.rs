//! Inclusive byte range type.

use std::fmt;

/// A closed byte range `[start, end]` (both inclusive, `start <= end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartRange {
    /// First byte offset (inclusive).
    pub start: u64,
    /// Last byte offset (inclusive).
    pub end: u64,
}

impl PartRange {
    pub fn new(start: u64, end: u64) -> Self {
        PartRange { start, end }
    }

    /// Number of bytes covered. Saturates at `u64::MAX` for `[0, u64::MAX]`.
    pub fn len(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    /// A closed range always holds at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, offset: u64) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// HTTP `Range` request header value: `bytes=start-end`.
    pub fn range_header_value(&self) -> String {
        format!("bytes={}-{}", self.start, self.end)
    }
}

impl fmt::Display for PartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
