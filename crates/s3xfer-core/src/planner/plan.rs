//! Part-size aligned partitioning of a byte range.

use super::range::PartRange;
use crate::error::PlanError;

/// A validated partition of `range` into parts of at most `part_size` bytes.
///
/// Part boundaries fall on multiples of `part_size` measured from offset 0 of
/// the object, so the first part is shorter when `range.start` is unaligned and
/// the last part is shorter when fewer than `part_size` bytes remain. Every
/// part in between is exactly `part_size` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartPlan {
    range: PartRange,
    part_size: u64,
    first_end: u64,
    num_parts: u32,
}

/// One numbered part of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    /// 1-based part number.
    pub number: u32,
    pub range: PartRange,
}

impl PartPlan {
    /// Plans `[range_start, range_end]` with the given part size.
    pub fn new(range_start: u64, range_end: u64, part_size: u64) -> Result<Self, PlanError> {
        if part_size == 0 {
            return Err(PlanError::ZeroPartSize);
        }
        if range_start > range_end {
            return Err(PlanError::InvertedRange {
                start: range_start,
                end: range_end,
            });
        }

        // Last byte of the aligned block holding range_start. Widened so the
        // block past the last u64 boundary does not wrap.
        let size = u128::from(part_size);
        let first_boundary = (u128::from(range_start) / size + 1) * size - 1;
        let first_end = first_boundary.min(u128::from(range_end)) as u64;

        let num_parts: u128 = if first_end == range_end {
            1
        } else {
            let remaining = u128::from(range_end - first_end);
            1 + (remaining + size - 1) / size
        };
        let num_parts = u32::try_from(num_parts).map_err(|_| PlanError::TooManyParts {
            num_parts: u64::try_from(num_parts).unwrap_or(u64::MAX),
        })?;

        Ok(PartPlan {
            range: PartRange::new(range_start, range_end),
            part_size,
            first_end,
            num_parts,
        })
    }

    /// Plans a whole object of `object_size` bytes, i.e. `[0, object_size - 1]`.
    pub fn for_object(object_size: u64, part_size: u64) -> Result<Self, PlanError> {
        if object_size == 0 {
            return Err(PlanError::EmptyObject);
        }
        Self::new(0, object_size - 1, part_size)
    }

    pub fn range(&self) -> PartRange {
        self.range
    }

    pub fn part_size(&self) -> u64 {
        self.part_size
    }

    /// Number of parts; always at least 1.
    pub fn num_parts(&self) -> u32 {
        self.num_parts
    }

    /// Byte range of part `part_number` (1-based).
    pub fn part(&self, part_number: u32) -> Result<PartRange, PlanError> {
        if part_number == 0 || part_number > self.num_parts {
            return Err(PlanError::PartNumberOutOfRange {
                part_number,
                num_parts: self.num_parts,
            });
        }
        Ok(self.part_unchecked(part_number))
    }

    /// Iterates all parts in order.
    pub fn parts(&self) -> Parts {
        Parts {
            plan: *self,
            next: 1,
            back: u64::from(self.num_parts),
        }
    }

    fn part_unchecked(&self, part_number: u32) -> PartRange {
        if part_number == 1 {
            return PartRange::new(self.range.start, self.first_end);
        }
        // Parts after the first start on an aligned boundary.
        let size = u128::from(self.part_size);
        let start = u128::from(self.first_end) + 1 + u128::from(part_number - 2) * size;
        let end = (start + size - 1).min(u128::from(self.range.end));
        PartRange::new(start as u64, end as u64)
    }
}

/// Iterator over the parts of a [`PartPlan`].
#[derive(Debug, Clone)]
pub struct Parts {
    plan: PartPlan,
    next: u64,
    back: u64,
}

impl Iterator for Parts {
    type Item = Part;

    fn next(&mut self) -> Option<Part> {
        if self.next > self.back {
            return None;
        }
        let number = self.next as u32;
        self.next += 1;
        Some(Part {
            number,
            range: self.plan.part_unchecked(number),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.back + 1).saturating_sub(self.next) as usize;
        (left, Some(left))
    }
}

impl DoubleEndedIterator for Parts {
    fn next_back(&mut self) -> Option<Part> {
        if self.next > self.back {
            return None;
        }
        let number = self.back as u32;
        self.back -= 1;
        Some(Part {
            number,
            range: self.plan.part_unchecked(number),
        })
    }
}

impl ExactSizeIterator for Parts {}

/// Number of parts covering `[range_start, range_end]` with `part_size` alignment.
pub fn get_num_parts(part_size: u64, range_start: u64, range_end: u64) -> Result<u32, PlanError> {
    PartPlan::new(range_start, range_end, part_size).map(|p| p.num_parts())
}

/// Byte range of part `part_number` (1-based) of `[range_start, range_end]`.
///
/// Uses the same partitioning as [`get_num_parts`].
pub fn get_part_range(
    range_start: u64,
    range_end: u64,
    part_size: u64,
    part_number: u32,
) -> Result<PartRange, PlanError> {
    PartPlan::new(range_start, range_end, part_size)?.part(part_number)
}
