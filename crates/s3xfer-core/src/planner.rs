//! Part planning for multipart transfers.
//!
//! Splits an object byte range into parts aligned to absolute multiples of the
//! part size, so any sub-range of the same object planned with the same part
//! size lands on the same boundaries a full-object transfer would use.

mod plan;
mod range;

pub use plan::{get_num_parts, get_part_range, Part, PartPlan, Parts};
pub use range::PartRange;
