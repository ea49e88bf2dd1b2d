//! Object size discovery from the first response of a ranged download.
//!
//! A ranged GET answered with 206 carries `Content-Range`, which gives both the
//! served range and the object size. A server that ignores `Range` answers 200
//! with the whole object, and only `Content-Length` is left to size it.

use crate::error::{HeaderError, PlanError};
use crate::headers::names::CONTENT_RANGE;
use crate::headers::{parse_content_length, parse_content_range_value, HeaderLookup};
use crate::planner::{PartPlan, PartRange};

/// Where the object size came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSource {
    ContentRange,
    ContentLength,
}

/// Total object size and the bytes the response actually served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectSize {
    pub object_size: u64,
    /// `None` when the response served an empty object.
    pub served: Option<PartRange>,
    pub source: SizeSource,
}

impl ObjectSize {
    /// Plans the whole object with `part_size`.
    pub fn plan(&self, part_size: u64) -> Result<PartPlan, PlanError> {
        PartPlan::for_object(self.object_size, part_size)
    }

    /// True if the response already carried the entire object.
    pub fn is_complete(&self) -> bool {
        match self.served {
            Some(r) => r.start == 0 && r.len() == self.object_size,
            None => self.object_size == 0,
        }
    }
}

/// Determines the object size from response headers.
///
/// `Content-Range` wins when present; a malformed or empty one is an error
/// rather than a reason to trust `Content-Length`, which then only describes
/// the part. The served range must lie inside a nonempty object.
pub fn discover_object_size<H>(headers: &H) -> Result<ObjectSize, HeaderError>
where
    H: HeaderLookup + ?Sized,
{
    if let Some(value) = headers.find_header(CONTENT_RANGE) {
        let cr = parse_content_range_value(value)?;
        let inconsistent = |reason| HeaderError::Malformed {
            name: CONTENT_RANGE,
            value: value.to_string(),
            reason,
        };
        if cr.object_size == 0 {
            return Err(inconsistent("object size is zero"));
        }
        if cr.range_end >= cr.object_size {
            return Err(inconsistent("range end is past the object size"));
        }
        return Ok(ObjectSize {
            object_size: cr.object_size,
            served: Some(cr.range()),
            source: SizeSource::ContentRange,
        });
    }

    let len = parse_content_length(headers)?;
    Ok(ObjectSize {
        object_size: len,
        served: len.checked_sub(1).map(|end| PartRange::new(0, end)),
        source: SizeSource::ContentLength,
    })
}
