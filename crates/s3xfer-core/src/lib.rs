//! Part planning and response-size discovery for multipart object transfers.
//!
//! The planner splits an object byte range into part-size aligned parts; the
//! header parsers read `Content-Range` and `Content-Length` to learn how large
//! an object is and which bytes a response served. Both are pure and safe to
//! call from any number of transfer workers at once.

pub mod config;
pub mod logging;

pub mod discover;
pub mod error;
pub mod headers;
pub mod planner;

pub use discover::{discover_object_size, ObjectSize, SizeSource};
pub use error::{Error, HeaderError, HeaderErrorKind, PlanError};
pub use headers::{
    parse_content_length, parse_content_range, ContentRange, HeaderList, HeaderLookup,
};
pub use planner::{get_num_parts, get_part_range, Part, PartPlan, PartRange};
