//! Response header access and parsing.
//!
//! Looks up headers case-insensitively and parses the two values a transfer
//! needs to size an object: `Content-Range` and `Content-Length`.

mod content_length;
mod content_range;
mod decimal;
mod lookup;
pub mod names;

pub use content_length::{parse_content_length, parse_content_length_value};
pub use content_range::{parse_content_range, parse_content_range_value, ContentRange};
pub use lookup::{HeaderList, HeaderLookup};
