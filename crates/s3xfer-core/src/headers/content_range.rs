//! `Content-Range` response header: `bytes <start>-<end>/<total>`.

use super::decimal::{parse_u64, DecimalError};
use super::lookup::HeaderLookup;
use super::names::{BYTES_UNIT, CONTENT_RANGE};
use crate::error::HeaderError;
use crate::planner::PartRange;

/// Range served by a response and the size of the whole object.
///
/// Callers read whichever fields they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    /// First byte served (inclusive).
    pub range_start: u64,
    /// Last byte served (inclusive).
    pub range_end: u64,
    /// Total size of the object in bytes.
    pub object_size: u64,
}

impl ContentRange {
    pub fn range(&self) -> PartRange {
        PartRange::new(self.range_start, self.range_end)
    }

    /// Number of bytes the response body should carry.
    pub fn len(&self) -> u64 {
        self.range().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Finds `Content-Range` in `headers` and parses it.
pub fn parse_content_range<H>(headers: &H) -> Result<ContentRange, HeaderError>
where
    H: HeaderLookup + ?Sized,
{
    match headers.find_header(CONTENT_RANGE) {
        Some(value) => parse_content_range_value(value),
        None => Err(HeaderError::Missing {
            name: CONTENT_RANGE,
        }),
    }
}

/// Parses a raw `Content-Range` value.
pub fn parse_content_range_value(value: &str) -> Result<ContentRange, HeaderError> {
    if value.is_empty() {
        return Err(HeaderError::Missing {
            name: CONTENT_RANGE,
        });
    }
    let malformed = |reason| HeaderError::Malformed {
        name: CONTENT_RANGE,
        value: value.to_string(),
        reason,
    };

    let (unit, spec) = value
        .split_once(' ')
        .ok_or_else(|| malformed("missing range unit"))?;
    if !unit.eq_ignore_ascii_case(BYTES_UNIT) {
        return Err(malformed("range unit is not bytes"));
    }
    let (range, total) = spec.split_once('/').ok_or_else(|| malformed("missing '/'"))?;
    let (start, end) = range.split_once('-').ok_or_else(|| malformed("missing '-'"))?;

    let field = |digits: &str, reason| {
        parse_u64(digits).map_err(|e| match e {
            DecimalError::Overflow => HeaderError::Overflow {
                name: CONTENT_RANGE,
                value: value.to_string(),
            },
            DecimalError::Empty | DecimalError::NotDigit => malformed(reason),
        })
    };
    let range_start = field(start, "range start is not a decimal number")?;
    let range_end = field(end, "range end is not a decimal number")?;
    let object_size = field(total, "object size is not a decimal number")?;

    if range_start > range_end {
        return Err(malformed("range start after range end"));
    }

    Ok(ContentRange {
        range_start,
        range_end,
        object_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeaderErrorKind;

    fn kind(value: &str) -> HeaderErrorKind {
        parse_content_range_value(value).unwrap_err().kind()
    }

    #[test]
    fn parses_well_formed_value() {
        let r = parse_content_range_value("bytes 0-499/1000").unwrap();
        assert_eq!(r.range_start, 0);
        assert_eq!(r.range_end, 499);
        assert_eq!(r.object_size, 1000);
        assert_eq!(r.len(), 500);
        assert_eq!(r.range(), PartRange::new(0, 499));
    }

    #[test]
    fn parses_from_headers() {
        let headers = [("content-range", "bytes 100-199/250"), ("ETag", "\"x\"")];
        let r = parse_content_range(&headers).unwrap();
        assert_eq!((r.range_start, r.range_end, r.object_size), (100, 199, 250));
    }

    #[test]
    fn single_byte_and_max_values() {
        let r = parse_content_range_value("bytes 7-7/8").unwrap();
        assert_eq!(r.len(), 1);
        let v = format!("bytes 0-{}/{}", u64::MAX, u64::MAX);
        let r = parse_content_range_value(&v).unwrap();
        assert_eq!(r.range_end, u64::MAX);
        assert_eq!(r.object_size, u64::MAX);
    }

    #[test]
    fn unit_is_case_insensitive() {
        assert!(parse_content_range_value("Bytes 0-1/2").is_ok());
    }

    #[test]
    fn missing_header() {
        let headers: [(&str, &str); 1] = [("Content-Length", "10")];
        assert_eq!(
            parse_content_range(&headers),
            Err(HeaderError::Missing {
                name: CONTENT_RANGE
            })
        );
        assert_eq!(kind(""), HeaderErrorKind::Missing);
    }

    #[test]
    fn non_numeric_fields() {
        assert_eq!(kind("bytes abc-499/1000"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes 0-xyz/1000"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes 0-499/*"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes */1000"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes +0-499/1000"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes -499/1000"), HeaderErrorKind::Malformed);
    }

    #[test]
    fn wrong_unit_or_separators() {
        assert_eq!(kind("items 0-499/1000"), HeaderErrorKind::Malformed);
        assert_eq!(kind("0-499/1000"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes 0-499"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes 0 499/1000"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes 0-499/1000 "), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes 0-499/1000/1"), HeaderErrorKind::Malformed);
        assert_eq!(kind("bytes  0-499/1000"), HeaderErrorKind::Malformed);
    }

    #[test]
    fn inverted_range() {
        assert_eq!(kind("bytes 500-499/1000"), HeaderErrorKind::Malformed);
    }

    #[test]
    fn overflowing_field() {
        assert_eq!(
            kind("bytes 0-18446744073709551616/1000"),
            HeaderErrorKind::Overflow
        );
        assert_eq!(
            kind("bytes 0-1/99999999999999999999"),
            HeaderErrorKind::Overflow
        );
    }
}
