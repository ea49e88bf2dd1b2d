//! `Content-Length` response header.

use super::decimal::{parse_u64, DecimalError};
use super::lookup::HeaderLookup;
use super::names::CONTENT_LENGTH;
use crate::error::HeaderError;

/// Finds `Content-Length` in `headers` and parses it.
///
/// `HeaderList` trims values, so a whitespace-only header reads as empty and
/// is reported as `Missing`.
pub fn parse_content_length<H>(headers: &H) -> Result<u64, HeaderError>
where
    H: HeaderLookup + ?Sized,
{
    match headers.find_header(CONTENT_LENGTH) {
        Some(value) => parse_content_length_value(value),
        None => Err(HeaderError::Missing {
            name: CONTENT_LENGTH,
        }),
    }
}

/// Parses a raw `Content-Length` value: ASCII digits only.
///
/// An empty value is `Missing`. Any whitespace, including a value made only of
/// whitespace, is `Malformed`.
pub fn parse_content_length_value(value: &str) -> Result<u64, HeaderError> {
    parse_u64(value).map_err(|e| match e {
        DecimalError::Empty => HeaderError::Missing {
            name: CONTENT_LENGTH,
        },
        DecimalError::NotDigit => HeaderError::Malformed {
            name: CONTENT_LENGTH,
            value: value.to_string(),
            reason: "not a decimal number",
        },
        DecimalError::Overflow => HeaderError::Overflow {
            name: CONTENT_LENGTH,
            value: value.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeaderErrorKind;
    use crate::headers::HeaderList;

    #[test]
    fn parses_digits() {
        assert_eq!(parse_content_length_value("12345"), Ok(12345));
        assert_eq!(parse_content_length_value("0"), Ok(0));
        assert_eq!(
            parse_content_length_value("18446744073709551615"),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn parses_from_header_lines() {
        let h = HeaderList::from_lines(["HTTP/1.1 200 OK", "content-length: 999"]);
        assert_eq!(parse_content_length(&h), Ok(999));
    }

    #[test]
    fn malformed_values() {
        for v in ["12a45", "+12", "-1", " 12", "12 ", "1.5", "0x10"] {
            assert_eq!(
                parse_content_length_value(v).unwrap_err().kind(),
                HeaderErrorKind::Malformed,
                "{v:?}"
            );
        }
    }

    #[test]
    fn empty_or_absent_is_missing() {
        assert_eq!(
            parse_content_length_value("").unwrap_err().kind(),
            HeaderErrorKind::Missing
        );
        let h = HeaderList::from_lines(["ETag: \"abc\""]);
        assert_eq!(
            parse_content_length(&h),
            Err(HeaderError::Missing {
                name: CONTENT_LENGTH
            })
        );
    }

    #[test]
    fn whitespace_only_value() {
        let h = HeaderList::from_lines(["Content-Length:    "]);
        assert_eq!(
            parse_content_length(&h).unwrap_err().kind(),
            HeaderErrorKind::Missing
        );
        assert_eq!(
            parse_content_length_value("   ").unwrap_err().kind(),
            HeaderErrorKind::Malformed
        );
    }

    #[test]
    fn overflow() {
        assert_eq!(
            parse_content_length_value("18446744073709551616")
                .unwrap_err()
                .kind(),
            HeaderErrorKind::Overflow
        );
    }
}
