//! Strict unsigned decimal parsing for header fields.
//!
//! `str::parse::<u64>` accepts a leading `+`; header grammars do not, so digits
//! are checked here byte by byte.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DecimalError {
    Empty,
    NotDigit,
    Overflow,
}

/// Parses ASCII digits only. Any other byte, including a sign or whitespace, fails.
pub(crate) fn parse_u64(s: &str) -> Result<u64, DecimalError> {
    if s.is_empty() {
        return Err(DecimalError::Empty);
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecimalError::NotDigit);
    }
    s.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(b - b'0')))
            .ok_or(DecimalError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!(parse_u64("0"), Ok(0));
        assert_eq!(parse_u64("000123"), Ok(123));
        assert_eq!(parse_u64("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn rejects_signs_and_spaces() {
        assert_eq!(parse_u64("+1"), Err(DecimalError::NotDigit));
        assert_eq!(parse_u64("-1"), Err(DecimalError::NotDigit));
        assert_eq!(parse_u64(" 1"), Err(DecimalError::NotDigit));
        assert_eq!(parse_u64("1 "), Err(DecimalError::NotDigit));
        assert_eq!(parse_u64(""), Err(DecimalError::Empty));
    }

    #[test]
    fn overflow() {
        assert_eq!(parse_u64("18446744073709551616"), Err(DecimalError::Overflow));
        // Non-digit wins over length.
        assert_eq!(
            parse_u64("99999999999999999999999x"),
            Err(DecimalError::NotDigit)
        );
    }
}
