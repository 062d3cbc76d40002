//! Input validation
//!
//! Pure checks over raw form text. None of these functions fail: malformed
//! or absent input simply yields `false`, and the caller decides what to
//! tell the user.

use chrono::{Datelike, NaiveDate, NaiveTime};

/// Booking date format (`DD/MM/YYYY`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Booking time format (`HH:MM AM`)
pub const TIME_FORMAT: &str = "%I:%M %p";

const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

/// True iff the text is 7 to 15 ASCII digits with nothing else around them.
pub fn is_valid_phone<'a>(text: impl Into<Option<&'a str>>) -> bool {
    let Some(phone) = text.into() else {
        return false;
    };

    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&phone.len())
        && phone.bytes().all(|b| b.is_ascii_digit())
}

/// True iff the trimmed text is a real calendar date written `DD/MM/YYYY`.
///
/// Rollover is never applied: `32/01/2024` and `29/02/2023` are rejected.
/// Years start at 0001; there is no year zero.
pub fn is_valid_date<'a>(text: impl Into<Option<&'a str>>) -> bool {
    let Some(date) = text.into().map(str::trim) else {
        return false;
    };

    matches_shape(date, "dd/dd/dddd")
        && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok_and(|d| d.year() >= 1)
}

/// True iff the trimmed text is a 12-hour clock time written `HH:MM AM`.
///
/// Hours run 01..=12 and must be zero-padded; minutes run 00..=59.
pub fn is_valid_time<'a>(text: impl Into<Option<&'a str>>) -> bool {
    let Some(time) = text.into().map(str::trim) else {
        return false;
    };

    matches_shape(time, "dd:dd aa") && NaiveTime::parse_from_str(time, TIME_FORMAT).is_ok()
}

/// Compare text byte-for-byte against a shape where `d` is an ASCII digit,
/// `a` is an ASCII letter, and every other byte must match literally.
///
/// chrono accepts unpadded fields, so the exact layout is pinned here first.
fn matches_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'd' => c.is_ascii_digit(),
            b'a' => c.is_ascii_alphabetic(),
            literal => c == literal,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_length_bounds() {
        assert!(is_valid_phone("1234567"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("12345678901234567"));
    }

    #[test]
    fn test_phone_every_valid_length() {
        for len in 7..=15 {
            let phone = "9".repeat(len);
            assert!(is_valid_phone(phone.as_str()), "length {len} should pass");
        }
    }

    #[test]
    fn test_phone_rejects_separators() {
        assert!(!is_valid_phone("12-34567"));
        assert!(!is_valid_phone("+911234567"));
        assert!(!is_valid_phone("123 4567"));
        assert!(!is_valid_phone(" 1234567"));
        assert!(!is_valid_phone("１２３４５６７"));
    }

    #[test]
    fn test_phone_absent() {
        assert!(!is_valid_phone(None));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_date_leap_years() {
        assert!(is_valid_date("29/02/2024"));
        assert!(!is_valid_date("29/02/2023"));
        assert!(is_valid_date("29/02/2000"));
        assert!(!is_valid_date("29/02/1900"));
    }

    #[test]
    fn test_date_no_rollover() {
        assert!(!is_valid_date("31/04/2024"));
        assert!(!is_valid_date("32/01/2024"));
        assert!(!is_valid_date("15/13/2024"));
        assert!(!is_valid_date("00/01/2024"));
    }

    #[test]
    fn test_date_year_zero_rejected() {
        assert!(!is_valid_date("01/01/0000"));
        assert!(!is_valid_date("29/02/0000"));
        assert!(is_valid_date("01/01/0001"));
    }

    #[test]
    fn test_date_format_is_exact() {
        assert!(is_valid_date("15/08/2025"));
        assert!(is_valid_date("  15/08/2025  "));
        assert!(!is_valid_date("15-08-2025"));
        assert!(!is_valid_date("5/8/2025"));
        assert!(!is_valid_date("15/08/25"));
        assert!(!is_valid_date("2025/08/15"));
        assert!(!is_valid_date("15/08/2025x"));
    }

    #[test]
    fn test_date_absent() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("   "));
        assert!(!is_valid_date(None));
    }

    #[test]
    fn test_time_valid() {
        assert!(is_valid_time("07:30 PM"));
        assert!(is_valid_time("12:00 AM"));
        assert!(is_valid_time("01:59 am"));
        assert!(is_valid_time(" 04:00 PM "));
    }

    #[test]
    fn test_time_out_of_range() {
        assert!(!is_valid_time("13:00 PM"));
        assert!(!is_valid_time("00:30 AM"));
        assert!(!is_valid_time("11:60 PM"));
    }

    #[test]
    fn test_time_format_is_exact() {
        assert!(!is_valid_time("7:30PM"));
        assert!(!is_valid_time("7:30 PM"));
        assert!(!is_valid_time("07:30PM"));
        assert!(!is_valid_time("07:30"));
        assert!(!is_valid_time("19:30"));
        assert!(!is_valid_time("07.30 PM"));
        assert!(!is_valid_time("07:30 XM"));
    }

    #[test]
    fn test_time_absent() {
        assert!(!is_valid_time(""));
        assert!(!is_valid_time(None));
    }
}
