//! Input validators shared by the entities and registers
//!
//! Every check returns `DiaryError::InvalidArgument` with a field-specific
//! message that callers propagate unchanged.

use crate::error::{DiaryError, Result};
use chrono::{Local, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

const EMAIL_MIN_LEN: usize = 4;
const EMAIL_MAX_LEN: usize = 40;

/// local-part@domain.tld with a 2-4 letter top-level domain
fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%-]+@[A-Za-z0-9.-]+\.[a-zA-Z]{2,4}$").unwrap()
    })
}

/// Fail unless `input` contains at least one non-whitespace character
pub fn validate_non_blank(input: &str, field_name: &str) -> Result<()> {
    if input.trim().is_empty() {
        return Err(DiaryError::InvalidArgument(format!(
            "{} cannot be null or empty.",
            field_name
        )));
    }
    Ok(())
}

/// Unwrap an optional value, failing with a field-specific message on `None`
pub fn validate_not_null<T>(value: Option<T>, field_name: &str) -> Result<T> {
    value.ok_or_else(|| DiaryError::InvalidArgument(format!("{} cannot be null.", field_name)))
}

/// Fail unless `email` is 4-40 characters and matches the address pattern
pub fn validate_email(email: &str) -> Result<()> {
    validate_non_blank(email, "Email")?;

    let len = email.chars().count();
    if !(EMAIL_MIN_LEN..=EMAIL_MAX_LEN).contains(&len) || !email_regex().is_match(email) {
        return Err(DiaryError::invalid_argument(
            "Invalid email format. Must be 4-40 chars (e.g. user@domain.com).",
        ));
    }
    Ok(())
}

/// Fail if `time` lies after the current local wall-clock time
pub fn validate_not_future(time: NaiveDateTime) -> Result<()> {
    validate_not_future_at(time, Local::now().naive_local())
}

/// Same as [`validate_not_future`] against an explicit reference time
pub fn validate_not_future_at(time: NaiveDateTime, now: NaiveDateTime) -> Result<()> {
    if time > now {
        return Err(DiaryError::invalid_argument(
            "Creation time cannot be in the future",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 17)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_non_blank_accepts_text() {
        assert!(validate_non_blank("hello", "Title").is_ok());
        assert!(validate_non_blank("  x  ", "Title").is_ok());
    }

    #[test]
    fn test_non_blank_rejects_empty_and_whitespace() {
        for input in ["", " ", "\t\n"] {
            let err = validate_non_blank(input, "Title").unwrap_err();
            assert_eq!(err.to_string(), "Title cannot be null or empty.");
        }
    }

    #[test]
    fn test_not_null() {
        assert_eq!(validate_not_null(Some(5), "Date").unwrap(), 5);

        let err = validate_not_null::<i32>(None, "Date").unwrap_err();
        assert!(matches!(err, DiaryError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Date cannot be null.");
    }

    #[test]
    fn test_valid_emails() {
        for email in ["per@ex.com", "a.b-c_d%e@mail.example.org", "x@y.no", "ab@c.info"] {
            assert!(validate_email(email).is_ok(), "{} should be valid", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "plainaddress",
            "@ex.com",
            "per@",
            "per@ex",
            "per@ex.c",
            "per@ex.comma",
            "per@ex.c0m",
            "per name@ex.com",
            "per@ex.com ",
        ] {
            assert!(validate_email(email).is_err(), "{} should be invalid", email);
        }
    }

    #[test]
    fn test_email_length_bounds() {
        // 41 characters
        let long = format!("{}@ex.com", "a".repeat(34));
        assert_eq!(long.len(), 41);
        assert!(validate_email(&long).is_err());

        let max = format!("{}@ex.com", "a".repeat(33));
        assert_eq!(max.len(), 40);
        assert!(validate_email(&max).is_ok());
    }

    #[test]
    fn test_blank_email_reports_field() {
        let err = validate_email("  ").unwrap_err();
        assert_eq!(err.to_string(), "Email cannot be null or empty.");
    }

    #[test]
    fn test_not_future_at() {
        let now = at(12, 0);
        assert!(validate_not_future_at(at(11, 59), now).is_ok());
        assert!(validate_not_future_at(now, now).is_ok());

        let err = validate_not_future_at(at(12, 1), now).unwrap_err();
        assert_eq!(err.to_string(), "Creation time cannot be in the future");
    }

    #[test]
    fn test_not_future_against_clock() {
        let now = Local::now().naive_local();
        assert!(validate_not_future(now - Duration::days(1)).is_ok());
        assert!(validate_not_future(now + Duration::days(1)).is_err());
    }
}
