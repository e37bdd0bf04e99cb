//! Parsing of values typed at the prompt

use crate::error::{DiaryError, Result};
use chrono::NaiveDate;

/// Parse a date using a chrono format string
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), format)
        .map_err(|_| DiaryError::InvalidArgument(format!("Invalid date: '{}'", input.trim())))
}

/// Parse an entry id
pub fn parse_id(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| DiaryError::invalid_argument("Invalid input, please use a number."))
}
