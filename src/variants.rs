//! Date variant generation.
//!
//! Enumerates the day/month/year orderings people actually type as an MPIN.
//! `DD`, `MM` and `YY` are zero-padded two-digit fields, `YYYY` is the full year.
//!
//! | length | variants |
//! |--------|----------|
//! | 4 | `DDMM DDYY MMDD MMYY YYDD YYMM` |
//! | 6 | `DDMMYY DDYYYY MMDDYY MMYYYY YYDDMM YYMMDD YYYYDDMM YYYYMMDD` |
//!
//! The two eight-digit forms in the 6-digit set can never equal a 6-digit
//! MPIN. They are kept so the set reflects every convention considered.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Input format of demographic dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unsupported MPIN length {0}")]
    UnsupportedLength(usize),
}

/// Generates the variants of `date` for an MPIN of `pin_length` digits.
///
/// Unparseable dates and lengths other than 4 or 6 yield an empty set.
pub fn generate_variants(date: &str, pin_length: usize) -> HashSet<String> {
    match try_generate_variants(date, pin_length) {
        Ok(variants) => variants,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("No date variants generated: {}", _e);
            HashSet::new()
        }
    }
}

/// Strict form of [`generate_variants`].
///
/// # Errors
///
/// - [`VariantError::InvalidDate`] if `date` is not a valid `YYYY-MM-DD` date
/// - [`VariantError::UnsupportedLength`] if `pin_length` is not 4 or 6
pub fn try_generate_variants(date: &str, pin_length: usize) -> Result<HashSet<String>, VariantError> {
    let parsed = parse_date(date).ok_or_else(|| VariantError::InvalidDate(date.to_string()))?;
    match pin_length {
        4 | 6 => Ok(variants_for_date(parsed, pin_length)),
        other => Err(VariantError::UnsupportedLength(other)),
    }
}

/// Parses `YYYY-MM-DD` with an unsigned four-digit year and no surrounding
/// whitespace. chrono's `%Y` alone also takes short or signed years.
fn parse_date(date: &str) -> Option<NaiveDate> {
    let bytes = date.as_bytes();
    let year_ok = bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-';
    if !year_ok {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Typed form: variants of an already parsed date.
pub fn variants_for_date(date: NaiveDate, pin_length: usize) -> HashSet<String> {
    let dd = format!("{:02}", date.day());
    let mm = format!("{:02}", date.month());
    let yyyy = date.year().to_string();
    let yy = format!("{:02}", date.year().rem_euclid(100));

    let variants = match pin_length {
        4 => vec![
            format!("{dd}{mm}"),
            format!("{dd}{yy}"),
            format!("{mm}{dd}"),
            format!("{mm}{yy}"),
            format!("{yy}{dd}"),
            format!("{yy}{mm}"),
        ],
        6 => vec![
            format!("{dd}{mm}{yy}"),
            format!("{dd}{yyyy}"),
            format!("{mm}{dd}{yy}"),
            format!("{mm}{yyyy}"),
            format!("{yy}{dd}{mm}"),
            format!("{yy}{mm}{dd}"),
            format!("{yyyy}{dd}{mm}"),
            format!("{yyyy}{mm}{dd}"),
        ],
        _ => Vec::new(),
    };

    variants.into_iter().collect()
}
