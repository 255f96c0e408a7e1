//! Core value types: the PIN itself, the verdict and the weakness reasons.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Accepted MPIN lengths.
pub const MPIN_LENGTHS: [usize; 2] = [4, 6];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MpinError {
    #[error("MPIN is empty")]
    Empty,
    #[error("MPIN must be 4 or 6 digits, got {0}")]
    InvalidLength(usize),
    #[error("MPIN must contain digits only")]
    NonNumeric,
}

/// A validated 4 or 6 digit MPIN.
///
/// The digits are kept in a [`SecretString`] so they never show up in
/// `Debug` output or logs.
#[derive(Clone)]
pub struct Mpin(SecretString);

impl Mpin {
    /// Validates `raw` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `raw` is empty
    /// - `raw` contains anything other than ASCII digits
    /// - `raw` is not exactly 4 or 6 digits long
    pub fn parse(raw: &str) -> Result<Self, MpinError> {
        if raw.is_empty() {
            return Err(MpinError::Empty);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MpinError::NonNumeric);
        }
        if !MPIN_LENGTHS.contains(&raw.len()) {
            return Err(MpinError::InvalidLength(raw.len()));
        }
        Ok(Self(SecretString::new(raw.to_string().into())))
    }

    /// Number of digits (4 or 6).
    pub fn len(&self) -> usize {
        self.0.expose_secret().len()
    }

    /// Always false for a parsed MPIN.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl ExposeSecret<str> for Mpin {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Mpin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mpin([REDACTED {} digits])", self.len())
    }
}

impl std::str::FromStr for Mpin {
    type Err = MpinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Binary verdict. There are no intermediate levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MpinStrength {
    STRONG,
    WEAK,
}

impl fmt::Display for MpinStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpinStrength::STRONG => f.write_str("STRONG"),
            MpinStrength::WEAK => f.write_str("WEAK"),
        }
    }
}

/// Why an MPIN was judged weak.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeaknessReason {
    /// The MPIN is in the commonality corpus.
    CommonlyUsed,
    /// The MPIN encodes the named demographic date. Holds the identifier as supplied.
    Demographic(String),
}

impl WeaknessReason {
    /// Reason tag, e.g. `COMMONLY_USED` or `DEMOGRAPHIC_DOB_SELF`.
    pub fn code(&self) -> String {
        match self {
            WeaknessReason::CommonlyUsed => "COMMONLY_USED".to_string(),
            WeaknessReason::Demographic(name) => format!("DEMOGRAPHIC_{}", name.to_uppercase()),
        }
    }
}

impl fmt::Display for WeaknessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Outcome of a classification. The verdict is derived from `reasons`,
/// so an empty list is always STRONG and a non-empty one always WEAK.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpinEvaluation {
    pub reasons: Vec<WeaknessReason>,
}

impl MpinEvaluation {
    pub fn strength(&self) -> MpinStrength {
        if self.reasons.is_empty() {
            MpinStrength::STRONG
        } else {
            MpinStrength::WEAK
        }
    }

    pub fn is_weak(&self) -> bool {
        self.strength() == MpinStrength::WEAK
    }

    /// Reason tags in evaluation order.
    pub fn reason_codes(&self) -> Vec<String> {
        self.reasons.iter().map(WeaknessReason::code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_lengths() {
        assert_eq!(Mpin::parse("1234").unwrap().len(), 4);
        assert_eq!(Mpin::parse("020199").unwrap().len(), 6);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert_eq!(Mpin::parse("").unwrap_err(), MpinError::Empty);
        assert_eq!(Mpin::parse("12345").unwrap_err(), MpinError::InvalidLength(5));
        assert_eq!(Mpin::parse("12a4").unwrap_err(), MpinError::NonNumeric);
        assert_eq!(Mpin::parse("１２３４").unwrap_err(), MpinError::NonNumeric);
    }

    #[test]
    fn test_debug_is_redacted() {
        let pin = Mpin::parse("9001").unwrap();
        let shown = format!("{:?}", pin);
        assert!(!shown.contains("9001"));
        assert!(shown.contains("REDACTED"));
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(WeaknessReason::CommonlyUsed.to_string(), "COMMONLY_USED");
        assert_eq!(
            WeaknessReason::Demographic("dob_spouse".to_string()).to_string(),
            "DEMOGRAPHIC_DOB_SPOUSE"
        );
    }

    #[test]
    fn test_strength_follows_reasons() {
        let strong = MpinEvaluation::default();
        assert_eq!(strong.strength(), MpinStrength::STRONG);
        assert!(!strong.is_weak());

        let weak = MpinEvaluation { reasons: vec![WeaknessReason::CommonlyUsed] };
        assert_eq!(weak.strength(), MpinStrength::WEAK);
        assert_eq!(weak.strength().to_string(), "WEAK");
    }
}
