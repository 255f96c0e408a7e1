//! Commonality section - checks if the MPIN is in the known-weak corpus.

use secrecy::ExposeSecret;

use super::SectionResult;
use crate::common::{is_commonly_used, CommonPinSet};
use crate::types::{Mpin, WeaknessReason};

/// Checks if the MPIN is one of the commonly used ones.
///
/// # Returns
/// - `Some(WeaknessReason::CommonlyUsed)` if the MPIN is in `common`
/// - `None` otherwise
pub fn common_section(pin: &Mpin, common: &CommonPinSet) -> SectionResult {
    is_commonly_used(pin.expose_secret(), common).then_some(WeaknessReason::CommonlyUsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_section_listed_pin() {
        let common = CommonPinSet::from_pins(["1234", "1212"]);
        let pin = Mpin::parse("1234").unwrap();
        assert_eq!(common_section(&pin, &common), Some(WeaknessReason::CommonlyUsed));
    }

    #[test]
    fn test_common_section_unlisted_pin() {
        let common = CommonPinSet::from_pins(["1234", "1212"]);
        let pin = Mpin::parse("5683").unwrap();
        assert_eq!(common_section(&pin, &common), None);
    }

    #[test]
    fn test_common_section_other_length_never_matches() {
        let common = CommonPinSet::from_pins(["1234"]);
        let pin = Mpin::parse("123400").unwrap();
        assert_eq!(common_section(&pin, &common), None);
    }
}
