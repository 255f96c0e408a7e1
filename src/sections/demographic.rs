//! Demographic section - checks if the MPIN encodes a personal date.

use secrecy::ExposeSecret;

use super::SectionResult;
use crate::types::{Mpin, WeaknessReason};
use crate::variants::generate_variants;

/// Checks the MPIN against the variants of one named date.
///
/// # Returns
/// - `Some(WeaknessReason::Demographic(name))` if the MPIN is a variant of `date`
/// - `None` if it is not, or if `date` cannot be parsed
pub fn demographic_section(pin: &Mpin, name: &str, date: &str) -> SectionResult {
    let variants = generate_variants(date, pin.len());
    if variants.contains(pin.expose_secret()) {
        return Some(WeaknessReason::Demographic(name.to_string()));
    }
    None
}
