//! MPIN evaluation sections
//!
//! Each section checks one weakness source.

mod common;
mod demographic;

pub use common::common_section;
pub use demographic::demographic_section;

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section found a weakness
/// - `None` - Section passed
///
/// Sections cannot fail: degenerate input contributes no reason.
pub type SectionResult = Option<crate::types::WeaknessReason>;
