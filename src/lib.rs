//! Mobile banking PIN (MPIN) strength evaluation library
//!
//! Flags an MPIN as WEAK when it is a commonly used value or when it encodes
//! one of the user's personal dates (own birth date, spouse's birth date,
//! anniversary) in a recognizable day/month/year format. Otherwise it is STRONG.
//!
//! # Features
//!
//! - `async` (default): channel-based `classify_tx` / `describe_tx`
//! - `tracing`: Enables logging via tracing crate
//! - `groq`: `GroqExplainer`, LLM-written explanations via the Groq API
//!
//! # Environment Variables
//!
//! - `MPIN_COMMON_PINS_PATH`: Custom path to the common PIN corpus
//!   (default: `./assets/common-pins.txt`)
//! - `GROQ_API_KEY`: API key for `GroqExplainer` (feature `groq`)
//!
//! # Example
//!
//! ```rust
//! use mpin_strength::{classify, CommonPinSet, Demographics, Mpin, MpinStrength};
//!
//! let common = CommonPinSet::builtin();
//! let dates = Demographics::standard(Some("1998-01-02"), None, None);
//!
//! let pin = Mpin::parse("0201").expect("4 or 6 digits");
//! let evaluation = classify(&pin, &common, &dates);
//!
//! assert_eq!(evaluation.strength(), MpinStrength::WEAK);
//! assert_eq!(evaluation.reason_codes(), vec!["DEMOGRAPHIC_DOB_SELF"]);
//! ```

// Internal modules
mod classifier;
mod common;
mod demographics;
mod explain;
mod sections;
mod selftest;
mod types;
mod variants;

// Public API
pub use classifier::classify;
pub use common::{common_pins_path, is_commonly_used, CommonPinSet, CommonPinsError, COMMON_PINS_PATH_ENV};
pub use demographics::{DemographicDate, Demographics, ANNIVERSARY, DOB_SELF, DOB_SPOUSE};
pub use explain::{explain_or_fallback, ExplainError, Explainer, OfflineExplainer};
pub use selftest::{default_scenarios, run_scenarios, Scenario, ScenarioReport};
pub use types::{Mpin, MpinError, MpinEvaluation, MpinStrength, WeaknessReason, MPIN_LENGTHS};
pub use variants::{generate_variants, try_generate_variants, variants_for_date, VariantError, DATE_FORMAT};

#[cfg(feature = "async")]
pub use classifier::classify_tx;

#[cfg(feature = "async")]
pub use explain::describe_tx;

#[cfg(feature = "groq")]
pub use explain::{GroqExplainer, GROQ_API_KEY_ENV};

// Re-exported so callers can read an `Mpin` without a direct secrecy dependency.
pub use secrecy::ExposeSecret;
