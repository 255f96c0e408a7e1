//! Batch self-test: a fixed set of regression scenarios with printable reports.

use std::fmt;

use crate::classifier::classify;
use crate::common::CommonPinSet;
use crate::demographics::Demographics;
use crate::explain::{explain_or_fallback, Explainer};
use crate::types::{Mpin, MpinError, MpinEvaluation};

/// One literal scenario: an MPIN and the dates to check it against.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub pin: String,
    pub demographics: Demographics,
}

impl Scenario {
    pub fn new(pin: impl Into<String>, demographics: Demographics) -> Self {
        Self {
            pin: pin.into(),
            demographics,
        }
    }
}

/// Outcome of one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// 1-based position in the batch.
    pub number: usize,
    pub pin: String,
    pub outcome: Result<MpinEvaluation, MpinError>,
    pub explanation: Option<String>,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(evaluation) => {
                writeln!(
                    f,
                    "Test {}: MPIN={} => Strength: {}, Reasons: [{}]",
                    self.number,
                    self.pin,
                    evaluation.strength(),
                    evaluation.reason_codes().join(", ")
                )?;
                if let Some(text) = &self.explanation {
                    writeln!(f, "Explanation: {text}")?;
                }
                Ok(())
            }
            Err(e) => writeln!(f, "Test {}: MPIN={} => Invalid: {e}", self.number, self.pin),
        }
    }
}

/// The regression scenarios shipped with the crate.
///
/// Intended to run against [`CommonPinSet::builtin`].
pub fn default_scenarios() -> Vec<Scenario> {
    let d = Demographics::standard;
    vec![
        Scenario::new("1234", d(Some("1998-01-02"), None, None)),
        Scenario::new("9999", d(Some("2000-02-10"), None, None)),
        Scenario::new("5683", d(None, None, None)),
        Scenario::new("1212", d(None, None, None)),
        Scenario::new("9001", d(Some("1990-01-02"), Some("1990-09-14"), Some("2020-01-02"))),
        Scenario::new("020199", d(Some("1999-01-02"), Some("1999-01-02"), Some("1999-01-02"))),
        Scenario::new("121212", d(Some("2012-12-12"), None, None)),
        Scenario::new("123456", d(Some("1998-01-02"), None, Some("2020-01-02"))),
        Scenario::new("194503", d(Some("1998-01-02"), Some("1998-01-02"), Some("2020-01-02"))),
        Scenario::new("123456", d(None, None, None)),
        Scenario::new("121212", d(None, None, None)),
        Scenario::new("123456", d(Some("1998-01-02"), None, Some("2020-01-02"))),
        Scenario::new("194503", d(Some("1988-01-02"), Some("1998-01-02"), Some("2020-01-02"))),
        Scenario::new("123456", d(Some("1998-01-02"), Some("1990-01-02"), Some("2020-01-02"))),
        Scenario::new("194503", d(Some("1990-01-02"), Some("2000-01-02"), Some("2020-01-02"))),
    ]
}

/// Classifies and explains every scenario in order.
///
/// A scenario whose MPIN fails validation is reported with the validation
/// error and no explanation; the rest of the batch still runs.
pub fn run_scenarios(
    scenarios: &[Scenario],
    common: &CommonPinSet,
    explainer: &dyn Explainer,
) -> Vec<ScenarioReport> {
    scenarios
        .iter()
        .enumerate()
        .map(|(idx, scenario)| {
            let (outcome, explanation) = match Mpin::parse(&scenario.pin) {
                Ok(pin) => {
                    let evaluation = classify(&pin, common, &scenario.demographics);
                    let text = explain_or_fallback(explainer, &pin, &evaluation.reasons, &scenario.demographics);
                    (Ok(evaluation), Some(text))
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Scenario {} skipped: {}", idx + 1, e);
                    (Err(e), None)
                }
            };
            ScenarioReport {
                number: idx + 1,
                pin: scenario.pin.clone(),
                outcome,
                explanation,
            }
        })
        .collect()
}
