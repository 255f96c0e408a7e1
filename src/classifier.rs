//! MPIN strength classifier - main evaluation logic.

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::common::CommonPinSet;
use crate::demographics::Demographics;
use crate::sections::{common_section, demographic_section};
use crate::types::{Mpin, MpinEvaluation};

/// Classifies an MPIN as STRONG or WEAK.
///
/// Runs the commonality section first, then one demographic section per
/// present date in the order they were supplied. Absent dates are skipped.
///
/// # Arguments
/// * `pin` - The MPIN to classify
/// * `common` - Known-weak MPINs
/// * `demographics` - Named personal dates
///
/// # Returns
/// An `MpinEvaluation` whose reasons follow evaluation order. It holds at
/// most one reason per source.
pub fn classify(pin: &Mpin, common: &CommonPinSet, demographics: &Demographics) -> MpinEvaluation {
    let mut reasons = Vec::new();

    if let Some(reason) = common_section(pin, common) {
        reasons.push(reason);
    }

    for (name, date) in demographics.present() {
        if let Some(reason) = demographic_section(pin, name, date) {
            reasons.push(reason);
        }
    }

    let evaluation = MpinEvaluation { reasons };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "MPIN ({} digits) classified {} with {} reason(s)",
        pin.len(),
        evaluation.strength(),
        evaluation.reasons.len()
    );

    evaluation
}

/// Async version that sends the evaluation via channel.
#[cfg(feature = "async")]
pub async fn classify_tx(
    pin: &Mpin,
    common: &CommonPinSet,
    demographics: &Demographics,
    tx: mpsc::Sender<MpinEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("classification is about to start...");

    let evaluation = classify(pin, common, demographics);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send MPIN evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::{ANNIVERSARY, DOB_SELF, DOB_SPOUSE};
    use crate::types::{MpinStrength, WeaknessReason};
    use std::sync::Arc;

    fn pin(raw: &str) -> Mpin {
        Mpin::parse(raw).expect("valid test MPIN")
    }

    fn common() -> CommonPinSet {
        CommonPinSet::from_pins(["0000", "1111", "1234", "1212", "000000", "123456", "121212"])
    }

    fn no_dates() -> Demographics {
        Demographics::standard(None, None, None)
    }

    #[test]
    fn test_classify_common_pin() {
        let evaluation = classify(&pin("1234"), &common(), &no_dates());
        assert_eq!(evaluation.strength(), MpinStrength::WEAK);
        assert_eq!(evaluation.reason_codes(), vec!["COMMONLY_USED"]);
    }

    #[test]
    fn test_classify_demographic_pin() {
        let demo = Demographics::new().with(DOB_SELF, Some("1998-01-02"));
        let evaluation = classify(&pin("0201"), &common(), &demo);
        assert_eq!(evaluation.strength(), MpinStrength::WEAK);
        assert_eq!(evaluation.reason_codes(), vec!["DEMOGRAPHIC_DOB_SELF"]);
    }

    #[test]
    fn test_classify_strong_pin() {
        let evaluation = classify(&pin("5683"), &common(), &no_dates());
        assert_eq!(evaluation.strength(), MpinStrength::STRONG);
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_classify_all_dates_absent_is_strong() {
        let empty = CommonPinSet::new();
        for raw in ["0000", "0201", "9001", "020199", "999999"] {
            let evaluation = classify(&pin(raw), &empty, &no_dates());
            assert_eq!(evaluation.strength(), MpinStrength::STRONG, "{raw}");
        }
    }

    #[test]
    fn test_classify_common_and_demographic_order() {
        let demo = Demographics::standard(Some("2012-12-12"), None, None);
        let evaluation = classify(&pin("121212"), &common(), &demo);
        assert_eq!(
            evaluation.reasons,
            vec![
                WeaknessReason::CommonlyUsed,
                WeaknessReason::Demographic(DOB_SELF.to_string())
            ]
        );
    }

    #[test]
    fn test_classify_reasons_follow_supplied_order() {
        let demo = Demographics::new()
            .with(ANNIVERSARY, Some("1999-01-02"))
            .with(DOB_SPOUSE, Some("1999-01-02"))
            .with(DOB_SELF, Some("1999-01-02"));
        let evaluation = classify(&pin("020199"), &common(), &demo);
        assert_eq!(
            evaluation.reason_codes(),
            vec!["DEMOGRAPHIC_ANNIVERSARY", "DEMOGRAPHIC_DOB_SPOUSE", "DEMOGRAPHIC_DOB_SELF"]
        );
    }

    #[test]
    fn test_classify_repeated_date_name_tags_once() {
        let demo = Demographics::new()
            .with(DOB_SELF, Some("1998-01-02"))
            .with(DOB_SELF, Some("1998-01-02"));
        let evaluation = classify(&pin("0201"), &common(), &demo);
        assert_eq!(evaluation.reason_codes(), vec!["DEMOGRAPHIC_DOB_SELF"]);
    }

    #[test]
    fn test_classify_only_matching_dates_contribute() {
        let demo = Demographics::standard(Some("1990-01-02"), Some("1990-09-14"), Some("2020-01-02"));
        let evaluation = classify(&pin("9001"), &common(), &demo);
        assert_eq!(evaluation.reason_codes(), vec!["DEMOGRAPHIC_DOB_SELF"]);
    }

    #[test]
    fn test_classify_malformed_date_contributes_nothing() {
        let demo = Demographics::standard(Some("1998/01/02"), Some("garbage"), None);
        let evaluation = classify(&pin("0201"), &common(), &demo);
        assert_eq!(evaluation.strength(), MpinStrength::STRONG);
    }

    #[test]
    fn test_classify_eight_digit_forms_never_match() {
        let demo = Demographics::standard(Some("1998-01-02"), None, None);
        let evaluation = classify(&pin("199801"), &common(), &demo);
        assert_eq!(evaluation.strength(), MpinStrength::STRONG);
    }

    #[test]
    fn test_classify_reason_count_bounded() {
        let demo = Demographics::standard(Some("2000-12-12"), Some("2012-12-12"), Some("1912-12-12"));
        let evaluation = classify(&pin("1212"), &common(), &demo);
        assert_eq!(evaluation.reasons.len(), 1 + demo.len());
    }

    #[test]
    fn test_classify_is_idempotent() {
        let common = common();
        let demo = Demographics::standard(Some("1998-01-02"), None, Some("2020-01-02"));
        let first = classify(&pin("123456"), &common, &demo);
        let second = classify(&pin("123456"), &common, &demo);
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_concurrent_callers() {
        let common = Arc::new(common());
        let demo = Arc::new(Demographics::standard(Some("1998-01-02"), None, None));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let common = Arc::clone(&common);
                let demo = Arc::clone(&demo);
                std::thread::spawn(move || classify(&pin("0201"), &common, &demo))
            })
            .collect();

        for handle in handles {
            let evaluation = handle.join().expect("classifier thread panicked");
            assert_eq!(evaluation.reason_codes(), vec!["DEMOGRAPHIC_DOB_SELF"]);
        }
    }
}
