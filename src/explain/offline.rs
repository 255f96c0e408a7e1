//! Template explanations that need no network access.

use super::{ExplainError, Explainer};
use crate::demographics::{Demographics, ANNIVERSARY, DOB_SELF, DOB_SPOUSE};
use crate::types::{Mpin, WeaknessReason};

const STRONG_TEXT: &str =
    "This MPIN is considered STRONG because it is unique. It does not match any common or demographic pattern.";

const ADVICE: &str = "Pick digits with no personal meaning and avoid repeated or sequential patterns.";

/// Deterministic explainer used when no generative backend is configured.
///
/// Never fails and never echoes the MPIN digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineExplainer;

impl Explainer for OfflineExplainer {
    fn describe(&self, _pin: &Mpin, reasons: &[WeaknessReason], _dates: &Demographics) -> Result<String, ExplainError> {
        Ok(describe_reasons(reasons))
    }
}

/// Builds the explanation text for a list of reasons.
pub(crate) fn describe_reasons(reasons: &[WeaknessReason]) -> String {
    if reasons.is_empty() {
        return STRONG_TEXT.to_string();
    }

    let clauses: Vec<String> = reasons
        .iter()
        .map(|reason| match reason {
            WeaknessReason::CommonlyUsed => "it is a commonly used MPIN pattern".to_string(),
            WeaknessReason::Demographic(name) => {
                format!("it matches your {} in a common format", field_label(name))
            }
        })
        .collect();

    format!("This MPIN is WEAK: {}. {}", clauses.join(", and "), ADVICE)
}

/// Human label for a demographic identifier.
fn field_label(name: &str) -> String {
    match name {
        DOB_SELF => "date of birth".to_string(),
        DOB_SPOUSE => "spouse's date of birth".to_string(),
        ANNIVERSARY => "anniversary date".to_string(),
        other => title_case(&other.replace('_', " ")),
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(raw: &str, reasons: &[WeaknessReason]) -> String {
        let pin = Mpin::parse(raw).unwrap();
        OfflineExplainer
            .describe(&pin, reasons, &Demographics::new())
            .expect("offline explainer never fails")
    }

    #[test]
    fn test_strong_text() {
        let text = describe("5683", &[]);
        assert!(text.contains("STRONG"));
        assert!(!text.contains("5683"));
    }

    #[test]
    fn test_weak_text_lists_every_reason() {
        let text = describe(
            "121212",
            &[
                WeaknessReason::CommonlyUsed,
                WeaknessReason::Demographic(DOB_SELF.to_string()),
                WeaknessReason::Demographic(ANNIVERSARY.to_string()),
            ],
        );
        assert!(text.starts_with("This MPIN is WEAK:"));
        assert!(text.contains("commonly used MPIN pattern, and it matches your date of birth"));
        assert!(text.contains("anniversary date"));
        assert!(!text.contains("121212"));
    }

    #[test]
    fn test_custom_identifier_label() {
        let text = describe("0201", &[WeaknessReason::Demographic("child_BIRTH".to_string())]);
        assert!(text.contains("your Child Birth in a common format"));
    }
}
