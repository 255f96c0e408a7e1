//! Natural-language explanations of a verdict.
//!
//! Explanations are advisory. A failing backend never changes or hides the
//! verdict: callers go through [`explain_or_fallback`], which turns any
//! error into a short user-facing message.

mod offline;

#[cfg(feature = "groq")]
mod groq;

pub use offline::OfflineExplainer;

#[cfg(feature = "groq")]
pub use groq::{GroqExplainer, GROQ_API_KEY_ENV};

use std::sync::Arc;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::demographics::Demographics;
use crate::types::{Mpin, WeaknessReason};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplainError {
    #[error("no API key configured for the explanation backend")]
    MissingApiKey,
    #[error("explanation request failed: {0}")]
    Http(String),
    #[error("explanation backend returned no text")]
    EmptyResponse,
}

/// Produces a human-readable description of why an MPIN is (or is not) weak.
pub trait Explainer: Send + Sync {
    fn describe(
        &self,
        pin: &Mpin,
        reasons: &[WeaknessReason],
        dates: &Demographics,
    ) -> Result<String, ExplainError>;
}

impl<E: Explainer + ?Sized> Explainer for Box<E> {
    fn describe(
        &self,
        pin: &Mpin,
        reasons: &[WeaknessReason],
        dates: &Demographics,
    ) -> Result<String, ExplainError> {
        (**self).describe(pin, reasons, dates)
    }
}

impl<E: Explainer + ?Sized> Explainer for Arc<E> {
    fn describe(
        &self,
        pin: &Mpin,
        reasons: &[WeaknessReason],
        dates: &Demographics,
    ) -> Result<String, ExplainError> {
        (**self).describe(pin, reasons, dates)
    }
}

/// Runs `explainer`, replacing any failure with a fallback message.
pub fn explain_or_fallback(
    explainer: &dyn Explainer,
    pin: &Mpin,
    reasons: &[WeaknessReason],
    dates: &Demographics,
) -> String {
    match explainer.describe(pin, reasons, dates) {
        Ok(text) => text,
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Explanation unavailable: {}", e);
            format!("Could not generate explanation: {e}")
        }
    }
}

/// Async version that runs the explainer on the blocking pool and sends the
/// text via channel. Backend failures arrive as the fallback message.
#[cfg(feature = "async")]
pub async fn describe_tx(
    explainer: Arc<dyn Explainer>,
    pin: Mpin,
    reasons: Vec<WeaknessReason>,
    dates: Demographics,
    tx: mpsc::Sender<String>,
) {
    let text = tokio::task::spawn_blocking(move || {
        explain_or_fallback(&*explainer, &pin, &reasons, &dates)
    })
    .await
    .unwrap_or_else(|e| format!("Could not generate explanation: {e}"));

    if let Err(_e) = tx.send(text).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send MPIN explanation: {}", _e);
    }
}
