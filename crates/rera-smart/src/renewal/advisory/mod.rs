//! Generative collaborator boundary.
//!
//! The engine decides; this layer only narrates and estimates. Provider
//! failures never leave the module: `AdvisoryService` logs them and serves
//! deterministic fallback text so an assessment always completes.

mod client;
mod fallback;
mod gemini;
mod prompt;

pub use client::{AdvisoryError, GenerativeClient, RenewalAdvice};
pub use gemini::GeminiClient;

use std::sync::Arc;

use tracing::warn;

use super::domain::{Decision, LeaseFacts, UnitProfile};

/// Wraps a generative client so callers always receive advice.
pub struct AdvisoryService<C> {
    client: Arc<C>,
}

impl<C> AdvisoryService<C>
where
    C: GenerativeClient + 'static,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Advisory text for a completed assessment. Never fails; a provider
    /// error or an empty plan degrades to the fallback.
    pub async fn advice(&self, facts: &LeaseFacts, decision: &Decision) -> RenewalAdvice {
        match self.client.generate_advice(facts, decision).await {
            Ok(advice) if !advice.next_steps.is_empty() => advice,
            Ok(_) => {
                warn!("advisory response carried no next steps, serving fallback");
                fallback::fallback_advice(decision)
            }
            Err(err) => {
                warn!(error = %err, "advisory call failed, serving fallback");
                fallback::fallback_advice(decision)
            }
        }
    }

    /// Index-rent estimate used to prefill the benchmark field. Failures and
    /// unusable figures surface as `None` rather than an error.
    pub async fn estimate_market_rent(&self, unit: &UnitProfile) -> Option<f64> {
        match self.client.estimate_market_rent(unit).await {
            Ok(amount) if amount.is_finite() && amount > 0.0 => Some(amount),
            Ok(amount) => {
                warn!(amount, "estimation returned a non-positive rent, ignoring");
                None
            }
            Err(err) => {
                warn!(error = %err, "rent estimation failed");
                None
            }
        }
    }
}
