use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::super::domain::{Decision, LeaseFacts, UnitProfile};

/// Structured advisory payload produced for a completed assessment.
///
/// The aliases accept the camel-case field names the generative model is
/// instructed to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalAdvice {
    #[serde(alias = "nextSteps")]
    pub next_steps: Vec<String>,
    #[serde(alias = "marketContext")]
    pub market_context: String,
}

/// Capability boundary for the external generative service.
///
/// Implementations translate between the provider wire format and the
/// structures the assessment service consumes. Every failure stays inside
/// `AdvisoryError` so the service layer can substitute deterministic
/// fallbacks instead of propagating provider trouble to callers.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Produce recommended next steps plus one market-context sentence for
    /// an already-computed decision.
    async fn generate_advice(
        &self,
        facts: &LeaseFacts,
        decision: &Decision,
    ) -> Result<RenewalAdvice, AdvisoryError>;

    /// Estimate the average annual index rent for a unit profile.
    async fn estimate_market_rent(&self, unit: &UnitProfile) -> Result<f64, AdvisoryError>;
}

/// Transport and payload failures from the generative collaborator.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory api key is not configured")]
    MissingApiKey,
    #[error("advisory request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
    #[error("advisory network error: {0}")]
    Network(String),
    #[error("advisory provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed advisory payload: {0}")]
    Payload(String),
}
