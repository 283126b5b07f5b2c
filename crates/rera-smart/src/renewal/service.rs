use std::sync::Arc;

use tracing::{info, warn};

use super::advisory::{AdvisoryService, GenerativeClient};
use super::domain::{BenchmarkBasis, LeaseFacts, UnitProfile};
use super::eligibility::{EngineConfig, RentEligibilityEngine};
use super::intake::{facts_from_submission, RenewalSubmission};
use super::report::{AssessmentView, RentComparison};

/// Composes intake normalization, the eligibility engine, and the advisory
/// boundary into the single entry point used by routes and the CLI.
///
/// The whole pipeline is infallible: unusable input degrades to the
/// insufficient-input decision and provider trouble degrades to fallback
/// advice, so callers always get a complete view back.
pub struct RenewalAssessmentService<C> {
    engine: RentEligibilityEngine,
    advisory: AdvisoryService<C>,
}

impl<C> RenewalAssessmentService<C>
where
    C: GenerativeClient + 'static,
{
    pub fn new(client: Arc<C>, config: EngineConfig) -> Self {
        Self {
            engine: RentEligibilityEngine::new(config),
            advisory: AdvisoryService::new(client),
        }
    }

    /// Assess a raw submission, optionally attaching advisory text.
    pub async fn assess(
        &self,
        submission: &RenewalSubmission,
        include_advice: bool,
    ) -> AssessmentView {
        let facts = facts_from_submission(submission);
        self.assess_facts(&facts, include_advice).await
    }

    /// Assess already-normalized lease facts.
    pub async fn assess_facts(&self, facts: &LeaseFacts, include_advice: bool) -> AssessmentView {
        let decision = self.engine.evaluate(facts);

        if decision.benchmark_basis == BenchmarkBasis::IndexFallback {
            warn!("valuation declared without a usable amount, benchmark fell back to the index");
        }

        info!(
            eligible = decision.is_eligible,
            increase_pct = decision.increase_percentage,
            risk = decision.risk_level.label(),
            "renewal assessment computed"
        );

        let advice = if include_advice {
            Some(self.advisory.advice(facts, &decision).await)
        } else {
            None
        };

        let comparison = RentComparison::from_decision(facts.current_rent, &decision);
        AssessmentView {
            decision,
            comparison,
            advice,
        }
    }

    /// Index-rent estimate for prefill. `None` when the collaborator cannot
    /// produce a usable figure.
    pub async fn estimate_market_rent(&self, unit: &UnitProfile) -> Option<f64> {
        self.advisory.estimate_market_rent(unit).await
    }
}
