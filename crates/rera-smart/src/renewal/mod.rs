//! Rent renewal assessment workflow.
//!
//! A renewal runs through four stages: raw submission intake, the pure
//! Decree 43/2013 eligibility engine, risk grading with rationale text, and
//! an optional advisory pass against a generative collaborator. The engine
//! never performs IO; the advisory boundary never influences the numbers.

pub mod advisory;
pub mod domain;
pub(crate) mod eligibility;
pub mod intake;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use advisory::{
    AdvisoryError, AdvisoryService, GeminiClient, GenerativeClient, RenewalAdvice,
};
pub use domain::{
    Bedrooms, BenchmarkBasis, Decision, LeaseFacts, RiskLevel, UnitProfile, UnitType,
};
pub use eligibility::{EngineConfig, RentEligibilityEngine};
pub use intake::{facts_from_submission, RenewalSubmission};
pub use report::{format_aed, AssessmentView, RentComparison};
pub use router::renewal_router;
pub use service::RenewalAssessmentService;
