use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::renewal::advisory::{AdvisoryError, GenerativeClient, RenewalAdvice};
use crate::renewal::domain::{Bedrooms, Decision, LeaseFacts, UnitProfile, UnitType};
use crate::renewal::eligibility::{EngineConfig, RentEligibilityEngine};
use crate::renewal::intake::RenewalSubmission;
use crate::renewal::router::renewal_router;
use crate::renewal::service::RenewalAssessmentService;

pub(super) fn unit() -> UnitProfile {
    UnitProfile {
        area: "Dubai Marina".to_string(),
        unit_type: UnitType::Apartment,
        bedrooms: Bedrooms::One,
    }
}

pub(super) fn engine_config() -> EngineConfig {
    EngineConfig {
        minimum_notice_days: 90,
        tight_notice_days: 95,
    }
}

pub(super) fn engine() -> RentEligibilityEngine {
    RentEligibilityEngine::new(engine_config())
}

pub(super) fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 30).expect("valid date")
}

/// Facts with no valuation and no dates, so the notice check reports the
/// unevaluated sentinel.
pub(super) fn facts(current_rent: f64, market_rent: f64) -> LeaseFacts {
    LeaseFacts {
        current_rent,
        market_rent,
        has_valuation: false,
        valuation_amount: None,
        expiry_date: None,
        notice_date: None,
        tenant_flip_flop: false,
        unit: unit(),
    }
}

/// Facts with a notice served `days_before` days ahead of a fixed expiry.
pub(super) fn facts_with_notice(current_rent: f64, market_rent: f64, days_before: i64) -> LeaseFacts {
    let mut facts = facts(current_rent, market_rent);
    facts.expiry_date = Some(expiry());
    facts.notice_date = Some(expiry() - Duration::days(days_before));
    facts
}

pub(super) fn facts_with_valuation(
    current_rent: f64,
    market_rent: f64,
    valuation_amount: f64,
) -> LeaseFacts {
    let mut facts = facts(current_rent, market_rent);
    facts.has_valuation = true;
    facts.valuation_amount = Some(valuation_amount);
    facts
}

pub(super) fn submission() -> RenewalSubmission {
    RenewalSubmission {
        current_rent: "80000".to_string(),
        market_rent: "100000".to_string(),
        area: "Dubai Marina".to_string(),
        unit_type: UnitType::Apartment,
        bedrooms: Bedrooms::One,
        expiry_date: "2026-06-30".to_string(),
        notice_date: "2026-01-15".to_string(),
        has_valuation: false,
        valuation_amount: String::new(),
        tenant_flip_flop: false,
    }
}

pub(super) fn scripted_advice() -> RenewalAdvice {
    RenewalAdvice {
        next_steps: vec![
            "Serve the increase letter through registered channels.".to_string(),
            "Attach the Smart Rental Index excerpt to the renewal offer.".to_string(),
            "Keep delivery receipts for the notice.".to_string(),
        ],
        market_context: "Demand in Dubai Marina stays firm for mid-size apartments.".to_string(),
    }
}

/// Stub collaborator returning canned data and recording what it was asked.
pub(super) struct StaticClient {
    advice: RenewalAdvice,
    estimate: f64,
    pub(super) advice_calls: AtomicUsize,
    pub(super) last_decision: Mutex<Option<Decision>>,
}

impl StaticClient {
    pub(super) fn new(advice: RenewalAdvice, estimate: f64) -> Self {
        Self {
            advice,
            estimate,
            advice_calls: AtomicUsize::new(0),
            last_decision: Mutex::new(None),
        }
    }
}

impl Default for StaticClient {
    fn default() -> Self {
        Self::new(scripted_advice(), 100_000.0)
    }
}

#[async_trait]
impl GenerativeClient for StaticClient {
    async fn generate_advice(
        &self,
        _facts: &LeaseFacts,
        decision: &Decision,
    ) -> Result<RenewalAdvice, AdvisoryError> {
        self.advice_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_decision.lock().expect("stub mutex poisoned") = Some(decision.clone());
        Ok(self.advice.clone())
    }

    async fn estimate_market_rent(&self, _unit: &UnitProfile) -> Result<f64, AdvisoryError> {
        Ok(self.estimate)
    }
}

#[derive(Clone, Copy)]
pub(super) enum FailureKind {
    Timeout,
    Network,
    Status,
    Payload,
    MissingKey,
}

/// Stub collaborator that fails every call with the configured error.
pub(super) struct FailingClient {
    kind: FailureKind,
}

impl FailingClient {
    pub(super) fn new(kind: FailureKind) -> Self {
        Self { kind }
    }

    fn error(&self) -> AdvisoryError {
        match self.kind {
            FailureKind::Timeout => AdvisoryError::Timeout { timeout_secs: 30 },
            FailureKind::Network => AdvisoryError::Network("connection refused".to_string()),
            FailureKind::Status => AdvisoryError::Status {
                status: 429,
                body: "quota exceeded".to_string(),
            },
            FailureKind::Payload => AdvisoryError::Payload("unexpected token".to_string()),
            FailureKind::MissingKey => AdvisoryError::MissingApiKey,
        }
    }
}

#[async_trait]
impl GenerativeClient for FailingClient {
    async fn generate_advice(
        &self,
        _facts: &LeaseFacts,
        _decision: &Decision,
    ) -> Result<RenewalAdvice, AdvisoryError> {
        Err(self.error())
    }

    async fn estimate_market_rent(&self, _unit: &UnitProfile) -> Result<f64, AdvisoryError> {
        Err(self.error())
    }
}

/// Stub collaborator returning a zero estimate and an empty advice plan.
pub(super) struct UnusableClient;

#[async_trait]
impl GenerativeClient for UnusableClient {
    async fn generate_advice(
        &self,
        _facts: &LeaseFacts,
        _decision: &Decision,
    ) -> Result<RenewalAdvice, AdvisoryError> {
        Ok(RenewalAdvice {
            next_steps: Vec::new(),
            market_context: String::new(),
        })
    }

    async fn estimate_market_rent(&self, _unit: &UnitProfile) -> Result<f64, AdvisoryError> {
        Ok(0.0)
    }
}

pub(super) fn build_service() -> (
    Arc<RenewalAssessmentService<StaticClient>>,
    Arc<StaticClient>,
) {
    let client = Arc::new(StaticClient::default());
    let service = Arc::new(RenewalAssessmentService::new(
        client.clone(),
        engine_config(),
    ));
    (service, client)
}

pub(super) fn build_failing_service(
    kind: FailureKind,
) -> Arc<RenewalAssessmentService<FailingClient>> {
    Arc::new(RenewalAssessmentService::new(
        Arc::new(FailingClient::new(kind)),
        engine_config(),
    ))
}

pub(super) fn renewal_router_with_stub() -> axum::Router {
    let (service, _) = build_service();
    renewal_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
