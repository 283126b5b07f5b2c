use std::sync::Arc;

use super::common::*;
use crate::renewal::advisory::AdvisoryService;

#[tokio::test]
async fn healthy_collaborator_answers_pass_through() {
    let advisory = AdvisoryService::new(Arc::new(StaticClient::default()));
    let sample = facts_with_notice(80_000.0, 100_000.0, 120);
    let decision = engine().evaluate(&sample);

    let advice = advisory.advice(&sample, &decision).await;

    assert_eq!(advice, scripted_advice());
}

#[tokio::test]
async fn provider_failures_degrade_to_fallback_advice() {
    for kind in [
        FailureKind::Timeout,
        FailureKind::Network,
        FailureKind::Status,
        FailureKind::Payload,
        FailureKind::MissingKey,
    ] {
        let advisory = AdvisoryService::new(Arc::new(FailingClient::new(kind)));
        let sample = facts_with_notice(80_000.0, 100_000.0, 120);
        let decision = engine().evaluate(&sample);

        let advice = advisory.advice(&sample, &decision).await;

        assert_eq!(advice.next_steps.len(), 3);
        assert_eq!(
            advice.next_steps[0],
            "Proceed with the renewal contract reflecting the increase."
        );
        assert_eq!(
            advice.market_context,
            "Dubai's rental market remains active; verify specific community trends."
        );
    }
}

#[tokio::test]
async fn fallback_tracks_an_ineligible_decision() {
    let advisory = AdvisoryService::new(Arc::new(FailingClient::new(FailureKind::Network)));
    let sample = facts_with_notice(80_000.0, 120_000.0, 60);
    let decision = engine().evaluate(&sample);
    assert!(!decision.is_eligible);

    let advice = advisory.advice(&sample, &decision).await;

    assert_eq!(advice.next_steps[0], "Renew at the current rental amount.");
    assert!(advice
        .next_steps
        .iter()
        .any(|step| step.contains("Offer and Deposit")));
}

#[tokio::test]
async fn empty_plan_counts_as_a_failure() {
    let advisory = AdvisoryService::new(Arc::new(UnusableClient));
    let sample = facts_with_notice(80_000.0, 100_000.0, 120);
    let decision = engine().evaluate(&sample);

    let advice = advisory.advice(&sample, &decision).await;

    assert_eq!(advice.next_steps.len(), 3);
    assert!(!advice.market_context.is_empty());
}

#[tokio::test]
async fn estimation_returns_the_collaborator_figure() {
    let advisory = AdvisoryService::new(Arc::new(StaticClient::new(scripted_advice(), 95_000.0)));

    let estimated = advisory.estimate_market_rent(&unit()).await;

    assert_eq!(estimated, Some(95_000.0));
}

#[tokio::test]
async fn estimation_failures_surface_as_none() {
    let advisory = AdvisoryService::new(Arc::new(FailingClient::new(FailureKind::Timeout)));

    assert_eq!(advisory.estimate_market_rent(&unit()).await, None);
}

#[tokio::test]
async fn zero_estimates_are_discarded() {
    let advisory = AdvisoryService::new(Arc::new(UnusableClient));

    assert_eq!(advisory.estimate_market_rent(&unit()).await, None);
}
