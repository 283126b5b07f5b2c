use super::client::RenewalAdvice;
use super::super::domain::Decision;

/// Deterministic stand-in advice used whenever the provider call fails.
/// The first step tracks the computed eligibility so the fallback never
/// contradicts the decision it accompanies.
pub(super) fn fallback_advice(decision: &Decision) -> RenewalAdvice {
    let first_step = if decision.is_eligible {
        "Proceed with the renewal contract reflecting the increase."
    } else {
        "Renew at the current rental amount."
    };

    RenewalAdvice {
        next_steps: vec![
            first_step.to_string(),
            "Ensure all communications with the tenant are documented.".to_string(),
            "If a dispute arises, file an 'Offer and Deposit' with the RDC.".to_string(),
        ],
        market_context: "Dubai's rental market remains active; verify specific community trends."
            .to_string(),
    }
}
