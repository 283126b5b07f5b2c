//! Narrative text attached to every decision.
//!
//! Wording matches what landlords see in RDC guidance material, so these
//! strings are load-bearing and covered by tests.

use super::notice::NoticeCheck;

fn benchmark_phrase(valuation_used: bool) -> &'static str {
    if valuation_used {
        "valuation"
    } else {
        "RERA Index"
    }
}

/// Explains the outcome in one paragraph. A late notice dominates even when
/// the band alone would already deny the increase.
pub(super) fn why_result(
    notice: &NoticeCheck,
    band_increase: u8,
    gap: f64,
    valuation_used: bool,
) -> String {
    let source = benchmark_phrase(valuation_used);
    if !notice.is_valid {
        format!(
            "While your rent is below market value, the rent increase is blocked because the 90-day notice requirement was not met. Notice was served only {} days prior to expiry.",
            notice.days
        )
    } else if band_increase == 0 {
        if gap < 0.0 {
            format!("Your current rent is higher than the {source}. No increase is justified.")
        } else {
            format!(
                "Your current rent is within 10% of the {source}. Under RERA rules, no increase is permitted when the gap is small."
            )
        }
    } else {
        format!(
            "Your rent is {gap:.1}% below the {source}. RERA bands permit a {band_increase}% increase for this gap."
        )
    }
}

pub(super) fn plain_english_summary(
    is_eligible: bool,
    increase_percentage: u8,
    notice: &NoticeCheck,
) -> String {
    if is_eligible {
        format!(
            "You can legally raise the rent by {increase_percentage}%. Ensure you have proof of the notice delivery."
        )
    } else if !notice.is_valid {
        "You cannot increase the rent this cycle due to the missed 90-day notice deadline. Renew at the current amount."
            .to_string()
    } else {
        "You cannot increase the rent this cycle as the current rent is close to or above market value. Renew at the current amount."
            .to_string()
    }
}

/// What the Rental Dispute Center would most likely lean on. A valuation
/// certificate outranks the notice angle in this phrasing.
pub(super) fn rdc_expectation(valuation_used: bool, notice: &NoticeCheck) -> String {
    if valuation_used {
        "In similar cases, RDC typically favors a valid Valuation Certificate over the general Rental Index."
            .to_string()
    } else if !notice.is_valid {
        "RDC typically strictly enforces the 90-day notice rule. Late notices are usually rejected if challenged."
            .to_string()
    } else {
        "RDC typically relies on the Smart Rental Index calculator for standard disputes.".to_string()
    }
}
