mod bands;
mod config;
mod notice;
mod rationale;
mod risk;

pub use config::EngineConfig;

use super::domain::{BenchmarkBasis, Decision, LeaseFacts, RiskLevel};
use bands::{band_for_gap, gap_percent, ABOVE_MARKET_REASON};
use notice::check_notice;
use risk::assess_risk;

/// Stateless evaluator applying the Decree 43/2013 schedule to lease facts.
///
/// `evaluate` is a pure function of its input: no IO, no clock reads, no
/// stored state between calls.
pub struct RentEligibilityEngine {
    config: EngineConfig,
}

impl RentEligibilityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, facts: &LeaseFacts) -> Decision {
        let (benchmark_rent, benchmark_basis) = resolve_benchmark(facts);
        let valuation_used = benchmark_basis == BenchmarkBasis::ValuationCertificate;

        // Without a usable rent on both sides there is nothing to band, and
        // the notice window is not even examined.
        if !is_positive_amount(facts.current_rent) || !is_positive_amount(benchmark_rent) {
            return insufficient_input(facts.current_rent);
        }

        let gap = gap_percent(facts.current_rent, benchmark_rent);
        let band = band_for_gap(gap);
        let band_reason = if gap < 0.0 {
            ABOVE_MARKET_REASON
        } else {
            band.reason
        };
        let band_eligible = band.increase > 0;

        let notice = check_notice(facts.notice_date, facts.expiry_date, &self.config);
        let risk = assess_risk(
            band_eligible,
            valuation_used,
            &notice,
            facts.tenant_flip_flop,
            &self.config,
        );

        let is_eligible = band_eligible && !risk.notice_override;
        let increase_percentage = if is_eligible { band.increase } else { 0 };
        let max_increase_amount = facts.current_rent * f64::from(increase_percentage) / 100.0;
        let new_max_rent = facts.current_rent + max_increase_amount;

        let why_result = rationale::why_result(&notice, band.increase, gap, valuation_used);
        let plain_english_summary =
            rationale::plain_english_summary(is_eligible, increase_percentage, &notice);
        let rdc_expectation = rationale::rdc_expectation(valuation_used, &notice);

        Decision {
            is_eligible,
            increase_percentage,
            max_increase_amount,
            new_max_rent,
            band_reason: band_reason.to_string(),
            why_result,
            is_notice_valid: notice.is_valid,
            notice_days: notice.days,
            notice_message: notice.message,
            valuation_used,
            benchmark_rent,
            benchmark_basis,
            risk_level: risk.level,
            risk_reason: risk.reason,
            rdc_expectation,
            plain_english_summary,
            edge_case_warning: risk.edge_case_warning,
        }
    }
}

/// Pick the comparison figure. A declared valuation wins only when it
/// carries a positive amount; otherwise the index figure stands in and the
/// basis records the fallback.
fn resolve_benchmark(facts: &LeaseFacts) -> (f64, BenchmarkBasis) {
    if facts.has_valuation {
        match facts.valuation_amount {
            Some(amount) if is_positive_amount(amount) => {
                (amount, BenchmarkBasis::ValuationCertificate)
            }
            _ => (facts.market_rent, BenchmarkBasis::IndexFallback),
        }
    } else {
        (facts.market_rent, BenchmarkBasis::RentalIndex)
    }
}

fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Placeholder decision for unusable input. Every narrative field is empty
/// except the band reason prompting the caller for details.
fn insufficient_input(current_rent: f64) -> Decision {
    let current_rent = if is_positive_amount(current_rent) {
        current_rent
    } else {
        0.0
    };

    Decision {
        is_eligible: false,
        increase_percentage: 0,
        max_increase_amount: 0.0,
        new_max_rent: current_rent,
        band_reason: "Enter details".to_string(),
        why_result: String::new(),
        is_notice_valid: true,
        notice_days: 0,
        notice_message: String::new(),
        valuation_used: false,
        benchmark_rent: 0.0,
        benchmark_basis: BenchmarkBasis::RentalIndex,
        risk_level: RiskLevel::Low,
        risk_reason: String::new(),
        rdc_expectation: String::new(),
        plain_english_summary: String::new(),
        edge_case_warning: None,
    }
}
