use serde::Serialize;

use super::advisory::RenewalAdvice;
use super::domain::Decision;

/// The three amounts a landlord compares at a glance: what they charge now,
/// what the benchmark says, and the ceiling the schedule allows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentComparison {
    pub current_rent: f64,
    pub benchmark_label: &'static str,
    pub benchmark_rent: f64,
    pub new_max_rent: f64,
}

impl RentComparison {
    pub fn from_decision(current_rent: f64, decision: &Decision) -> Self {
        Self {
            current_rent,
            benchmark_label: decision.benchmark_basis.label(),
            benchmark_rent: decision.benchmark_rent,
            new_max_rent: decision.new_max_rent,
        }
    }
}

/// Full assessment payload for API responses and CLI rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub decision: Decision,
    pub comparison: RentComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<RenewalAdvice>,
}

/// Format an annual amount the way it appears on tenancy paperwork,
/// e.g. `AED 84,000`. Fractions are rounded away; rents are whole dirhams.
pub fn format_aed(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if whole < 0 {
        format!("AED -{grouped}")
    } else {
        format!("AED {grouped}")
    }
}
