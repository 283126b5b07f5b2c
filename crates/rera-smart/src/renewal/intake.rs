use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Bedrooms, LeaseFacts, UnitProfile, UnitType};

/// Raw renewal payload as it arrives from a form or API caller.
///
/// Amounts and dates are carried as text on purpose: a half-filled form is a
/// legitimate request, and normalization decides what is usable rather than
/// rejecting the whole submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenewalSubmission {
    #[serde(default)]
    pub current_rent: String,
    #[serde(default)]
    pub market_rent: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub unit_type: UnitType,
    #[serde(default)]
    pub bedrooms: Bedrooms,
    #[serde(default)]
    pub expiry_date: String,
    #[serde(default)]
    pub notice_date: String,
    #[serde(default)]
    pub has_valuation: bool,
    #[serde(default)]
    pub valuation_amount: String,
    #[serde(default)]
    pub tenant_flip_flop: bool,
}

/// Normalize a raw submission into lease facts.
///
/// Unparseable amounts collapse to zero and unparseable dates are dropped,
/// which routes the case into the engine's insufficient-input handling
/// instead of failing the request. A valuation amount is only considered
/// when the submission declares one.
pub fn facts_from_submission(submission: &RenewalSubmission) -> LeaseFacts {
    let valuation_amount = if submission.has_valuation {
        parse_amount(&submission.valuation_amount)
    } else {
        None
    };

    LeaseFacts {
        current_rent: parse_amount(&submission.current_rent).unwrap_or(0.0),
        market_rent: parse_amount(&submission.market_rent).unwrap_or(0.0),
        has_valuation: submission.has_valuation,
        valuation_amount,
        expiry_date: parse_date(&submission.expiry_date),
        notice_date: parse_date(&submission.notice_date),
        tenant_flip_flop: submission.tenant_flip_flop,
        unit: UnitProfile {
            area: submission.area.trim().to_string(),
            unit_type: submission.unit_type,
            bedrooms: submission.bedrooms,
        },
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
