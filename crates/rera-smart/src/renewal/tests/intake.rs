use super::common::*;
use crate::renewal::domain::{Bedrooms, UnitType};
use crate::renewal::intake::{facts_from_submission, RenewalSubmission};
use chrono::NaiveDate;

#[test]
fn well_formed_submission_converts_cleanly() {
    let facts = facts_from_submission(&submission());

    assert_eq!(facts.current_rent, 80_000.0);
    assert_eq!(facts.market_rent, 100_000.0);
    assert!(!facts.has_valuation);
    assert_eq!(facts.valuation_amount, None);
    assert_eq!(
        facts.expiry_date,
        Some(NaiveDate::from_ymd_opt(2026, 6, 30).expect("valid date"))
    );
    assert_eq!(
        facts.notice_date,
        Some(NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"))
    );
    assert_eq!(facts.unit.area, "Dubai Marina");
}

#[test]
fn amounts_are_trimmed_before_parsing() {
    let mut raw = submission();
    raw.current_rent = "  80000  ".to_string();
    raw.market_rent = "\t100000\n".to_string();

    let facts = facts_from_submission(&raw);

    assert_eq!(facts.current_rent, 80_000.0);
    assert_eq!(facts.market_rent, 100_000.0);
}

#[test]
fn unparseable_amounts_collapse_to_zero() {
    let mut raw = submission();
    raw.current_rent = "eighty thousand".to_string();
    raw.market_rent = "85,000".to_string();

    let facts = facts_from_submission(&raw);
    assert_eq!(facts.current_rent, 0.0);
    assert_eq!(facts.market_rent, 0.0);

    let decision = engine().evaluate(&facts);
    assert_eq!(decision.band_reason, "Enter details");
}

#[test]
fn unparseable_dates_are_dropped() {
    let mut raw = submission();
    raw.expiry_date = "30/06/2026".to_string();
    raw.notice_date = String::new();

    let facts = facts_from_submission(&raw);

    assert_eq!(facts.expiry_date, None);
    assert_eq!(facts.notice_date, None);

    let decision = engine().evaluate(&facts);
    assert_eq!(decision.notice_message, "Notice not evaluated (dates missing)");
}

#[test]
fn valuation_amount_requires_the_declaration() {
    let mut raw = submission();
    raw.valuation_amount = "120000".to_string();

    let undeclared = facts_from_submission(&raw);
    assert_eq!(undeclared.valuation_amount, None);

    raw.has_valuation = true;
    let declared = facts_from_submission(&raw);
    assert_eq!(declared.valuation_amount, Some(120_000.0));
}

#[test]
fn declared_valuation_with_garbage_amount_is_dropped() {
    let mut raw = submission();
    raw.has_valuation = true;
    raw.valuation_amount = "certificate pending".to_string();

    let facts = facts_from_submission(&raw);

    assert!(facts.has_valuation);
    assert_eq!(facts.valuation_amount, None);
}

#[test]
fn empty_payload_deserializes_with_defaults() {
    let raw: RenewalSubmission =
        serde_json::from_value(serde_json::json!({})).expect("defaults apply");

    assert_eq!(raw.unit_type, UnitType::Apartment);
    assert_eq!(raw.bedrooms, Bedrooms::One);
    assert!(raw.current_rent.is_empty());
    assert!(!raw.has_valuation);

    let decision = engine().evaluate(&facts_from_submission(&raw));
    assert_eq!(decision.band_reason, "Enter details");
}

#[test]
fn negative_rent_routes_to_the_placeholder() {
    let mut raw = submission();
    raw.current_rent = "-5000".to_string();

    let facts = facts_from_submission(&raw);
    assert_eq!(facts.current_rent, -5000.0);

    let decision = engine().evaluate(&facts);
    assert_eq!(decision.band_reason, "Enter details");
    assert_eq!(decision.new_max_rent, 0.0);
}
