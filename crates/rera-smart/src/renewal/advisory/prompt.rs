//! Prompt construction for the generative collaborator.
//!
//! The advice prompt embeds the engine outcome so the model reacts to the
//! computed decision instead of recalculating eligibility on its own.

use super::super::domain::{Decision, LeaseFacts, UnitProfile};

pub(super) fn advice_prompt(facts: &LeaseFacts, decision: &Decision) -> String {
    let source = if decision.valuation_used {
        "Official Valuation"
    } else {
        "RERA Index"
    };
    let tenant_issue = if facts.tenant_flip_flop {
        "Tenant initially declined then requested renewal"
    } else {
        "None"
    };

    format!(
        "You are a Dubai Real Estate expert (RDC context).\n\
         \n\
         Landlord Situation:\n\
         - Unit: {bedrooms} {unit_type} in {area}\n\
         - Current Rent: AED {current_rent}\n\
         - Benchmark Rent: AED {benchmark_rent} (Source: {source})\n\
         - Notice Sent: {notice_days} days before expiry (Valid: {notice_valid})\n\
         - Tenant Issue: {tenant_issue}\n\
         \n\
         Calculated Outcome:\n\
         - Eligible for Increase: {eligible}\n\
         - Allowed Increase: {increase}%\n\
         - Risk Level: {risk} ({risk_reason})\n\
         \n\
         Task:\n\
         Provide 3 concise, calm, and neutral \"Recommended Next Steps\" for the landlord.\n\
         If the notice is invalid, advise to renew at current rent.\n\
         If high risk, advise caution.\n\
         Provide 1 short sentence \"Market Context\" about demand in {area}.\n\
         \n\
         Constraint: Do NOT give legal guarantees. Use phrases like \"Consider...\", \"Typically...\", \"It is recommended to...\".",
        bedrooms = facts.unit.bedrooms.label(),
        unit_type = facts.unit.unit_type.label(),
        area = facts.unit.area,
        current_rent = facts.current_rent,
        benchmark_rent = decision.benchmark_rent,
        source = source,
        notice_days = decision.notice_days,
        notice_valid = decision.is_notice_valid,
        tenant_issue = tenant_issue,
        eligible = decision.is_eligible,
        increase = decision.increase_percentage,
        risk = decision.risk_level.label(),
        risk_reason = decision.risk_reason,
    )
}

pub(super) fn estimate_prompt(unit: &UnitProfile) -> String {
    format!(
        "Estimate the current average annual market rent (RERA Index) for a {bedrooms} {unit_type} in {area}, Dubai.\n\
         Return ONLY a single number representing the average annual rent in AED.\n\
         Do not give a range, just a conservative average integer.",
        bedrooms = unit.bedrooms.label(),
        unit_type = unit.unit_type.label(),
        area = unit.area,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renewal::domain::{Bedrooms, UnitProfile, UnitType};

    #[test]
    fn estimate_prompt_names_the_unit() {
        let unit = UnitProfile {
            area: "Jumeirah Village Circle".to_string(),
            unit_type: UnitType::Apartment,
            bedrooms: Bedrooms::Two,
        };
        let prompt = estimate_prompt(&unit);
        assert!(prompt.contains("2 Bedrooms Apartment in Jumeirah Village Circle"));
        assert!(prompt.contains("single number"));
    }
}
