use super::super::domain::RiskLevel;
use super::config::EngineConfig;
use super::notice::NoticeCheck;

/// Risk grade plus the override flag the engine applies on top of the band
/// outcome. `notice_override` means a band-eligible increase was voided by a
/// late notice.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct RiskAssessment {
    pub(super) level: RiskLevel,
    pub(super) reason: String,
    pub(super) notice_override: bool,
    pub(super) edge_case_warning: Option<String>,
}

/// First matching rule wins. The invalid-notice arms come before the
/// valuation arm, so a late notice always dominates the grade.
pub(super) fn assess_risk(
    band_eligible: bool,
    valuation_used: bool,
    notice: &NoticeCheck,
    tenant_flip_flop: bool,
    config: &EngineConfig,
) -> RiskAssessment {
    let mut notice_override = false;
    let mut edge_case_warning = None;

    let (level, reason) = if !notice.is_valid && band_eligible {
        notice_override = true;
        edge_case_warning = Some(
            "Although the market value supports an increase, the 90-day notice requirement was not met."
                .to_string(),
        );
        (
            RiskLevel::High,
            "Invalid notice period usually invalidates any increase.".to_string(),
        )
    } else if !notice.is_valid {
        (
            RiskLevel::Low,
            "No increase possible due to market rates (and notice was also late).".to_string(),
        )
    } else if valuation_used {
        (
            RiskLevel::Medium,
            "Valuation certificates are generally stronger than the Index, but disputes can occur."
                .to_string(),
        )
    } else if band_eligible && notice.days < config.tight_notice_days {
        (
            RiskLevel::Medium,
            "Notice period is valid but close to the 90-day minimum limit.".to_string(),
        )
    } else {
        (RiskLevel::Low, "Standard RERA compliance.".to_string())
    };

    let edge_case_warning = if tenant_flip_flop {
        match edge_case_warning {
            Some(warning) => Some(format!(
                "{warning} Also, tenant changing mind does not reset legal deadlines."
            )),
            None => Some(
                "A tenant changing their decision does not reset rent eligibility. Renewal terms still follow RERA-based limits."
                    .to_string(),
            ),
        }
    } else {
        edge_case_warning
    };

    RiskAssessment {
        level,
        reason,
        notice_override,
        edge_case_warning,
    }
}
