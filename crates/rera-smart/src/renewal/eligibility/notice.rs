use chrono::NaiveDate;

use super::config::EngineConfig;

/// Outcome of the statutory notice window check.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct NoticeCheck {
    pub(super) days: i64,
    pub(super) is_valid: bool,
    pub(super) evaluated: bool,
    pub(super) message: String,
}

/// Validate the notice window when both dates are known.
///
/// With either date missing the check reports valid and pins `days` at the
/// statutory floor, so downstream risk grading treats the case like a notice
/// served exactly on the deadline.
pub(super) fn check_notice(
    notice_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    config: &EngineConfig,
) -> NoticeCheck {
    let (notice, expiry) = match (notice_date, expiry_date) {
        (Some(notice), Some(expiry)) => (notice, expiry),
        _ => {
            return NoticeCheck {
                days: config.minimum_notice_days,
                is_valid: true,
                evaluated: false,
                message: "Notice not evaluated (dates missing)".to_string(),
            }
        }
    };

    let days = expiry.signed_duration_since(notice).num_days();
    if days < config.minimum_notice_days {
        NoticeCheck {
            days,
            is_valid: false,
            evaluated: true,
            message: format!(
                "Notice was sent {days} days before expiry. RERA requires {} days.",
                config.minimum_notice_days
            ),
        }
    } else {
        NoticeCheck {
            days,
            is_valid: true,
            evaluated: true,
            message: format!(
                "Notice was sent {days} days before expiry (Valid > {} days).",
                config.minimum_notice_days
            ),
        }
    }
}
