use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized lease facts the eligibility engine consumes.
///
/// Amounts are annual AED figures. Dates are optional because the notice
/// check degrades gracefully when either side of the window is unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseFacts {
    pub current_rent: f64,
    pub market_rent: f64,
    pub has_valuation: bool,
    pub valuation_amount: Option<f64>,
    pub expiry_date: Option<NaiveDate>,
    pub notice_date: Option<NaiveDate>,
    pub tenant_flip_flop: bool,
    pub unit: UnitProfile,
}

/// Unit metadata carried through for estimation and advisory prompts.
///
/// The rules engine never reads these fields; they only shape the text sent
/// to the generative collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitProfile {
    pub area: String,
    pub unit_type: UnitType,
    pub bedrooms: Bedrooms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Apartment,
    Villa,
}

impl UnitType {
    pub const fn label(self) -> &'static str {
        match self {
            UnitType::Apartment => "Apartment",
            UnitType::Villa => "Villa",
        }
    }
}

impl Default for UnitType {
    fn default() -> Self {
        Self::Apartment
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bedrooms {
    Studio,
    One,
    Two,
    Three,
    FourPlus,
}

impl Bedrooms {
    pub const fn label(self) -> &'static str {
        match self {
            Bedrooms::Studio => "Studio",
            Bedrooms::One => "1 Bedroom",
            Bedrooms::Two => "2 Bedrooms",
            Bedrooms::Three => "3 Bedrooms",
            Bedrooms::FourPlus => "4+ Bedrooms",
        }
    }
}

impl Default for Bedrooms {
    fn default() -> Self {
        Self::One
    }
}

/// Which figure the current rent was compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkBasis {
    /// The declared Smart Rental Index figure.
    RentalIndex,
    /// A valuation certificate with a usable amount.
    ValuationCertificate,
    /// A valuation was declared but carried no usable amount, so the index
    /// figure stood in.
    IndexFallback,
}

impl BenchmarkBasis {
    pub const fn label(self) -> &'static str {
        match self {
            BenchmarkBasis::RentalIndex | BenchmarkBasis::IndexFallback => "Index",
            BenchmarkBasis::ValuationCertificate => "Valuation",
        }
    }
}

/// Dispute exposure grade attached to every assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Structured outcome of one renewal assessment.
///
/// `increase_percentage` is the final entitlement after the notice override;
/// `new_max_rent` always equals `current_rent + max_increase_amount`. The
/// `valuation_used` flag is true exactly when `benchmark_basis` is
/// `ValuationCertificate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub is_eligible: bool,
    pub increase_percentage: u8,
    pub max_increase_amount: f64,
    pub new_max_rent: f64,
    pub band_reason: String,
    pub why_result: String,
    pub is_notice_valid: bool,
    pub notice_days: i64,
    pub notice_message: String,
    pub valuation_used: bool,
    pub benchmark_rent: f64,
    pub benchmark_basis: BenchmarkBasis,
    pub risk_level: RiskLevel,
    pub risk_reason: String,
    pub rdc_expectation: String,
    pub plain_english_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_case_warning: Option<String>,
}
