use metrics_exporter_prometheus::PrometheusHandle;
use rera_smart::config::AppConfig;
use rera_smart::error::AppError;
use rera_smart::renewal::{
    Bedrooms, EngineConfig, GeminiClient, RenewalAssessmentService, UnitType,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the statutory engine to the Gemini collaborator described by config.
///
/// A missing API key is not an error here: the client constructs either way
/// and advisory calls degrade to fallback text at request time.
pub(crate) fn assessment_service(
    config: &AppConfig,
) -> Result<Arc<RenewalAssessmentService<GeminiClient>>, AppError> {
    let client = GeminiClient::new(config.advisory.clone())?;
    Ok(Arc::new(RenewalAssessmentService::new(
        Arc::new(client),
        EngineConfig::default(),
    )))
}

pub(crate) fn parse_unit_type(raw: &str) -> Result<UnitType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "apartment" => Ok(UnitType::Apartment),
        "villa" => Ok(UnitType::Villa),
        other => Err(format!(
            "unknown unit type '{other}', expected 'apartment' or 'villa'"
        )),
    }
}

pub(crate) fn parse_bedrooms(raw: &str) -> Result<Bedrooms, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "studio" => Ok(Bedrooms::Studio),
        "1" | "one" => Ok(Bedrooms::One),
        "2" | "two" => Ok(Bedrooms::Two),
        "3" | "three" => Ok(Bedrooms::Three),
        "4" | "4+" | "four" => Ok(Bedrooms::FourPlus),
        other => Err(format!(
            "unknown bedroom count '{other}', expected studio, 1, 2, 3 or 4+"
        )),
    }
}
