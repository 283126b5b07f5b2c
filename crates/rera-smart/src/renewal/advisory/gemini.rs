use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use super::client::{AdvisoryError, GenerativeClient, RenewalAdvice};
use super::prompt;
use super::super::domain::{Decision, LeaseFacts, UnitProfile};
use crate::config::AdvisoryConfig;

/// Client for Google's Gemini `generateContent` endpoint.
///
/// Both calls request a JSON response schema, so the model replies with a
/// machine-readable document instead of prose. Construction succeeds without
/// an API key; requests made without one fail with `MissingApiKey` and the
/// service layer falls back.
pub struct GeminiClient {
    config: AdvisoryConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: AdvisoryConfig) -> Result<Self, AdvisoryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AdvisoryError::Network(err.to_string()))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Run one generateContent call and return the first candidate's text.
    async fn generate(&self, prompt: String, response_schema: Value) -> Result<String, AdvisoryError> {
        if !self.config.has_api_key() {
            return Err(AdvisoryError::MissingApiKey);
        }

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema,
            },
        });

        let response = self
            .client
            .post(self.generate_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AdvisoryError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if err.is_connect() {
                    AdvisoryError::Network(format!("connection failed: {err}"))
                } else {
                    AdvisoryError::Network(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AdvisoryError::Payload(err.to_string()))?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| AdvisoryError::Payload("response carried no candidate text".to_string()))
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_advice(
        &self,
        facts: &LeaseFacts,
        decision: &Decision,
    ) -> Result<RenewalAdvice, AdvisoryError> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "nextSteps": { "type": "ARRAY", "items": { "type": "STRING" } },
                "marketContext": { "type": "STRING" },
            },
        });

        let text = self
            .generate(prompt::advice_prompt(facts, decision), schema)
            .await?;
        serde_json::from_str(&text).map_err(|err| AdvisoryError::Payload(err.to_string()))
    }

    async fn estimate_market_rent(&self, unit: &UnitProfile) -> Result<f64, AdvisoryError> {
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "estimatedRent": { "type": "NUMBER" },
            },
        });

        let text = self
            .generate(prompt::estimate_prompt(unit), schema)
            .await?;
        let payload: EstimatePayload =
            serde_json::from_str(&text).map_err(|err| AdvisoryError::Payload(err.to_string()))?;

        match payload.estimated_rent {
            Some(amount) if amount > 0.0 => Ok(amount),
            _ => Err(AdvisoryError::Payload(
                "response carried no usable rent estimate".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct EstimatePayload {
    #[serde(default, alias = "estimatedRent")]
    estimated_rent: Option<f64>,
}
