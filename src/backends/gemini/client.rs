// Google Gemini API client
//
// Single attempt per call, bounded by the configured timeout. Retry
// policy, if any, belongs to the caller's infrastructure, not here.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::PlanError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    timeout_seconds: u64,
    temperature: f32,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        timeout_seconds: u64,
        temperature: f32,
    ) -> Result<Self, PlanError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| PlanError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model,
            timeout_seconds,
            temperature,
            base_url: GEMINI_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests to point at a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Extract planning constraints from goals text as schema-shaped JSON.
    /// `user` is the profile payload plus any run metadata (e.g. mode) the
    /// caller wants the model to see.
    pub async fn parse_constraints(
        &self,
        goals_text: &str,
        user: &Value,
    ) -> Result<Value, PlanError> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| PlanError::Upstream(format!("failed to encode user profile: {e}")))?;
        let prompt = format!(
            "Extract structured constraints from the goals text. \
             Return JSON only, matching the schema. \
             Use the user's risk_tolerance when goals are ambiguous.\n\n\
             User: {user_json}\nGoals: {goals_text}"
        );

        let text = self
            .generate(&prompt, Some(constraints_schema()), "constraints")
            .await?;

        serde_json::from_str(&text)
            .map_err(|e| PlanError::Upstream(format!("model returned invalid JSON: {e}")))
    }

    /// Generate a narrative report for the given report input.
    pub async fn explain_report(&self, report_input: &Value) -> Result<String, PlanError> {
        let input = serde_json::to_string_pretty(report_input)
            .map_err(|e| PlanError::Upstream(format!("failed to encode report input: {e}")))?;
        let prompt = format!(
            "Write a concise financial planning report in Markdown. \
             Include headings: Overview, Plans, Recommendation, Risks. \
             Use data from the input. Keep it professional and concrete.\n\n\
             Input: {input}"
        );

        self.generate(&prompt, None, "report").await
    }

    async fn generate(
        &self,
        prompt: &str,
        response_schema: Option<Value>,
        what: &'static str,
    ) -> Result<String, PlanError> {
        if !self.is_configured() {
            return Err(PlanError::Configuration(
                "Gemini client not configured".to_string(),
            ));
        }

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(self.temperature),
                response_mime_type: response_schema
                    .is_some()
                    .then(|| "application/json".to_string()),
                response_schema,
            }),
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        tracing::debug!("Sending {} request to Gemini API", what);

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlanError::UpstreamTimeout {
                        seconds: self.timeout_seconds,
                    }
                } else {
                    PlanError::Upstream(format!("request to Gemini API failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlanError::Upstream(format!(
                "Gemini API request failed with status {status}: {body}"
            )));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| PlanError::Upstream(format!("failed to parse Gemini response: {e}")))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(PlanError::UpstreamEmptyResponse(what));
        }

        tracing::debug!("Received {} chars of {} text", text.len(), what);
        Ok(text)
    }
}

/// Response schema for constraint extraction: the seven Constraints
/// fields, all required.
fn constraints_schema() -> Value {
    json!({
        "type": "OBJECT",
        "required": [
            "min_emergency_fund_months",
            "focus_debt_reduction",
            "risk_tolerance",
            "priority_order",
            "time_horizon_months",
            "must_avoid",
            "conflicts",
        ],
        "properties": {
            "min_emergency_fund_months": {"type": "INTEGER"},
            "focus_debt_reduction": {"type": "BOOLEAN"},
            "risk_tolerance": {"type": "STRING"},
            "priority_order": {"type": "ARRAY", "items": {"type": "STRING"}},
            "time_horizon_months": {"type": "INTEGER"},
            "must_avoid": {"type": "ARRAY", "items": {"type": "STRING"}},
            "conflicts": {"type": "ARRAY", "items": {"type": "STRING"}},
        },
    })
}

// Gemini API wire types

#[derive(Debug, Clone, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Clone, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}
