// Gemini goal parser
//
// Delegates extraction to the model with a strict output schema, then
// defaults any field the model left out or mistyped.

use async_trait::async_trait;
use serde_json::Value;

use super::client::GeminiClient;
use crate::backends::GoalParser;
use crate::error::PlanError;
use crate::model::{Constraints, UserProfile};

pub struct GeminiGoalParser {
    client: GeminiClient,
    mode: String,
}

impl GeminiGoalParser {
    pub fn new(client: GeminiClient, mode: impl Into<String>) -> Self {
        Self {
            client,
            mode: mode.into(),
        }
    }
}

#[async_trait]
impl GoalParser for GeminiGoalParser {
    async fn parse(&self, text: &str, user: &UserProfile) -> Result<Constraints, PlanError> {
        // The model's prompt sees the profile plus the run mode, matching
        // what the explainer's report context carries.
        let mut payload = serde_json::to_value(user)
            .map_err(|e| PlanError::Upstream(format!("failed to encode user profile: {e}")))?;
        payload["mode"] = Value::String(self.mode.clone());

        let data = self.client.parse_constraints(text, &payload).await?;

        let risk_tolerance = data["risk_tolerance"]
            .as_str()
            .map(str::to_string)
            .or_else(|| {
                if user.risk_tolerance.is_empty() {
                    None
                } else {
                    Some(user.risk_tolerance.clone())
                }
            })
            .unwrap_or_else(|| "medium".to_string());

        Ok(Constraints {
            min_emergency_fund_months: uint_or(&data["min_emergency_fund_months"], 3),
            focus_debt_reduction: data["focus_debt_reduction"].as_bool().unwrap_or(false),
            risk_tolerance,
            priority_order: string_list(&data["priority_order"]),
            time_horizon_months: uint_or(&data["time_horizon_months"], 12),
            must_avoid: string_list(&data["must_avoid"]),
            conflicts: string_list(&data["conflicts"]),
        })
    }
}

/// Non-negative integer from a JSON value, with a default for anything
/// missing, mistyped, or negative.
fn uint_or(value: &Value, default: u32) -> u32 {
    value
        .as_i64()
        .filter(|v| *v >= 0)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
