// Pluggable goal-parsing and narration backends
//
// Two implementations satisfy each trait: a deterministic keyword-rule
// backend and a Gemini-backed one. Callers acquire the pair through the
// factory and never distinguish them afterwards.

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::error::PlanError;
use crate::model::{Constraints, Plan, ReportContext, UserProfile};

pub mod gemini;
pub mod rules;

pub use gemini::client::GeminiClient;
pub use gemini::{GeminiGoalParser, GeminiPlanExplainer};
pub use rules::{RuleGoalParser, RulePlanExplainer};

/// Turns free-text goals plus a user profile into planning constraints.
#[async_trait]
pub trait GoalParser: Send + Sync {
    async fn parse(&self, text: &str, user: &UserProfile) -> Result<Constraints, PlanError>;
}

/// Renders scored, guardrail-applied plans into a narrative report.
#[async_trait]
pub trait PlanExplainer: Send + Sync {
    async fn explain(
        &self,
        plans: &[Plan],
        context: &ReportContext,
        constraints: &Constraints,
    ) -> Result<String, PlanError>;
}

/// Backend selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Deterministic keyword rules, no external calls.
    Rules,
    /// Gemini-backed parsing and narration.
    Agent,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Rules => "rules",
            Mode::Agent => "agent",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rules" => Ok(Mode::Rules),
            "agent" => Ok(Mode::Agent),
            other => Err(PlanError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Build the parser/explainer pair for the requested mode.
///
/// Agent mode requires a configured Gemini API key; there is no silent
/// fallback to the rules backend.
pub fn build_backends(
    mode: Mode,
    config: &AppConfig,
) -> Result<(Box<dyn GoalParser>, Box<dyn PlanExplainer>), PlanError> {
    match mode {
        Mode::Rules => Ok((Box::new(RuleGoalParser), Box::new(RulePlanExplainer))),
        Mode::Agent => {
            if !config.agent_enabled {
                return Err(PlanError::Configuration(
                    "Agent mode requires GEMINI_API_KEY".to_string(),
                ));
            }
            let client = GeminiClient::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                config.llm_timeout_seconds,
                config.llm_temperature,
            )?;
            Ok((
                Box::new(GeminiGoalParser::new(client.clone(), mode.to_string())),
                Box::new(GeminiPlanExplainer::new(client)),
            ))
        }
    }
}
