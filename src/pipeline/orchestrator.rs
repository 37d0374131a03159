// Pipeline orchestrator
//
// Sequences parse -> generate -> score -> guard -> explain for one run.
// Every stage hands new values to the next; errors from the backends
// propagate to the caller unchanged.

use std::collections::HashMap;

use super::{apply_guardrails, generate_plans, score_plans};
use crate::backends::{build_backends, Mode};
use crate::config::AppConfig;
use crate::error::PlanError;
use crate::model::{AccountSnapshot, PipelineOutcome, ReportContext, UserProfile};

pub struct Orchestrator {
    config: AppConfig,
}

impl Orchestrator {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(
        &self,
        mode: Mode,
        user: &UserProfile,
        accounts: &AccountSnapshot,
        goals_text: &str,
    ) -> Result<PipelineOutcome, PlanError> {
        let (parser, explainer) = build_backends(mode, &self.config)?;

        let constraints = parser.parse(goals_text, user).await?;
        tracing::debug!(
            user = %user.id,
            %mode,
            focus_debt = constraints.focus_debt_reduction,
            risk = %constraints.risk_tolerance,
            "Parsed goal constraints"
        );

        let plans = generate_plans(user, accounts, &constraints);
        let scored = score_plans(&plans, &constraints);
        let guarded = apply_guardrails(&scored, user, accounts, &constraints);

        let context = ReportContext {
            user: user.clone(),
            mode: mode.to_string(),
            goals_text: goals_text.to_string(),
        };
        let markdown = explainer.explain(&guarded, &context, &constraints).await?;

        let mut meta = HashMap::new();
        meta.insert("mode".to_string(), mode.to_string());

        Ok(PipelineOutcome {
            constraints,
            plans: guarded,
            markdown,
            meta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{accounts, user};
    use super::*;

    #[tokio::test]
    async fn test_rules_mode_run() {
        let orchestrator = Orchestrator::new(AppConfig::default());
        let result = orchestrator
            .run(
                Mode::Rules,
                &user(1000, 750),
                &accounts(200),
                "Pay down debt and build emergency fund.",
            )
            .await
            .unwrap();

        assert!(result.constraints.focus_debt_reduction);
        assert_eq!(result.plans.len(), 3);
        assert!(result.plans.iter().all(|p| !p.actions.is_empty()));
        assert!(result.markdown.contains("### Plan 1"));
        assert_eq!(result.meta.get("mode").map(String::as_str), Some("rules"));
    }

    #[tokio::test]
    async fn test_agent_mode_requires_key() {
        let orchestrator = Orchestrator::new(AppConfig::default());
        let err = orchestrator
            .run(
                Mode::Agent,
                &user(1000, 750),
                &accounts(200),
                "Pay down debt and build emergency fund.",
            )
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Configuration(_)));
    }
}
