// Gemini explainer
//
// Packs the full report input (context, constraints, plans) into one JSON
// document and asks the model for a four-section Markdown report.

use async_trait::async_trait;
use serde_json::json;

use super::client::GeminiClient;
use crate::backends::PlanExplainer;
use crate::error::PlanError;
use crate::model::{Constraints, Plan, ReportContext};

pub struct GeminiPlanExplainer {
    client: GeminiClient,
}

impl GeminiPlanExplainer {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlanExplainer for GeminiPlanExplainer {
    async fn explain(
        &self,
        plans: &[Plan],
        context: &ReportContext,
        constraints: &Constraints,
    ) -> Result<String, PlanError> {
        let report_input = json!({
            "user": context,
            "constraints": constraints,
            "plans": plans,
        });
        self.client.explain_report(&report_input).await
    }
}
