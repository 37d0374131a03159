// Template explainer
//
// Emits one block per plan: heading, score, action list, and a fixed
// rationale bullet pair. The output phrasing is co-specified with the
// report block parser; change them together.

use async_trait::async_trait;
use std::fmt::Write;

use crate::backends::PlanExplainer;
use crate::error::PlanError;
use crate::model::{Constraints, Plan, ReportContext};

pub struct RulePlanExplainer;

#[async_trait]
impl PlanExplainer for RulePlanExplainer {
    async fn explain(
        &self,
        plans: &[Plan],
        _context: &ReportContext,
        constraints: &Constraints,
    ) -> Result<String, PlanError> {
        let mut blocks = Vec::with_capacity(plans.len());
        for (i, plan) in plans.iter().enumerate() {
            let mut block = String::new();
            writeln!(block, "### Plan {} ({})", i + 1, plan.name).ok();
            writeln!(block, "**Score:** {}", plan.score).ok();
            writeln!(block, "**This month:**").ok();
            for action in &plan.actions {
                let suffix = if action.requires_human_approval {
                    " (approval required)"
                } else {
                    ""
                };
                writeln!(block, "- {}: {}{}", action.kind, action.amount, suffix).ok();
            }
            writeln!(block, "**Why:**").ok();
            let priority = if constraints.focus_debt_reduction {
                "debt reduction"
            } else {
                "balanced"
            };
            writeln!(block, "- Priority: {}", priority).ok();
            writeln!(block, "- Risk tolerance: {}", constraints.risk_tolerance).ok();
            blocks.push(block);
        }
        Ok(blocks.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlanAction, UserProfile};

    fn context() -> ReportContext {
        ReportContext {
            user: UserProfile {
                id: "u_001".to_string(),
                age: 41,
                risk_tolerance: "medium".to_string(),
                income_monthly: 3000,
                expenses_monthly: 2000,
                dependents: 1,
                region: "west".to_string(),
            },
            mode: "rules".to_string(),
            goals_text: "Save more".to_string(),
        }
    }

    fn constraints(focus_debt: bool, risk: &str) -> Constraints {
        Constraints {
            min_emergency_fund_months: 3,
            focus_debt_reduction: focus_debt,
            risk_tolerance: risk.to_string(),
            priority_order: vec![],
            time_horizon_months: 12,
            must_avoid: vec![],
            conflicts: vec![],
        }
    }

    #[tokio::test]
    async fn test_explain_single_plan() {
        let plans = vec![Plan {
            name: "Test".to_string(),
            score: 80,
            actions: vec![PlanAction::new("Invest", 100, true)],
        }];
        let md = RulePlanExplainer
            .explain(&plans, &context(), &constraints(false, "medium"))
            .await
            .unwrap();
        assert!(md.contains("### Plan 1 (Test)"));
        assert!(md.contains("**Score:** 80"));
        assert!(md.contains("- Invest: 100 (approval required)"));
        assert!(md.contains("- Priority: balanced"));
        assert!(md.contains("- Risk tolerance: medium"));
    }

    #[tokio::test]
    async fn test_explain_debt_priority_framing() {
        let plans = vec![Plan {
            name: "Debt focus".to_string(),
            score: 75,
            actions: vec![PlanAction::new("Debt payment", 500, true)],
        }];
        let md = RulePlanExplainer
            .explain(&plans, &context(), &constraints(true, "low"))
            .await
            .unwrap();
        assert!(md.contains("- Priority: debt reduction"));
        assert!(md.contains("- Debt payment: 500 (approval required)"));
    }

    #[tokio::test]
    async fn test_explain_numbers_plans_in_order() {
        let plans = vec![
            Plan {
                name: "A".to_string(),
                score: 60,
                actions: vec![PlanAction::new("Emergency fund", 50, false)],
            },
            Plan {
                name: "B".to_string(),
                score: 65,
                actions: vec![PlanAction::new("Invest", 75, true)],
            },
        ];
        let md = RulePlanExplainer
            .explain(&plans, &context(), &constraints(false, "high"))
            .await
            .unwrap();
        let first = md.find("### Plan 1 (A)").unwrap();
        let second = md.find("### Plan 2 (B)").unwrap();
        assert!(first < second);
        assert!(md.contains("- Emergency fund: 50\n"));
    }
}
