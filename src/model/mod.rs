// Shared value types passed between pipeline stages
//
// Every stage takes values in and returns new values out; nothing here is
// mutated in place once a stage has produced it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Planning intent extracted from free-text goals.
///
/// Created once per pipeline run by a goal parser and immutable afterwards.
/// `priority_order`, `time_horizon_months`, `must_avoid`, and `conflicts`
/// are advisory — accepted and carried through, but not enforced by the
/// generator, scorer, or guardrails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraints {
    pub min_emergency_fund_months: u32,
    pub focus_debt_reduction: bool,
    /// Free string; only "low", "medium", and "high" are meaningful downstream.
    pub risk_tolerance: String,
    pub priority_order: Vec<String>,
    pub time_horizon_months: u32,
    pub must_avoid: Vec<String>,
    /// Contradictions detected in the input, if any.
    pub conflicts: Vec<String>,
}

/// One line item within a candidate plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAction {
    /// Action kind: "Emergency fund", "Debt payment", or "Invest".
    #[serde(rename = "type")]
    pub kind: String,
    /// Monthly amount in whole currency units, >= 0 by construction.
    pub amount: i64,
    #[serde(default)]
    pub requires_human_approval: bool,
}

impl PlanAction {
    pub fn new(kind: impl Into<String>, amount: i64, requires_human_approval: bool) -> Self {
        Self {
            kind: kind.into(),
            amount,
            requires_human_approval,
        }
    }
}

/// A named candidate allocation.
///
/// The generator emits plans with score 0; the scorer and guardrails each
/// replace plans with new values rather than mutating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub score: i64,
    pub actions: Vec<PlanAction>,
}

impl Plan {
    /// Sum of all action amounts.
    pub fn total_allocation(&self) -> i64 {
        self.actions.iter().map(|a| a.amount).sum()
    }

    /// First action of the given kind, if present.
    pub fn action(&self, kind: &str) -> Option<&PlanAction> {
        self.actions.iter().find(|a| a.kind == kind)
    }
}

/// Full pipeline output bundle.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub constraints: Constraints,
    /// Final plans, ordered, guardrail-applied.
    pub plans: Vec<Plan>,
    /// Narrative report text from the explainer.
    pub markdown: String,
    pub meta: HashMap<String, String>,
}

/// User profile record, produced externally (sample data or a real store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub age: u32,
    pub risk_tolerance: String,
    pub income_monthly: i64,
    pub expenses_monthly: i64,
    pub dependents: u32,
    pub region: String,
}

/// Account balances for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub user_id: String,
    pub cash: i64,
    pub debts: Vec<DebtRecord>,
    pub investments: Vec<InvestmentRecord>,
}

/// A single debt position. APR and minimum payment are display-only for
/// the deterministic pipeline; only balances feed plan math.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: i64,
    pub apr: f64,
    pub min_payment: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: i64,
}

/// Saved free-text goal for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRecord {
    pub user_id: String,
    pub goals_text: String,
}

/// Context handed to an explainer alongside the plans: the user profile
/// plus run metadata (selected mode and the raw goals text).
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub user: UserProfile,
    pub mode: String,
    pub goals_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_total_allocation() {
        let plan = Plan {
            name: "Balanced".to_string(),
            score: 0,
            actions: vec![
                PlanAction::new("Emergency fund", 200, false),
                PlanAction::new("Debt payment", 350, true),
                PlanAction::new("Invest", 350, true),
            ],
        };
        assert_eq!(plan.total_allocation(), 900);
    }

    #[test]
    fn test_plan_action_lookup() {
        let plan = Plan {
            name: "Debt focus".to_string(),
            score: 0,
            actions: vec![PlanAction::new("Debt payment", 500, true)],
        };
        assert_eq!(plan.action("Debt payment").map(|a| a.amount), Some(500));
        assert!(plan.action("Invest").is_none());
    }

    #[test]
    fn test_plan_action_serde_uses_type_key() {
        let action = PlanAction::new("Invest", 100, true);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "Invest");
        assert_eq!(json["amount"], 100);
    }
}
