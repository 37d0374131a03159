// Keyword-rule goal parser
//
// Substring matching over the lower-cased goals text. High-risk keywords
// are checked after low-risk ones, so text containing both ends up "high".

use async_trait::async_trait;

use crate::backends::GoalParser;
use crate::error::PlanError;
use crate::model::{Constraints, UserProfile};

const DEBT_KEYWORDS: &[&str] = &["debt", "loan", "mortgage", "credit card"];
const LOW_RISK_KEYWORDS: &[&str] = &["low volatility", "conservative", "low risk"];
const HIGH_RISK_KEYWORDS: &[&str] = &["high return", "aggressive", "high risk"];

pub struct RuleGoalParser;

#[async_trait]
impl GoalParser for RuleGoalParser {
    async fn parse(&self, text: &str, user: &UserProfile) -> Result<Constraints, PlanError> {
        let lowered = text.to_lowercase();
        let focus_debt = DEBT_KEYWORDS.iter().any(|k| lowered.contains(k));

        let mut risk = user.risk_tolerance.clone();
        if LOW_RISK_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            risk = "low".to_string();
        }
        if HIGH_RISK_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            risk = "high".to_string();
        }

        Ok(Constraints {
            min_emergency_fund_months: 3,
            focus_debt_reduction: focus_debt,
            risk_tolerance: risk,
            priority_order: vec![
                "emergency_fund".to_string(),
                "debt".to_string(),
                "invest".to_string(),
            ],
            time_horizon_months: 12,
            must_avoid: vec![],
            conflicts: vec![],
        })
    }
}
