// Plan scorer
//
// Pure function of actions + constraints: base 60, +15 when a debt-focused
// request is matched by a debt-dominant plan, +/-5 for risk tolerance
// against a positive invest action. priority_order, must_avoid, and
// conflicts are advisory and do not affect scores.

use super::{DEBT_PAYMENT, INVEST};
use crate::model::{Constraints, Plan};

pub fn score_plans(plans: &[Plan], constraints: &Constraints) -> Vec<Plan> {
    plans
        .iter()
        .map(|plan| {
            let mut score = 60;
            let debt = plan.action(DEBT_PAYMENT);
            let invest = plan.action(INVEST);

            if constraints.focus_debt_reduction {
                if let Some(debt) = debt {
                    if invest.map_or(true, |inv| debt.amount > inv.amount) {
                        score += 15;
                    }
                }
            }

            if invest.is_some_and(|inv| inv.amount > 0) {
                match constraints.risk_tolerance.as_str() {
                    "low" => score -= 5,
                    "high" => score += 5,
                    _ => {}
                }
            }

            Plan {
                name: plan.name.clone(),
                score,
                actions: plan.actions.clone(),
            }
        })
        .collect()
}
