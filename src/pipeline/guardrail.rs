// Guardrail enforcer
//
// Two passes per plan: scale action amounts down to disposable income when
// overcommitted, then insert an emergency-fund action at the front when the
// safety-net gap is still open. The insertion happens after scaling and is
// deliberately not re-checked against the affordability cap (known quirk,
// see the regression test below).

use super::{disposable_income, emergency_gap, EMERGENCY_FUND};
use crate::model::{AccountSnapshot, Constraints, Plan, PlanAction, UserProfile};

pub fn apply_guardrails(
    plans: &[Plan],
    user: &UserProfile,
    accounts: &AccountSnapshot,
    constraints: &Constraints,
) -> Vec<Plan> {
    let disposable = disposable_income(user);
    let gap = emergency_gap(user, accounts, constraints);

    plans
        .iter()
        .map(|plan| {
            let total = plan.total_allocation();

            // Scale only when genuinely overcommitted. When disposable is 0
            // and total > 0 the guard still fires and scales everything to 0;
            // amounts pass through untouched only when total <= disposable.
            let mut actions: Vec<PlanAction> = if total > disposable && total > 0 {
                let scale = disposable as f64 / total as f64;
                plan.actions
                    .iter()
                    .map(|a| {
                        PlanAction::new(
                            a.kind.clone(),
                            (a.amount as f64 * scale).round() as i64,
                            a.requires_human_approval,
                        )
                    })
                    .collect()
            } else {
                plan.actions.clone()
            };

            if gap > 0 && !actions.iter().any(|a| a.kind == EMERGENCY_FUND) {
                actions.insert(0, PlanAction::new(EMERGENCY_FUND, gap.min(disposable), false));
            }

            Plan {
                name: plan.name.clone(),
                score: plan.score,
                actions,
            }
        })
        .collect()
}
