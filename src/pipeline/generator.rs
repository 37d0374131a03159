// Plan generator
//
// Produces exactly three named candidate plans from fixed percentage
// splits of disposable income. Percentages truncate to whole currency
// units; zero-amount actions are dropped.

use super::{disposable_income, emergency_gap, DEBT_PAYMENT, EMERGENCY_FUND, INVEST};
use crate::model::{AccountSnapshot, Constraints, Plan, PlanAction, UserProfile};

pub fn generate_plans(
    user: &UserProfile,
    accounts: &AccountSnapshot,
    constraints: &Constraints,
) -> Vec<Plan> {
    let disposable = disposable_income(user);
    let gap = emergency_gap(user, accounts, constraints);
    let pct = |p: i64| disposable * p / 100;

    let plan = |name: &str, actions: Vec<PlanAction>| Plan {
        name: name.to_string(),
        score: 0,
        actions: actions.into_iter().filter(|a| a.amount > 0).collect(),
    };

    vec![
        plan(
            "Debt focus",
            vec![
                PlanAction::new(EMERGENCY_FUND, gap.min(pct(20)), false),
                PlanAction::new(DEBT_PAYMENT, pct(50), true),
                PlanAction::new(INVEST, pct(30), true),
            ],
        ),
        plan(
            "Balanced",
            vec![
                PlanAction::new(EMERGENCY_FUND, gap.min(pct(30)), false),
                PlanAction::new(DEBT_PAYMENT, pct(35), true),
                PlanAction::new(INVEST, pct(35), true),
            ],
        ),
        plan(
            "Growth focus",
            vec![
                PlanAction::new(EMERGENCY_FUND, gap.min(pct(15)), false),
                PlanAction::new(INVEST, pct(60), true),
                PlanAction::new(DEBT_PAYMENT, pct(25), true),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn test_always_three_plans_with_zero_scores() {
        let plans = generate_plans(
            &user(3000, 2000),
            &accounts(500),
            &constraints(3, false, "medium"),
        );
        assert_eq!(plans.len(), 3);
        assert!(plans.iter().all(|p| p.score == 0));
        assert_eq!(
            plans.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            ["Debt focus", "Balanced", "Growth focus"]
        );
    }

    #[test]
    fn test_debt_focus_split() {
        // disposable=1000, target=6000, gap=5500 -> emergency capped at 200
        let plans = generate_plans(
            &user(3000, 2000),
            &accounts(500),
            &constraints(3, false, "medium"),
        );
        let debt_focus = &plans[0];
        assert_eq!(debt_focus.action(EMERGENCY_FUND).unwrap().amount, 200);
        assert_eq!(debt_focus.action(DEBT_PAYMENT).unwrap().amount, 500);
        assert_eq!(debt_focus.action(INVEST).unwrap().amount, 300);
        assert!(debt_focus.action(DEBT_PAYMENT).unwrap().requires_human_approval);
        assert!(!debt_focus.action(EMERGENCY_FUND).unwrap().requires_human_approval);
    }

    #[test]
    fn test_totals_equal_disposable_when_gap_exceeds_caps() {
        // Splits are 20/50/30, 30/35/35, 15/60/25 -- each sums to 100%.
        let plans = generate_plans(
            &user(3000, 2000),
            &accounts(0),
            &constraints(3, false, "medium"),
        );
        for plan in &plans {
            assert_eq!(plan.total_allocation(), 1000, "{}", plan.name);
        }
    }

    #[test]
    fn test_zero_amount_actions_filtered() {
        // Cash already covers the target: emergency amount is 0 everywhere.
        let plans = generate_plans(
            &user(3000, 2000),
            &accounts(10_000),
            &constraints(3, false, "medium"),
        );
        for plan in &plans {
            assert!(plan.action(EMERGENCY_FUND).is_none(), "{}", plan.name);
            assert!(plan.actions.iter().all(|a| a.amount > 0));
        }
    }

    #[test]
    fn test_no_disposable_income_yields_empty_plans() {
        let plans = generate_plans(
            &user(2000, 2500),
            &accounts(0),
            &constraints(3, false, "medium"),
        );
        assert_eq!(plans.len(), 3);
        assert!(plans.iter().all(|p| p.actions.is_empty()));
    }

    #[test]
    fn test_growth_focus_lists_invest_before_debt() {
        let plans = generate_plans(
            &user(3000, 2000),
            &accounts(0),
            &constraints(3, false, "medium"),
        );
        let growth = &plans[2];
        assert_eq!(growth.actions[1].kind, INVEST);
        assert_eq!(growth.actions[2].kind, DEBT_PAYMENT);
        assert_eq!(growth.actions[1].amount, 600);
        assert_eq!(growth.actions[2].amount, 250);
    }
}
