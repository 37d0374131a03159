// Plan pipeline: generate -> score -> guard -> explain
//
// The three numeric stages are pure functions over owned values; only the
// orchestrator touches the pluggable backends.

mod generator;
mod guardrail;
mod orchestrator;
mod scorer;

pub use generator::generate_plans;
pub use guardrail::apply_guardrails;
pub use orchestrator::Orchestrator;
pub use scorer::score_plans;

use crate::model::{AccountSnapshot, Constraints, UserProfile};

pub const EMERGENCY_FUND: &str = "Emergency fund";
pub const DEBT_PAYMENT: &str = "Debt payment";
pub const INVEST: &str = "Invest";

/// Monthly disposable income, floored at 0. Negative income or expenses
/// are not validated here; the arithmetic stays defined.
pub fn disposable_income(user: &UserProfile) -> i64 {
    (user.income_monthly - user.expenses_monthly).max(0)
}

/// Shortfall between current cash and the emergency target
/// (`expenses_monthly * min_emergency_fund_months`), floored at 0.
pub fn emergency_gap(
    user: &UserProfile,
    accounts: &AccountSnapshot,
    constraints: &Constraints,
) -> i64 {
    let target = user.expenses_monthly * i64::from(constraints.min_emergency_fund_months);
    (target - accounts.cash).max(0)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_disposable_income_floors_at_zero() {
        assert_eq!(disposable_income(&user(3000, 2000)), 1000);
        assert_eq!(disposable_income(&user(2000, 2500)), 0);
    }

    #[test]
    fn test_emergency_gap() {
        let c = constraints(3, false, "medium");
        assert_eq!(emergency_gap(&user(3000, 2000), &accounts(500), &c), 5500);
        assert_eq!(emergency_gap(&user(3000, 2000), &accounts(9000), &c), 0);
    }

    #[test]
    fn test_emergency_gap_zero_months() {
        let c = constraints(0, false, "medium");
        assert_eq!(emergency_gap(&user(3000, 2000), &accounts(0), &c), 0);
    }
}
