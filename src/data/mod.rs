// Embedded sample data
//
// Small fixed dataset compiled into the binary so the CLI demo and the
// integration tests need no filesystem setup.

use anyhow::{Context, Result};

use crate::model::{AccountSnapshot, GoalRecord, UserProfile};

const USERS_JSON: &str = include_str!("../../data/mock/users.json");
const ACCOUNTS_JSON: &str = include_str!("../../data/mock/accounts.json");
const GOALS_JSON: &str = include_str!("../../data/mock/goals.json");

pub fn load_users() -> Result<Vec<UserProfile>> {
    serde_json::from_str(USERS_JSON).context("failed to parse embedded users.json")
}

pub fn load_accounts() -> Result<Vec<AccountSnapshot>> {
    serde_json::from_str(ACCOUNTS_JSON).context("failed to parse embedded accounts.json")
}

pub fn load_goals() -> Result<Vec<GoalRecord>> {
    serde_json::from_str(GOALS_JSON).context("failed to parse embedded goals.json")
}

/// The user's account snapshot, if one exists.
pub fn account_for<'a>(
    accounts: &'a [AccountSnapshot],
    user_id: &str,
) -> Option<&'a AccountSnapshot> {
    accounts.iter().find(|a| a.user_id == user_id)
}

/// Saved goal texts for one user, in file order.
pub fn goals_for(goals: &[GoalRecord], user_id: &str) -> Vec<String> {
    goals
        .iter()
        .filter(|g| g.user_id == user_id)
        .map(|g| g.goals_text.clone())
        .collect()
}
