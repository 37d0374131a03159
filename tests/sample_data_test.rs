// Schema and linkage checks for the embedded sample dataset.

use std::collections::HashSet;

use planwright::data::{load_accounts, load_goals, load_users};

const REGIONS: &[&str] = &[
    "central",
    "midwest",
    "northeast",
    "northwest",
    "southeast",
    "southwest",
    "west",
];

#[test]
fn users_schema() {
    let users = load_users().unwrap();
    assert!((6..=10).contains(&users.len()));

    let mut ids = HashSet::new();
    for user in &users {
        assert!(!user.id.trim().is_empty());
        assert!(ids.insert(user.id.clone()), "duplicate id {}", user.id);
        assert!((18..=100).contains(&user.age));
        assert!(["low", "medium", "high"].contains(&user.risk_tolerance.as_str()));
        assert!((0..=50_000).contains(&user.income_monthly));
        assert!((0..=50_000).contains(&user.expenses_monthly));
        assert!(user.dependents <= 10);
        assert!(REGIONS.contains(&user.region.as_str()), "{}", user.region);
    }
}

#[test]
fn accounts_schema_and_linkage() {
    let users = load_users().unwrap();
    let accounts = load_accounts().unwrap();
    let user_ids: HashSet<_> = users.iter().map(|u| u.id.as_str()).collect();
    let account_ids: HashSet<_> = accounts.iter().map(|a| a.user_id.as_str()).collect();

    assert!(user_ids.is_subset(&account_ids));

    let mut has_debt_free_account = false;
    for account in &accounts {
        assert!(user_ids.contains(account.user_id.as_str()));
        assert!(account.cash >= 0);

        if account.debts.is_empty() {
            has_debt_free_account = true;
        }
        for debt in &account.debts {
            assert!(!debt.kind.trim().is_empty());
            assert!(debt.balance >= 0);
            assert!((0.0..=1.0).contains(&debt.apr));
            assert!(debt.min_payment >= 0);
            if debt.balance == 0 {
                assert_eq!(debt.min_payment, 0);
                assert_eq!(debt.apr, 0.0);
            } else {
                assert!(debt.min_payment <= debt.balance);
            }
        }
        for investment in &account.investments {
            assert!(!investment.kind.trim().is_empty());
            assert!(investment.balance >= 0);
        }
    }
    assert!(has_debt_free_account);
}

#[test]
fn goals_schema_and_linkage() {
    let users = load_users().unwrap();
    let goals = load_goals().unwrap();
    let user_ids: HashSet<_> = users.iter().map(|u| u.id.as_str()).collect();
    let goal_ids: HashSet<_> = goals.iter().map(|g| g.user_id.as_str()).collect();

    assert!(goals.len() >= users.len());
    assert!(user_ids.is_subset(&goal_ids));

    for goal in &goals {
        assert!(user_ids.contains(goal.user_id.as_str()));
        assert!(!goal.goals_text.trim().is_empty());
        assert!(goal.goals_text.is_ascii());
    }
}

#[test]
fn edge_case_goal_texts_present() {
    let goals = load_goals().unwrap();
    let all_text = goals
        .iter()
        .map(|g| g.goals_text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    assert!(all_text.contains("debt"));
    assert!(all_text.contains("emergency fund"));
    assert!(all_text.contains("low volatility"));
}
