// Deterministic rule backend: keyword goal parsing and template narration.

mod explainer;
mod goal_parser;

pub use explainer::RulePlanExplainer;
pub use goal_parser::RuleGoalParser;
