// Planwright - financial-planning demo pipeline
//
// Given a user profile, account balances, and free-text goals, produce a
// small set of candidate monthly budget allocation plans, score them,
// apply affordability guardrails, and narrate the result. Goal parsing and
// narration are pluggable: a deterministic keyword-rule backend or a
// Gemini-backed backend behind the same traits.

pub mod backends;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod validate;

pub use config::AppConfig;
pub use error::PlanError;
pub use model::{Constraints, Plan, PlanAction, PipelineOutcome};
pub use pipeline::Orchestrator;
