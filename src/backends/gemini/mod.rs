// Gemini-backed backend: structured constraint extraction and free-form
// report narration over the generateContent API.

pub mod client;
mod explainer;
mod goal_parser;

pub use explainer::GeminiPlanExplainer;
pub use goal_parser::GeminiGoalParser;
