// Goal-text validation
//
// Caller-side checks run before the pipeline is invoked. Returns the full
// list of problems so the caller can show them all at once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::backends::Mode;
use crate::config::AppConfig;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://|www\.").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").unwrap());
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\+?\d[\d\s\-()]{7,}\d\b").unwrap());
static GUARANTEE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(risk-free|guarantee|guaranteed|certain return)\b").unwrap());
static MARKDOWN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[#`]|^\s*[-*]\s").unwrap());

/// Collapse runs of spaces/tabs and excess blank lines.
pub fn normalize_goal_text(text: &str) -> String {
    static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
    static BLANKS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
    let compact = SPACES_RE.replace_all(text.trim(), " ");
    BLANKS_RE.replace_all(&compact, "\n\n").into_owned()
}

/// Validate free-text goals against the configured limits. An empty
/// return means the text is acceptable for the given mode.
pub fn validate_goal_text(text: &str, mode: Mode, config: &AppConfig) -> Vec<String> {
    let normalized = normalize_goal_text(text);
    let mut errors = Vec::new();

    if normalized.chars().count() < config.goals_min_chars {
        errors.push(format!(
            "Goals text must be at least {} characters.",
            config.goals_min_chars
        ));
    }
    if normalized.chars().count() > config.goals_max_chars {
        errors.push(format!(
            "Goals text must be {} characters or fewer.",
            config.goals_max_chars
        ));
    }
    if normalized.matches('\n').count() >= config.goals_max_lines {
        errors.push(format!(
            "Goals text must be {} lines or fewer.",
            config.goals_max_lines
        ));
    }
    if config.goals_block_urls && URL_RE.is_match(&normalized) {
        errors.push("Do not include URLs in goals text.".to_string());
    }
    if config.goals_block_emails && EMAIL_RE.is_match(&normalized) {
        errors.push("Do not include email addresses in goals text.".to_string());
    }
    if config.goals_block_phones && PHONE_RE.is_match(&normalized) {
        errors.push("Do not include phone numbers in goals text.".to_string());
    }
    if config.goals_block_guarantees && GUARANTEE_RE.is_match(&normalized) {
        errors.push(
            "Avoid guarantee-style claims (risk-free, guaranteed, certain return).".to_string(),
        );
    }
    if mode == Mode::Agent && config.goals_block_markdown && MARKDOWN_RE.is_match(&normalized) {
        errors.push("Do not paste markdown syntax into goals text.".to_string());
    }

    errors
}
