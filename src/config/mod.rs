// Configuration
// Resolved from environment variables with tolerant parsing: a malformed
// value logs a warning and falls back to the default rather than failing
// startup.

use std::env;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// True when a Gemini API key is present; gates agent mode.
    pub agent_enabled: bool,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub llm_timeout_seconds: u64,
    pub llm_temperature: f32,

    // Goal-text validation knobs (caller-side, see validate module)
    pub goals_min_chars: usize,
    pub goals_max_chars: usize,
    pub goals_max_lines: usize,
    pub goals_block_urls: bool,
    pub goals_block_emails: bool,
    pub goals_block_phones: bool,
    pub goals_block_markdown: bool,
    pub goals_block_guarantees: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            agent_enabled: false,
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            llm_timeout_seconds: 20,
            llm_temperature: 0.2,
            goals_min_chars: 20,
            goals_max_chars: 400,
            goals_max_lines: 5,
            goals_block_urls: true,
            goals_block_emails: true,
            goals_block_phones: true,
            goals_block_markdown: true,
            goals_block_guarantees: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = env::var("GEMINI_API_KEY")
            .unwrap_or_default()
            .trim()
            .to_string();

        Self {
            agent_enabled: !api_key.is_empty(),
            gemini_api_key: api_key,
            gemini_model: env::var("GEMINI_MODEL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.gemini_model),
            llm_timeout_seconds: parse_env("LLM_TIMEOUT_SECONDS", defaults.llm_timeout_seconds),
            llm_temperature: parse_env("LLM_TEMPERATURE", defaults.llm_temperature),
            goals_min_chars: parse_env("GOALS_MIN_CHARS", defaults.goals_min_chars),
            goals_max_chars: parse_env("GOALS_MAX_CHARS", defaults.goals_max_chars),
            goals_max_lines: parse_env("GOALS_MAX_LINES", defaults.goals_max_lines),
            goals_block_urls: parse_bool_env("GOALS_BLOCK_URLS", defaults.goals_block_urls),
            goals_block_emails: parse_bool_env("GOALS_BLOCK_EMAILS", defaults.goals_block_emails),
            goals_block_phones: parse_bool_env("GOALS_BLOCK_PHONES", defaults.goals_block_phones),
            goals_block_markdown: parse_bool_env(
                "GOALS_BLOCK_MARKDOWN",
                defaults.goals_block_markdown,
            ),
            goals_block_guarantees: parse_bool_env(
                "GOALS_BLOCK_GUARANTEES",
                defaults.goals_block_guarantees,
            ),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Invalid value for {}: {:?}, using default", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_bool_env(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                tracing::warn!("Invalid value for {}: {:?}, using default", name, other);
                default
            }
        },
        Err(_) => default,
    }
}
