//! Runtime configuration.
//!
//! Configuration is resolved once at process start-up and then passed into
//! adapters and services. Nothing below the binary reads environment
//! variables while handling a request.

use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Gemini API key. Only commands that call
/// the model need it.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_VAR: &str = "CAREBOARD_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "CAREBOARD_API_BASE_URL";
/// Environment variable overriding the per-attempt HTTP timeout, in seconds.
pub const TIMEOUT_VAR: &str = "CAREBOARD_REQUEST_TIMEOUT_SECS";
/// Environment variable overriding the transport retry budget.
pub const MAX_RETRIES_VAR: &str = "CAREBOARD_MAX_RETRIES";
/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_RETRIES: u32 = 2;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);

/// Errors returned while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable holds a value that does not parse.
    #[error("{name} has invalid value '{value}'")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
}

/// Settings for the Gemini transport.
#[derive(Clone, PartialEq, Eq)]
pub struct ModelSettings {
    /// API key sent as `x-goog-api-key`; empty when not configured.
    pub api_key: String,
    /// Model name, for example `gemini-1.5-pro`.
    pub model: String,
    /// API base URL without a trailing path.
    pub base_url: String,
    /// HTTP timeout applied to each attempt.
    pub request_timeout: Duration,
    /// Retries after the first attempt for transient failures.
    pub max_retries: u32,
}

impl ModelSettings {
    /// Creates settings with default model, URL, timeout and retries.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Pause before retry number `retry` (1-based): 500 ms, doubling each
    /// time. No pause precedes the first attempt.
    #[must_use]
    pub const fn backoff(retry: u32) -> Duration {
        match retry.checked_sub(1) {
            Some(exponent) => INITIAL_BACKOFF.saturating_mul(2u32.saturating_pow(exponent)),
            None => Duration::ZERO,
        }
    }

    /// Longest a call can take when every attempt times out: each attempt's
    /// HTTP timeout plus every backoff pause between them.
    #[must_use]
    pub fn worst_case_call(&self) -> Duration {
        (0..=self.max_retries).fold(Duration::ZERO, |total, attempt| {
            total
                .saturating_add(self.request_timeout)
                .saturating_add(Self::backoff(attempt))
        })
    }
}

impl std::fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// Settings for the treatment pipeline itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Upper bound on each model call, retries included.
    pub call_timeout: Duration,
}

impl PipelineSettings {
    /// Budgets each call for the model's full retry schedule.
    #[must_use]
    pub fn for_model(model: &ModelSettings) -> Self {
        Self {
            call_timeout: model.worst_case_call(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::for_model(&ModelSettings::new(String::new()))
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Model transport settings.
    pub model: ModelSettings,
    /// Pipeline settings.
    pub pipeline: PipelineSettings,
    /// `PostgreSQL` connection URL.
    pub database_url: String,
}

impl AppConfig {
    /// Loads `.env` if present, then resolves configuration from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            tracing::warn!(error = %err, "failed to load .env file");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        // The key is checked when the model client is built, so commands that
        // never call the model run without one.
        let api_key = read(API_KEY_VAR).unwrap_or_default();
        let database_url = read(DATABASE_URL_VAR).ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let mut model = ModelSettings::new(api_key);
        if let Some(name) = read(MODEL_VAR) {
            model.model = name;
        }
        if let Some(url) = read(BASE_URL_VAR) {
            model.base_url = url.trim_end_matches('/').to_owned();
        }
        if let Some(raw) = read(MAX_RETRIES_VAR) {
            model.max_retries = parse_number(MAX_RETRIES_VAR, &raw)?;
        }

        if let Some(raw) = read(TIMEOUT_VAR) {
            let secs: u64 = parse_number(TIMEOUT_VAR, &raw)?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    name: TIMEOUT_VAR,
                    value: raw,
                });
            }
            model.request_timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            pipeline: PipelineSettings::for_model(&model),
            model,
            database_url,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_owned(),
    })
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[rstest]
    fn defaults_apply_when_only_required_values_are_set() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (DATABASE_URL_VAR, "postgres://localhost/careboard"),
        ]))
        .expect("config should resolve");

        assert_eq!(config.model.model, "gemini-1.5-pro");
        assert_eq!(config.model.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model.max_retries, 2);
        assert_eq!(config.model.request_timeout, Duration::from_secs(120));
        // Three 120 s attempts plus the 500 ms and 1 s pauses.
        assert_eq!(config.pipeline.call_timeout, Duration::from_millis(361_500));
        assert_eq!(config.pipeline, PipelineSettings::default());
    }

    #[rstest]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (DATABASE_URL_VAR, "postgres://localhost/careboard"),
            (MODEL_VAR, "gemini-1.5-flash"),
            (BASE_URL_VAR, "http://localhost:8080/"),
            (TIMEOUT_VAR, "30"),
            (MAX_RETRIES_VAR, "0"),
        ]))
        .expect("config should resolve");

        assert_eq!(config.model.model, "gemini-1.5-flash");
        assert_eq!(config.model.base_url, "http://localhost:8080");
        assert_eq!(config.model.request_timeout, Duration::from_secs(30));
        assert_eq!(config.model.max_retries, 0);
        assert_eq!(config.pipeline.call_timeout, Duration::from_secs(30));
    }

    #[rstest]
    fn call_budget_leaves_room_for_every_retry() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (DATABASE_URL_VAR, "postgres://x"),
            (TIMEOUT_VAR, "10"),
            (MAX_RETRIES_VAR, "3"),
        ]))
        .expect("config should resolve");

        assert_eq!(config.model.request_timeout, Duration::from_secs(10));
        // Four 10 s attempts plus pauses of 0.5, 1 and 2 s.
        assert_eq!(config.pipeline.call_timeout, Duration::from_millis(43_500));
        assert!(config.pipeline.call_timeout > config.model.request_timeout * 4);
    }

    #[rstest]
    #[case(0, Duration::ZERO)]
    #[case(1, Duration::from_millis(500))]
    #[case(2, Duration::from_secs(1))]
    #[case(3, Duration::from_secs(2))]
    fn backoff_doubles_from_half_a_second(#[case] retry: u32, #[case] expected: Duration) {
        assert_eq!(ModelSettings::backoff(retry), expected);
    }

    #[rstest]
    #[case(&[(API_KEY_VAR, "secret")])]
    #[case(&[(API_KEY_VAR, "secret"), (DATABASE_URL_VAR, "   ")])]
    fn missing_database_url_is_reported(#[case] pairs: &[(&str, &str)]) {
        assert_eq!(
            AppConfig::from_lookup(lookup_from(pairs)),
            Err(ConfigError::Missing(DATABASE_URL_VAR))
        );
    }

    #[rstest]
    fn api_key_may_be_absent() {
        let config = AppConfig::from_lookup(lookup_from(&[(DATABASE_URL_VAR, "postgres://x")]))
            .expect("config should resolve");

        assert!(config.model.api_key.is_empty());
    }

    #[rstest]
    #[case(TIMEOUT_VAR, "soon")]
    #[case(TIMEOUT_VAR, "0")]
    #[case(MAX_RETRIES_VAR, "-1")]
    fn invalid_numbers_are_rejected(#[case] name: &'static str, #[case] value: &str) {
        let result = AppConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (DATABASE_URL_VAR, "postgres://x"),
            (name, value),
        ]));

        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                name,
                value: value.to_owned(),
            })
        );
    }

    #[rstest]
    fn debug_output_redacts_the_api_key() {
        let rendered = format!("{:?}", ModelSettings::new("top-secret"));
        assert!(!rendered.contains("top-secret"));
    }
}
