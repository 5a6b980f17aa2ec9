//! Exchange configuration.
//!
//! Defaults can be overridden from the environment:
//! - `ANTHROPIC_MODEL`
//! - `ANTHROPIC_MAX_TOKENS`
//! - `ANTHROPIC_BASE_URL`
//! - `ANTHROPIC_TIMEOUT_SECS`
//!
//! The API key is not part of this struct; see
//! [`AnthropicBuilder`](crate::client::AnthropicBuilder).

use std::time::Duration;

use crate::error::ExchangeError;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeConfig {
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ExchangeConfig {
    /// Defaults overlaid with whatever the process environment sets.
    pub fn from_env() -> Result<Self, ExchangeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExchangeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(model) = lookup("ANTHROPIC_MODEL").filter(|s| !s.trim().is_empty()) {
            config.model = model;
        }
        if let Some(raw) = lookup("ANTHROPIC_MAX_TOKENS") {
            config.max_tokens = parse_positive("ANTHROPIC_MAX_TOKENS", &raw)?;
        }
        if let Some(url) = lookup("ANTHROPIC_BASE_URL").filter(|s| !s.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup("ANTHROPIC_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_positive("ANTHROPIC_TIMEOUT_SECS", &raw)?.into());
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ExchangeError> {
        if self.model.trim().is_empty() {
            return Err(ExchangeError::ConfigurationError(
                "model must be specified".to_string(),
            ));
        }
        if self.max_tokens == 0 {
            return Err(ExchangeError::ConfigurationError(
                "max_tokens must be positive".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ExchangeError::ConfigurationError(
                "timeout must be positive".to_string(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ExchangeError::ConfigurationError(format!(
                "base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u32, ExchangeError> {
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ExchangeError::ConfigurationError(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
