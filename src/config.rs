//! Session configuration

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Guesses allowed per word unless configured otherwise
pub const DEFAULT_MAX_GUESSES: u32 = 5;

/// Pause between a finished word and the next one
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;

/// Tunables for one play session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Attempts per word
    #[serde(default = "default_max_guesses")]
    pub max_guesses: u32,

    /// Visual settle delay after a word is won or lost, in milliseconds
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Seed for question shuffling (random if absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_guesses() -> u32 {
    DEFAULT_MAX_GUESSES
}

fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_guesses: default_max_guesses(),
            settle_delay_ms: default_settle_delay_ms(),
            seed: None,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Reject settings a session cannot be played with
    ///
    /// # Errors
    /// Returns [`ContentError::NoGuesses`] when `max_guesses` is zero.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.max_guesses == 0 {
            return Err(ContentError::NoGuesses);
        }
        Ok(())
    }

    /// Override fields that were given explicitly (CLI flags)
    #[must_use]
    pub fn with_overrides(mut self, max_guesses: Option<u32>, seed: Option<u64>) -> Self {
        if let Some(max) = max_guesses {
            self.max_guesses = max.max(1);
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classroom_rules() {
        let config = SessionConfig::default();
        assert_eq!(config.max_guesses, 5);
        assert_eq!(config.settle_delay(), Duration::from_secs(2));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.max_guesses, DEFAULT_MAX_GUESSES);
        assert_eq!(config.settle_delay_ms, DEFAULT_SETTLE_DELAY_MS);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn overrides_apply_only_when_given() {
        let config = SessionConfig::default().with_overrides(None, None);
        assert_eq!(config, SessionConfig::default());

        let config = SessionConfig::default().with_overrides(Some(0), Some(3));
        assert_eq!(config.max_guesses, 1);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn zero_guesses_is_rejected() {
        let config: SessionConfig = serde_json::from_str(r#"{"max_guesses": 0}"#).unwrap();
        assert!(matches!(config.validate(), Err(ContentError::NoGuesses)));
        assert!(config.with_overrides(Some(3), None).validate().is_ok());
        assert!(SessionConfig::default().validate().is_ok());
    }
}
