//! Panel timing configuration parsed from environment variables.
//!
//! Every simulated collaborator call waits out one of these delays before
//! its result is delivered. Absent variables take the defaults below;
//! present but unparsable values are an error.

use std::time::Duration;

use crate::job::{Delay, MIN_PROGRESS_STEP};

pub const DEFAULT_TEST_GEN_DELAY_MS: u64 = 2000;
pub const DEFAULT_CHAT_DELAY_MS: u64 = 1500;
pub const DEFAULT_CHAT_JITTER_MS: u64 = 1000;
pub const DEFAULT_UPLOAD_TICK_MS: u64 = 100;
pub const DEFAULT_UPLOAD_MAX_STEP: f64 = 15.0;
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;
pub const DEFAULT_VIDEO_SEARCH_DELAY_MS: u64 = 1500;
pub const DEFAULT_JOB_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl crate::error::ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        "E_CONFIG_PARSE"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdulinkConfig {
    pub test_gen_delay: Duration,
    pub chat_delay: Duration,
    pub chat_jitter: Duration,
    pub upload_tick: Duration,
    /// Largest progress increment per upload tick, in percent.
    pub upload_max_step: f64,
    pub analysis_delay: Duration,
    pub video_search_delay: Duration,
    pub job_timeout: Duration,
}

impl Default for EdulinkConfig {
    fn default() -> Self {
        Self {
            test_gen_delay: Duration::from_millis(DEFAULT_TEST_GEN_DELAY_MS),
            chat_delay: Duration::from_millis(DEFAULT_CHAT_DELAY_MS),
            chat_jitter: Duration::from_millis(DEFAULT_CHAT_JITTER_MS),
            upload_tick: Duration::from_millis(DEFAULT_UPLOAD_TICK_MS),
            upload_max_step: DEFAULT_UPLOAD_MAX_STEP,
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            video_search_delay: Duration::from_millis(DEFAULT_VIDEO_SEARCH_DELAY_MS),
            job_timeout: Duration::from_millis(DEFAULT_JOB_TIMEOUT_MS),
        }
    }
}

impl EdulinkConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional (milliseconds unless noted):
    /// - `EDULINK_TEST_GEN_DELAY_MS`: default 2000
    /// - `EDULINK_CHAT_DELAY_MS`: default 1500
    /// - `EDULINK_CHAT_JITTER_MS`: default 1000
    /// - `EDULINK_UPLOAD_TICK_MS`: default 100
    /// - `EDULINK_UPLOAD_MAX_STEP`: percent per tick, default 15, at least 1
    /// - `EDULINK_ANALYSIS_DELAY_MS`: default 3000
    /// - `EDULINK_VIDEO_SEARCH_DELAY_MS`: default 1500
    /// - `EDULINK_JOB_TIMEOUT_MS`: default 30000
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set but does not parse,
    /// or if the upload step is below `MIN_PROGRESS_STEP`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let upload_max_step = env_parse("EDULINK_UPLOAD_MAX_STEP", DEFAULT_UPLOAD_MAX_STEP)?;
        if !upload_max_step.is_finite() || upload_max_step < MIN_PROGRESS_STEP {
            return Err(ConfigError::Invalid { var: "EDULINK_UPLOAD_MAX_STEP", value: upload_max_step.to_string() });
        }

        Ok(Self {
            test_gen_delay: env_millis("EDULINK_TEST_GEN_DELAY_MS", DEFAULT_TEST_GEN_DELAY_MS)?,
            chat_delay: env_millis("EDULINK_CHAT_DELAY_MS", DEFAULT_CHAT_DELAY_MS)?,
            chat_jitter: env_millis("EDULINK_CHAT_JITTER_MS", DEFAULT_CHAT_JITTER_MS)?,
            upload_tick: env_millis("EDULINK_UPLOAD_TICK_MS", DEFAULT_UPLOAD_TICK_MS)?,
            upload_max_step,
            analysis_delay: env_millis("EDULINK_ANALYSIS_DELAY_MS", DEFAULT_ANALYSIS_DELAY_MS)?,
            video_search_delay: env_millis("EDULINK_VIDEO_SEARCH_DELAY_MS", DEFAULT_VIDEO_SEARCH_DELAY_MS)?,
            job_timeout: env_millis("EDULINK_JOB_TIMEOUT_MS", DEFAULT_JOB_TIMEOUT_MS)?,
        })
    }

    /// Zero-delay config for demos and tests. Upload progress still ticks.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            test_gen_delay: Duration::ZERO,
            chat_delay: Duration::ZERO,
            chat_jitter: Duration::ZERO,
            upload_tick: Duration::ZERO,
            upload_max_step: 50.0,
            analysis_delay: Duration::ZERO,
            video_search_delay: Duration::ZERO,
            job_timeout: Duration::from_millis(DEFAULT_JOB_TIMEOUT_MS),
        }
    }

    #[must_use]
    pub fn test_gen(&self) -> Delay {
        Delay::Fixed(self.test_gen_delay)
    }

    #[must_use]
    pub fn chat_reply(&self) -> Delay {
        Delay::Jittered { base: self.chat_delay, spread: self.chat_jitter }
    }

    #[must_use]
    pub fn pdf_upload(&self) -> Delay {
        Delay::Progress { tick: self.upload_tick, max_step: self.upload_max_step, settle: self.analysis_delay }
    }

    #[must_use]
    pub fn video_search(&self) -> Delay {
        Delay::Fixed(self.video_search_delay)
    }
}

fn env_parse<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var: key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn env_millis(key: &'static str, default: u64) -> Result<Duration, ConfigError> {
    env_parse(key, default).map(Duration::from_millis)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
