// src/config/mod.rs
//! Runtime configuration, read once from the environment at startup.
//!
//! Every required variable is checked before any network call is made, so a
//! misconfigured scheduler job fails immediately instead of after fetching the feed.

pub mod keywords;

use std::fmt;

use lettre::message::Mailbox;
use thiserror::Error;

use crate::filter::DEFAULT_MAX_HITS;
use crate::ingest::providers::google_news::DEFAULT_FEED_URL;
use crate::summarize::groq::{DEFAULT_GROQ_MODEL, DEFAULT_GROQ_URL};

// --- env names ---
pub const ENV_GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_EMAIL_USER: &str = "EMAIL_USER";
pub const ENV_EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const ENV_EMAIL_TO: &str = "EMAIL_TO";

pub const ENV_FEED_URL: &str = "BRIEFING_FEED_URL";
pub const ENV_MAX_HITS: &str = "BRIEFING_MAX_HITS";
pub const ENV_GROQ_MODEL: &str = "GROQ_MODEL";
pub const ENV_GROQ_API_URL: &str = "GROQ_API_URL";
pub const ENV_SMTP_HOST: &str = "SMTP_HOST";
pub const ENV_SMTP_PORT: &str = "SMTP_PORT";

// --- defaults ---
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub url: String,
    pub max_hits: usize,
}

#[derive(Clone)]
pub struct SummarizerConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

// Never print the key, only its length.
impl fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key_len", &self.api_key.len())
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[derive(Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Sender address, also the SMTP login.
    pub sender: String,
    pub password: String,
    pub recipient: String,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("sender", &self.sender)
            .field("password", &"<redacted>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub summarizer: SummarizerConfig,
    pub mail: MailConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any name -> value lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let api_key = required(ENV_GROQ_API_KEY)?;
        let sender = required(ENV_EMAIL_USER)?;
        let password = required(ENV_EMAIL_PASSWORD)?;
        let recipient = required(ENV_EMAIL_TO)?;

        check_mailbox(ENV_EMAIL_USER, &sender)?;
        check_mailbox(ENV_EMAIL_TO, &recipient)?;

        let smtp_port = match get(ENV_SMTP_PORT) {
            Some(v) => v.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: ENV_SMTP_PORT,
                reason: e.to_string(),
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        let max_hits = match get(ENV_MAX_HITS) {
            Some(v) => match v.parse::<usize>() {
                Ok(n) if n >= 1 => n,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        var: ENV_MAX_HITS,
                        reason: "must be at least 1".into(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: ENV_MAX_HITS,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_MAX_HITS,
        };

        Ok(Self {
            feed: FeedConfig {
                url: get(ENV_FEED_URL).unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
                max_hits,
            },
            summarizer: SummarizerConfig {
                api_key,
                model: get(ENV_GROQ_MODEL).unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
                endpoint: get(ENV_GROQ_API_URL).unwrap_or_else(|| DEFAULT_GROQ_URL.to_string()),
            },
            mail: MailConfig {
                smtp_host: get(ENV_SMTP_HOST).unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                smtp_port,
                sender,
                password,
                recipient,
            },
        })
    }
}

fn check_mailbox(var: &'static str, value: &str) -> Result<(), ConfigError> {
    value
        .parse::<Mailbox>()
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (ENV_GROQ_API_KEY, "gsk_test"),
            (ENV_EMAIL_USER, "alerts@example.com"),
            (ENV_EMAIL_PASSWORD, "app-password"),
            (ENV_EMAIL_TO, "me@example.com"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_apply_when_only_required_vars_are_set() {
        let cfg = load(&base()).expect("valid");
        assert_eq!(cfg.feed.url, DEFAULT_FEED_URL);
        assert_eq!(cfg.feed.max_hits, 15);
        assert_eq!(cfg.summarizer.model, DEFAULT_GROQ_MODEL);
        assert_eq!(cfg.mail.smtp_host, "smtp.gmail.com");
        assert_eq!(cfg.mail.smtp_port, 465);
    }

    #[test]
    fn blank_required_var_counts_as_missing() {
        let mut vars = base();
        vars.insert(ENV_EMAIL_PASSWORD, "   ");
        assert_eq!(
            load(&vars).unwrap_err(),
            ConfigError::Missing(ENV_EMAIL_PASSWORD)
        );
    }

    #[test]
    fn invalid_port_and_zero_hits_are_rejected() {
        let mut vars = base();
        vars.insert(ENV_SMTP_PORT, "smtp");
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { var: ENV_SMTP_PORT, .. })
        ));

        let mut vars = base();
        vars.insert(ENV_MAX_HITS, "0");
        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { var: ENV_MAX_HITS, .. })
        ));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let cfg = load(&base()).expect("valid");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("gsk_test"));
        assert!(!dbg.contains("app-password"));
        assert!(dbg.contains("api_key_len"));
    }
}
