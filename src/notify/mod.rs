pub mod email;

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

pub use email::EmailSender;

/// The daily briefing, built once per run and handed to a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub date: NaiveDate,
    pub summary: String,
    pub source_count: usize,
}

impl Report {
    pub fn new(date: NaiveDate, summary: impl Into<String>, source_count: usize) -> Self {
        Self {
            date,
            summary: summary.into(),
            source_count,
        }
    }

    fn day(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn subject(&self) -> String {
        format!("\u{2708}\u{fe0f} Flight Briefing: {}", self.day())
    }

    pub fn body(&self) -> String {
        format!(
            "Flight Intelligence Report for {}:\n\n{}\n\n---\n(Source Data: {} articles processed)",
            self.day(),
            self.summary,
            self.source_count
        )
    }
}

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> Result<()>;
    fn name(&self) -> &'static str;
}

/// Prints the message instead of sending it (demo runs).
pub struct StdoutNotifier;

#[async_trait::async_trait]
impl Notifier for StdoutNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<()> {
        println!("Subject: {subject}\n\n{body}");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

// --- Test helper ---
/// Keeps every (subject, body) it is given; optionally fails each send.
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    fail_with: Option<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            fail_with: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Mutex::new(vec![]),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        match &self.fail_with {
            Some(reason) => Err(anyhow!("{reason}")),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
