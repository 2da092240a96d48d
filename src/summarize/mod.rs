//! Summarizer: prompt template, provider abstraction, and the degrade-to-raw-data policy.
//!
//! A provider either returns the generated briefing or an error. The caller never sees
//! the error directly: [`summarize_or_fallback`] turns it into [`Summary::Fallback`] so
//! the email still goes out.

pub mod groq;

use std::future::Future;
use std::pin::Pin;

use anyhow::{anyhow, Result};
use metrics::counter;
use tracing::{info, warn};

use crate::filter::{join_hits, Hit};
use crate::telemetry::SUMMARY_FALLBACK_TOTAL;

pub use groq::GroqProvider;

pub const FALLBACK_PREFIX: &str = "Could not generate summary. Here is the raw data:\n";

/// Wrap the newline-joined headlines in the briefing instructions.
pub fn build_prompt(news_text: &str) -> String {
    format!(
        "You are a flight tracking assistant.\n\
         Analyze the following news headlines and links regarding Boston (BOS) and Washington DC (DCA/IAD) flights. \
         Highlight if the news articles are confident, or in a wait-and-see mode, with regard to whether delays will happen.\n\
         \n\
         NEWS DATA:\n\
         {news_text}\n\
         \n\
         INSTRUCTIONS:\n\
         1. Summarize any potential disruptions (storms, strikes, FAA outages).\n\
         2. Be specific about which city is affected.\n\
         3. State whether delays and disruptions are confirmed, or only potential issues.\n\
         4. Keep it short (under 500 words).\n\
         5. Format it as a clean briefing.\n"
    )
}

/// What ends up in the email body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Generated(String),
    Fallback { text: String, reason: String },
}

impl Summary {
    pub fn text(&self) -> &str {
        match self {
            Summary::Generated(text) | Summary::Fallback { text, .. } => text.as_str(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Summary::Fallback { .. })
    }
}

/// Trait object used by the orchestration (and swapped for mocks in tests).
pub trait Summarizer: Send + Sync {
    /// Send one prompt, return the model's text.
    fn summarize<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
    /// Provider name for diagnostics.
    fn provider_name(&self) -> &'static str;
}

/// Ask the provider for a briefing; any failure becomes the raw-data fallback.
pub async fn summarize_or_fallback(client: &dyn Summarizer, hits: &[Hit]) -> Summary {
    let news_text = join_hits(hits);
    let prompt = build_prompt(&news_text);

    match client.summarize(&prompt).await {
        Ok(text) => {
            info!(provider = client.provider_name(), chars = text.len(), "summary generated");
            Summary::Generated(text)
        }
        Err(e) => {
            warn!(provider = client.provider_name(), error = ?e, "error getting summary, using raw data");
            counter!(SUMMARY_FALLBACK_TOTAL).increment(1);
            Summary::Fallback {
                text: format!("{FALLBACK_PREFIX}{news_text}"),
                reason: format!("{e:#}"),
            }
        }
    }
}

// ------------------------------------------------------------
// Offline providers (demo binary + tests)
// ------------------------------------------------------------

/// Returns the same text for every prompt.
#[derive(Clone)]
pub struct MockSummarizer {
    pub fixed: String,
}

impl Summarizer for MockSummarizer {
    fn summarize<'a>(
        &'a self,
        _prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let out = self.fixed.clone();
        Box::pin(async move { Ok(out) })
    }
    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Always fails; exercises the fallback path.
#[derive(Clone)]
pub struct FailingSummarizer {
    pub reason: String,
}

impl Summarizer for FailingSummarizer {
    fn summarize<'a>(
        &'a self,
        _prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let reason = self.reason.clone();
        Box::pin(async move { Err(anyhow!(reason)) })
    }
    fn provider_name(&self) -> &'static str {
        "failing"
    }
}
