// src/briefing.rs
//! One run: fetch -> filter -> (summarize -> notify) and the outcome of that run.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use metrics::counter;
use tracing::{error, info};

use crate::filter::KeywordFilter;
use crate::ingest::types::FeedSource;
use crate::notify::{Notifier, Report};
use crate::summarize::{summarize_or_fallback, Summarizer};
use crate::telemetry::{
    ensure_metrics_described, EMAIL_FAILED_TOTAL, EMAIL_SENT_TOTAL, HITS_TOTAL,
    RUNS_SKIPPED_TOTAL,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Briefing handed to the relay.
    Sent { articles: usize },
    /// Nothing matched; no summary, no email.
    Skipped,
    /// The email could not be sent. The run itself still counts as finished.
    Failed { articles: usize, reason: String },
}

/// Run the briefing once for `today`.
///
/// Feed errors propagate. Summarizer errors degrade to raw headlines and mail
/// errors become [`RunOutcome::Failed`].
pub async fn check_news(
    source: &dyn FeedSource,
    filter: &KeywordFilter,
    summarizer: &dyn Summarizer,
    notifier: &dyn Notifier,
    today: NaiveDate,
) -> Result<RunOutcome> {
    ensure_metrics_described();

    info!(source = source.name(), "fetching news");
    let items = source
        .fetch_latest()
        .await
        .with_context(|| format!("fetching feed from {}", source.name()))?;

    let hits = filter.collect_hits(&items);
    counter!(HITS_TOTAL).increment(hits.len() as u64);

    if hits.is_empty() {
        info!(items = items.len(), "No significant issues found today.");
        counter!(RUNS_SKIPPED_TOTAL).increment(1);
        return Ok(RunOutcome::Skipped);
    }

    info!(
        articles = hits.len(),
        provider = summarizer.provider_name(),
        "found matching articles, asking for a summary"
    );
    let summary = summarize_or_fallback(summarizer, &hits).await;

    let report = Report::new(today, summary.text(), hits.len());
    match notifier.send(&report.subject(), &report.body()).await {
        Ok(()) => {
            info!(notifier = notifier.name(), articles = hits.len(), "email sent successfully");
            counter!(EMAIL_SENT_TOTAL).increment(1);
            Ok(RunOutcome::Sent {
                articles: hits.len(),
            })
        }
        Err(e) => {
            error!(notifier = notifier.name(), error = ?e, "failed to send email");
            counter!(EMAIL_FAILED_TOTAL).increment(1);
            Ok(RunOutcome::Failed {
                articles: hits.len(),
                reason: format!("{e:#}"),
            })
        }
    }
}
