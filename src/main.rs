//! Flight briefing: binary entrypoint.
//! Runs the briefing once and exits; an external scheduler (cron, CI) decides when.
//!
//! Exit status is non-zero only for configuration and feed errors. A failed
//! summary or email is logged and the process still exits 0.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use flight_briefing::config::keywords::load_keywords_default;
use flight_briefing::config::AppConfig;
use flight_briefing::ingest::providers::google_news::GoogleNewsRss;
use flight_briefing::notify::EmailSender;
use flight_briefing::summarize::GroqProvider;
use flight_briefing::{check_news, telemetry, KeywordFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env for local runs; no-op when the scheduler injects the variables.
    let _ = dotenvy::dotenv();

    telemetry::init_tracing();

    // Fail fast: everything is validated before the first network call.
    let cfg = AppConfig::from_env().context("loading configuration")?;
    info!(
        feed = %cfg.feed.url,
        model = %cfg.summarizer.model,
        key_len = cfg.summarizer.api_key.len(),
        smtp = %format!("{}:{}", cfg.mail.smtp_host, cfg.mail.smtp_port),
        "configuration loaded"
    );

    let keywords = load_keywords_default().context("loading keyword list")?;
    let filter = KeywordFilter::new(&keywords, cfg.feed.max_hits);

    let source = GoogleNewsRss::from_url(&cfg.feed.url)?;
    let summarizer = GroqProvider::new(&cfg.summarizer)?;
    let notifier = EmailSender::new(&cfg.mail)?;

    let today = Local::now().date_naive();
    let outcome = check_news(&source, &filter, &summarizer, &notifier, today).await?;

    info!(?outcome, "run finished");
    Ok(())
}
