// src/telemetry.rs
//! Tracing setup for the binaries plus the metric names emitted by the pipeline.

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const FEED_ITEMS_TOTAL: &str = "briefing_feed_items_total";
pub const FEED_PARSE_MS: &str = "briefing_feed_parse_ms";
pub const HITS_TOTAL: &str = "briefing_hits_total";
pub const SUMMARY_FALLBACK_TOTAL: &str = "briefing_summary_fallback_total";
pub const EMAIL_SENT_TOTAL: &str = "briefing_email_sent_total";
pub const EMAIL_FAILED_TOTAL: &str = "briefing_email_failed_total";
pub const RUNS_SKIPPED_TOTAL: &str = "briefing_runs_skipped_total";

const DEFAULT_FILTER: &str = "flight_briefing=info,warn";

/// Install the global subscriber. `RUST_LOG` overrides the default filter;
/// `LOG_FORMAT=json` switches to one JSON object per line (for schedulers that ship logs).
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    let res = if json {
        registry
            .with(fmt::layer().json().with_target(false))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_target(false))
            .try_init()
    };

    // A second init (tests, embedding) keeps the first subscriber.
    if let Err(e) = res {
        eprintln!("tracing already initialized: {e}");
    }
}

/// One-time metrics registration so descriptions show up once a recorder is installed.
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(FEED_ITEMS_TOTAL, "Items parsed from the news feed.");
        describe_histogram!(FEED_PARSE_MS, "Feed parse time in milliseconds.");
        describe_counter!(HITS_TOTAL, "Feed items that matched a keyword.");
        describe_counter!(
            SUMMARY_FALLBACK_TOTAL,
            "Runs where the summary fell back to raw headlines."
        );
        describe_counter!(EMAIL_SENT_TOTAL, "Briefing emails delivered to the relay.");
        describe_counter!(EMAIL_FAILED_TOTAL, "Briefing emails that failed to send.");
        describe_counter!(RUNS_SKIPPED_TOTAL, "Runs that found no matching headlines.");
    });
}
