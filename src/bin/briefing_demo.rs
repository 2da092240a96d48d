//! Offline demo: runs the briefing against the bundled feed fixture with a canned
//! summary and prints the email instead of sending it.

use chrono::Local;
use flight_briefing::ingest::providers::google_news::GoogleNewsRss;
use flight_briefing::notify::StdoutNotifier;
use flight_briefing::summarize::MockSummarizer;
use flight_briefing::{check_news, telemetry, KeywordFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let xml: &str = include_str!("../../tests/fixtures/google_news_rss.xml");
    let source = GoogleNewsRss::from_fixture_str(xml);
    let summarizer = MockSummarizer {
        fixed: "Demo briefing: storms may slow BOS departures; DCA ground stop confirmed.".into(),
    };

    let outcome = check_news(
        &source,
        &KeywordFilter::default(),
        &summarizer,
        &StdoutNotifier,
        Local::now().date_naive(),
    )
    .await?;

    println!("briefing-demo done: {outcome:?}");
    Ok(())
}
