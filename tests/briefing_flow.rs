// tests/briefing_flow.rs
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use flight_briefing::ingest::providers::google_news::GoogleNewsRss;
use flight_briefing::ingest::types::{FeedItem, FeedSource};
use flight_briefing::notify::RecordingNotifier;
use flight_briefing::summarize::{FailingSummarizer, MockSummarizer};
use flight_briefing::{check_news, KeywordFilter, RunOutcome};

const FEED_XML: &str = include_str!("fixtures/google_news_rss.xml");

struct StaticSource(Vec<FeedItem>);

#[async_trait::async_trait]
impl FeedSource for StaticSource {
    async fn fetch_latest(&self) -> Result<Vec<FeedItem>> {
        Ok(self.0.clone())
    }
    fn name(&self) -> &'static str {
        "static"
    }
}

struct BrokenSource;

#[async_trait::async_trait]
impl FeedSource for BrokenSource {
    async fn fetch_latest(&self) -> Result<Vec<FeedItem>> {
        Err(anyhow!("connection refused"))
    }
    fn name(&self) -> &'static str {
        "broken"
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn mock_summary() -> MockSummarizer {
    MockSummarizer {
        fixed: "Storm delays expected at BOS; DCA ground stop confirmed.".into(),
    }
}

#[tokio::test]
async fn no_matches_skips_without_notifying() {
    let source = StaticSource(vec![
        FeedItem::new("Unrelated local news", "https://news.example/1"),
        FeedItem::new("Weekend farmers market opens", "https://news.example/2"),
    ]);
    let notifier = RecordingNotifier::new();

    let outcome = check_news(
        &source,
        &KeywordFilter::default(),
        &mock_summary(),
        &notifier,
        day(),
    )
    .await
    .expect("run ok");

    assert_eq!(outcome, RunOutcome::Skipped);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn empty_feed_skips_without_notifying() {
    let notifier = RecordingNotifier::new();
    let outcome = check_news(
        &StaticSource(vec![]),
        &KeywordFilter::default(),
        &mock_summary(),
        &notifier,
        day(),
    )
    .await
    .expect("run ok");

    assert_eq!(outcome, RunOutcome::Skipped);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn successful_summary_is_mailed_with_date_and_count() {
    let source = GoogleNewsRss::from_fixture_str(FEED_XML);
    let notifier = RecordingNotifier::new();

    let outcome = check_news(
        &source,
        &KeywordFilter::default(),
        &mock_summary(),
        &notifier,
        day(),
    )
    .await
    .expect("run ok");

    assert_eq!(outcome, RunOutcome::Sent { articles: 3 });
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    let (subject, body) = &sent[0];
    assert!(subject.contains("2026-10-18"));
    assert!(subject.contains("Flight Briefing"));
    assert!(body.starts_with("Flight Intelligence Report for 2026-10-18:"));
    assert!(body.contains("Storm delays expected at BOS; DCA ground stop confirmed."));
    assert!(body.contains("(Source Data: 3 articles processed)"));
}

#[tokio::test]
async fn summarizer_failure_still_mails_every_hit() {
    let source = StaticSource(vec![
        FeedItem::new("Boston flights delayed due to storm", "https://news.example/1"),
        FeedItem::new("Unrelated local news", "https://news.example/2"),
        FeedItem::new("FAA ground stop at DCA", "https://news.example/3"),
    ]);
    let notifier = RecordingNotifier::new();
    let summarizer = FailingSummarizer {
        reason: "groq non-2xx: 401 Unauthorized".into(),
    };

    let outcome = check_news(
        &source,
        &KeywordFilter::default(),
        &summarizer,
        &notifier,
        day(),
    )
    .await
    .expect("run ok");

    assert_eq!(outcome, RunOutcome::Sent { articles: 2 });
    let sent = notifier.sent();
    let body = &sent[0].1;
    assert!(body.contains("Could not generate summary. Here is the raw data:"));
    assert!(body.contains("- Boston flights delayed due to storm (https://news.example/1)"));
    assert!(body.contains("- FAA ground stop at DCA (https://news.example/3)"));
    assert!(!body.contains("Unrelated local news"));
    assert!(body.contains("(Source Data: 2 articles processed)"));
}

#[tokio::test]
async fn mail_failure_is_reported_not_raised() {
    let source = GoogleNewsRss::from_fixture_str(FEED_XML);
    let notifier = RecordingNotifier::failing("535 authentication failed");

    let outcome = check_news(
        &source,
        &KeywordFilter::default(),
        &mock_summary(),
        &notifier,
        day(),
    )
    .await
    .expect("run still ok");

    match outcome {
        RunOutcome::Failed { articles, reason } => {
            assert_eq!(articles, 3);
            assert!(reason.contains("535"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn feed_failure_propagates() {
    let notifier = RecordingNotifier::new();
    let err = check_news(
        &BrokenSource,
        &KeywordFilter::default(),
        &mock_summary(),
        &notifier,
        day(),
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("connection refused"));
    assert!(notifier.sent().is_empty());
}
