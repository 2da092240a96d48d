// src/ingest/providers/google_news.rs
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;
use time::{format_description::well_known::Rfc2822, OffsetDateTime, UtcOffset};

use crate::ingest::normalize_title;
use crate::ingest::types::{FeedItem, FeedSource};
use crate::telemetry::{FEED_ITEMS_TOTAL, FEED_PARSE_MS};

/// Google News search for Boston / DC airport trouble over the last day.
pub const DEFAULT_FEED_URL: &str = "https://news.google.com/rss/search?q=(Boston+OR+DC)+AND+(airport+OR+flight+OR+storm+OR+FAA)+when:1d&hl=en-US&gl=US&ceid=US:en";

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

fn parse_rfc2822(ts: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(ts.trim(), &Rfc2822)
        .ok()
        .map(|dt| dt.to_offset(UtcOffset::UTC))
}

pub struct GoogleNewsRss {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { url: String, client: reqwest::Client },
}

impl GoogleNewsRss {
    /// Parse a local copy of the feed instead of downloading it.
    pub fn from_fixture_str(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    pub fn from_url(url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("flight-briefing/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(20))
            .build()
            .context("building feed http client")?;
        Ok(Self {
            mode: Mode::Http {
                url: url.to_string(),
                client,
            },
        })
    }

    fn parse_items_from_str(s: &str) -> Result<Vec<FeedItem>> {
        let t0 = std::time::Instant::now();
        let xml_clean = scrub_html_entities_for_xml(s);
        let rss: Rss = from_str(&xml_clean).context("parsing google news rss xml")?;

        let mut out = Vec::with_capacity(rss.channel.item.len());
        for it in rss.channel.item {
            let title = normalize_title(it.title.as_deref().unwrap_or_default());
            if title.is_empty() {
                continue;
            }
            let published = it.pub_date.as_deref().and_then(parse_rfc2822);
            tracing::debug!(%title, ?published, "feed item");

            out.push(FeedItem {
                title,
                link: it.link.map(|l| l.trim().to_string()).unwrap_or_default(),
                published,
            });
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!(FEED_PARSE_MS).record(ms);
        counter!(FEED_ITEMS_TOTAL).increment(out.len() as u64);
        Ok(out)
    }
}

#[async_trait]
impl FeedSource for GoogleNewsRss {
    async fn fetch_latest(&self) -> Result<Vec<FeedItem>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_items_from_str(s),
            Mode::Http { url, client } => {
                let body = client
                    .get(url.as_str())
                    .send()
                    .await
                    .context("feed http get()")?
                    .error_for_status()
                    .context("feed non-2xx")?
                    .text()
                    .await
                    .context("feed http .text()")?;
                Self::parse_items_from_str(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "GoogleNews"
    }
}

// quick-xml only knows the five XML entities; HTML ones show up in Google News titles.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
