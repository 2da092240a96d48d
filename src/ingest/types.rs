// src/ingest/types.rs
use anyhow::Result;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String, // normalized headline
    pub link: String,
    pub published: Option<OffsetDateTime>,
}

impl FeedItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            published: None,
        }
    }
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Entries in feed order.
    async fn fetch_latest(&self) -> Result<Vec<FeedItem>>;
    fn name(&self) -> &'static str;
}
