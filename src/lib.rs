// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod briefing;
pub mod config;
pub mod filter;
pub mod ingest;
pub mod notify;
pub mod summarize;
pub mod telemetry;

// ---- Re-exports for the common entry points ----
pub use crate::briefing::{check_news, RunOutcome};
pub use crate::filter::{Hit, KeywordFilter};
pub use crate::notify::{Notifier, Report};
pub use crate::summarize::{Summarizer, Summary};
