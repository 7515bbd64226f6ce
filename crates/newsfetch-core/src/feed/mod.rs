mod fetcher;
mod models;
mod parser;

pub use fetcher::{FeedFetcher, FetchReport, SourceFailure};
pub use models::{default_feeds, ArticleSummary, Feed, FeedEntry};
pub use parser::{html_to_text, parse_feed};
