pub mod article;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod fetcher;
pub mod http;

pub use article::ArticleInfo;
pub use config::AppConfig;
pub use domain::get_url_domain;
pub use error::{Error, Result};
pub use feed::{default_feeds, ArticleSummary, Feed};
pub use fetcher::Fetcher;
