mod cleanup;
mod extractor;
mod models;

pub use cleanup::clean_article_text;
pub use extractor::extract_plain_text;
pub use models::ArticleInfo;

use crate::Result;

/// Extract the article body from a page and strip known boilerplate
pub fn article_plain_text(html: &str) -> Result<String> {
    let text = extract_plain_text(html)?;
    Ok(clean_article_text(&text))
}
