use chrono::{DateTime, Utc};
use feed_rs::parser;

use super::models::FeedEntry;
use crate::{Error, Result};

/// Parse RSS/Atom feed content into normalized entries
///
/// Entries without a link or without any timestamp are dropped: they cannot be
/// projected or ordered.
pub fn parse_feed(content: &[u8], source: &str) -> Result<Vec<FeedEntry>> {
    let feed = parser::parse(content)
        .map_err(|e| Error::FeedParse(e.to_string()))?;

    let entries = feed.entries.into_iter().filter_map(|entry| {
        let Some(url) = entry.links.first().map(|l| l.href.clone()) else {
            tracing::debug!("Dropping entry '{}' from {}: no link", entry.id, source);
            return None;
        };

        let Some(published_on) = entry.published
            .or(entry.updated)
            .map(|dt| DateTime::<Utc>::from(dt))
        else {
            tracing::debug!("Dropping entry {} from {}: no publication time", url, source);
            return None;
        };

        let title = entry.title
            .map(|t| t.content)
            .unwrap_or_else(|| "Untitled".to_string());

        let summary = entry.summary.map(|s| s.content);

        Some(FeedEntry {
            url,
            title,
            published_on,
            summary,
        })
    }).collect();

    Ok(entries)
}

/// Convert HTML content to a single line of plain text
pub fn html_to_text(html: &str) -> String {
    let text = html2text::from_read(html.as_bytes(), 1000)
        .unwrap_or_else(|_| html.to_string());

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example News</title>
    <link>https://example.com</link>
    <description>Latest stories</description>
    <item>
      <title>First story</title>
      <link>https://example.com/first</link>
      <description>&lt;p&gt;Short &lt;b&gt;summary&lt;/b&gt;&lt;/p&gt;</description>
      <pubDate>Mon, 04 Mar 2024 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Undated story</title>
      <link>https://example.com/undated</link>
    </item>
    <item>
      <title>Second story</title>
      <link>https://example.com/second</link>
      <pubDate>Tue, 05 Mar 2024 08:30:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_rss_entries() {
        let entries = parse_feed(RSS.as_bytes(), "Example").unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.url, "https://example.com/first");
        assert_eq!(first.title, "First story");
        assert_eq!(first.published_on, Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap());
        assert!(first.summary.as_deref().unwrap().contains("summary"));

        let second = &entries[1];
        assert_eq!(second.url, "https://example.com/second");
        assert!(second.summary.is_none());
    }

    #[test]
    fn test_undated_entry_is_dropped() {
        let entries = parse_feed(RSS.as_bytes(), "Example").unwrap();
        assert!(entries.iter().all(|e| e.title != "Undated story"));
    }

    #[test]
    fn test_invalid_feed() {
        let err = parse_feed(b"<html><body>not a feed</body></html>", "Broken").unwrap_err();
        assert!(matches!(err, Error::FeedParse(_)));
    }

    #[test]
    fn test_html_to_text_collapses_whitespace() {
        assert_eq!(html_to_text("<p>Hello\n   world</p>"), "Hello world");
        assert_eq!(html_to_text(""), "");
    }
}
