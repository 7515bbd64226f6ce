use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::{Error, Result};

static ARTICLE_PARAGRAPHS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article p").expect("Failed to parse article paragraph selector")
});

static PARAGRAPHS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p").expect("Failed to parse paragraph selector")
});

/// Extract the body text of an article page
///
/// Paragraphs inside `<article>` win; otherwise every `<p>` on the page is used.
/// Each paragraph becomes one line, separated by a blank line.
pub fn extract_plain_text(html: &str) -> Result<String> {
    let document = Html::parse_document(html);

    let mut paragraphs = collect_paragraphs(&document, &ARTICLE_PARAGRAPHS);
    if paragraphs.is_empty() {
        paragraphs = collect_paragraphs(&document, &PARAGRAPHS);
    }

    if paragraphs.is_empty() {
        return Err(Error::Extraction("no paragraph text found".to_string()));
    }

    Ok(paragraphs.join("\n\n"))
}

fn collect_paragraphs(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|element| {
            let text = element.text().collect::<String>();
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect()
}
