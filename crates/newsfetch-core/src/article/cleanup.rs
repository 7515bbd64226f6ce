//! Source-specific boilerplate removal for extracted article text.
//!
//! Rules run in a fixed order. The pattern rules are line-anchored and only
//! blank out the matching part of a line; the line break itself stays.

use once_cell::sync::Lazy;
use regex::Regex;

const ADVERTISEMENT_MARKER: &str = "\nAdvertisement\n";

static SUBSCRIBE_PROMPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^Download our app or subscribe.*$").expect("valid subscribe regex")
});

static IMAGE_CAPTION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(Image copyright )(.*)( Image caption) ?").expect("valid caption regex")
});

static IMAGE_COPYRIGHT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(Image copyright )(.*)$").expect("valid copyright regex")
});

static FOLLOW_PROMPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^Follow @?\w+ on (Instagram|Twitter|Facebook|YouTube|and|[ ,.])+$")
        .expect("valid follow regex")
});

/// Apply every cleanup rule to `text`
pub fn clean_article_text(text: &str) -> String {
    // CNA
    let text = text.replace(ADVERTISEMENT_MARKER, "");
    let text = SUBSCRIBE_PROMPT.replace_all(&text, "");
    // BBC
    let text = IMAGE_CAPTION_PREFIX.replace_all(&text, "");
    let text = IMAGE_COPYRIGHT_LINE.replace_all(&text, "");
    // Generic
    FOLLOW_PROMPT.replace_all(&text, "").into_owned()
}
