use anyhow::{bail, Result};

use newsfetch_core::{default_feeds, Feed, Fetcher};

pub async fn run(
    fetcher: &mut Fetcher,
    source_names: &[String],
    cached: bool,
    limit: Option<usize>,
) -> Result<()> {
    let sources = select_sources(source_names)?;

    println!("Fetching headlines...\n");

    let summaries = fetcher.simple_fetch(sources.as_deref(), cached).await;

    if summaries.is_empty() {
        println!("No headlines available.");
        return Ok(());
    }

    let shown = limit.unwrap_or(summaries.len()).min(summaries.len());

    for summary in summaries.iter().take(shown) {
        println!("  [{}] {}", summary.published_on.format("%Y-%m-%d %H:%M"), summary.title);
        println!("    {}", summary.url);
        if let Some(text) = &summary.short_summary {
            println!("    {}", text);
        }
        println!();
    }

    println!("{} of {} headlines.", shown, summaries.len());

    Ok(())
}

/// Resolve source names against the built-in list; no names means all of them
fn select_sources(names: &[String]) -> Result<Option<Vec<Feed>>> {
    if names.is_empty() {
        return Ok(None);
    }

    let feeds = default_feeds();
    let mut selected = Vec::with_capacity(names.len());

    for name in names {
        match feeds.iter().find(|f| f.name.eq_ignore_ascii_case(name)) {
            Some(feed) => selected.push(feed.clone()),
            None => bail!("Unknown source '{}'. Run `newsfetch sources` to list them.", name),
        }
    }

    Ok(Some(selected))
}
