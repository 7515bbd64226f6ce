use anyhow::Result;

use newsfetch_core::{default_feeds, get_url_domain};

pub fn run() -> Result<()> {
    let feeds = default_feeds();

    println!("Sources ({}):\n", feeds.len());

    for feed in &feeds {
        let host = get_url_domain(&feed.url).unwrap_or_default();
        println!("  {} - {}", feed.name, host);
        println!("    URL: {}", feed.url);
    }

    Ok(())
}
