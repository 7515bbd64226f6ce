use anyhow::{bail, Result};

use newsfetch_core::Fetcher;

pub async fn run(fetcher: &mut Fetcher, url: &str, cached: bool) -> Result<()> {
    let info = fetcher.retrieve_article_info(url, cached).await;

    match (info.success, &info.plain_text) {
        (true, Some(text)) => {
            println!("{}", text.trim());
            Ok(())
        }
        _ => match info.status_code {
            Some(status) => bail!("Could not retrieve article (HTTP {})", status),
            None => bail!(
                "Could not retrieve article: {}",
                info.text.as_deref().unwrap_or("unknown error")
            ),
        },
    }
}
