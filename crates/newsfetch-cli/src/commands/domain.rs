use anyhow::Result;

use newsfetch_core::get_url_domain;

pub fn run(url: &str) -> Result<()> {
    match get_url_domain(url) {
        Some(host) => println!("{}", host),
        None => println!("(none)"),
    }
    Ok(())
}
