use url::Url;

/// Host of an absolute http(s) URL, `None` for anything else
///
/// Relative paths, free text and other schemes all yield `None`. The port is
/// not part of the result.
pub fn get_url_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    match parsed.scheme() {
        "http" | "https" => parsed.host_str().map(str::to_string),
        _ => None,
    }
}
