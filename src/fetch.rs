use std::time::Duration;

use once_cell::sync::Lazy;

use crate::error::Result;

/// Per-request timeout in seconds. One slow platform must not stall the
/// whole query much longer than this.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP agent for connection pooling
static HTTP_AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build()
        .into()
});

/// Fetch a search result page as HTML.
///
/// Non-success status codes surface as errors; callers at the adapter
/// boundary degrade them to an empty result set for that platform.
pub fn fetch_html(url: &str) -> Result<String> {
    let response = HTTP_AGENT
        .get(url)
        .header(
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36",
        )
        .header("Accept-Language", "en-IN,en;q=0.9")
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        )
        .header("Connection", "keep-alive")
        .call()?;

    let html = response.into_body().read_to_string()?;
    Ok(html)
}
