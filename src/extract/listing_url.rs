use crate::error::{ListingError, Result};
use url::Url;

/// Normalize a pasted listing link into an absolute http(s) URL
///
/// Links copied without a scheme (`cars.example.com/listing/1`) get `https://`.
/// Anything that is empty, relative, or not http(s) is rejected.
pub fn normalize_listing_url(url: &str) -> Result<String> {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return Err(ListingError::InvalidUrl("URL is empty".to_string()));
    }

    if trimmed.starts_with('/') || trimmed.starts_with("./") || trimmed.starts_with("../") {
        return Err(ListingError::InvalidUrl(format!("{} is a relative path", trimmed)));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        format!("http://{}", trimmed)
    } else if trimmed.contains("://") {
        return Err(ListingError::InvalidUrl(format!("{} is not an http(s) link", trimmed)));
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| ListingError::InvalidUrl(format!("{}: {}", trimmed, e)))?;

    match parsed.host_str() {
        Some(host) if host.contains('.') || host == "localhost" => Ok(parsed.to_string()),
        _ => Err(ListingError::InvalidUrl(format!("{} has no usable host", trimmed))),
    }
}
