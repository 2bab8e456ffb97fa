use std::time::Duration;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};

use crate::config::FetchSettings;
use crate::error::ProviderError;

/// Build the HTTP client shared by every provider.
pub fn build_client(settings: &FetchSettings) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(settings.user_agent.clone())
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
}

/// Parse a provider base URL from config.
pub fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("'{raw}': {e}"))?;
    if url.cannot_be_a_base() {
        return Err(format!("'{raw}' cannot be used as a base URL"));
    }
    Ok(url)
}

/// Append path segments to `base`, percent-encoding each one.
pub(super) fn endpoint<'a>(
    base: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, ProviderError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ProviderError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send `request` and return the body of a successful response.
///
/// `404 Not Found` is how both providers say "no lyrics", so it maps to
/// `Ok(None)`; every other non-success status is an error.
pub(super) fn get_body(request: RequestBuilder) -> Result<Option<String>, ProviderError> {
    let response = request.send()?;
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(ProviderError::Status(status.as_u16()));
    }
    Ok(Some(response.text()?))
}
