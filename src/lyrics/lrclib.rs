use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::ProviderError;

use super::http::{endpoint, get_body};
use super::provider::LyricProvider;
use super::types::LyricResult;

/// One entry of the `GET /api/search` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchHit {
    #[serde(default)]
    synced_lyrics: Option<String>,
    #[serde(default)]
    plain_lyrics: Option<String>,
}

/// [LRCLIB](https://lrclib.net) search client. Only the first hit is used,
/// and its synced lyrics win over its plain lyrics.
pub struct LrclibProvider {
    client: Client,
    base: Url,
}

impl LrclibProvider {
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }
}

impl LyricProvider for LrclibProvider {
    fn name(&self) -> &'static str {
        "LRCLIB"
    }

    fn fetch(&self, artist: &str, title: &str) -> Result<Option<LyricResult>, ProviderError> {
        let url = endpoint(&self.base, ["api", "search"])?;
        let request = self
            .client
            .get(url)
            .query(&[("artist_name", artist), ("track_name", title)]);

        match get_body(request)? {
            Some(body) => parse_search(&body),
            None => Ok(None),
        }
    }
}

pub(super) fn parse_search(body: &str) -> Result<Option<LyricResult>, ProviderError> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;

    Ok(hits.first().and_then(|hit| {
        LyricResult::prefer_synced(hit.synced_lyrics.as_deref(), hit.plain_lyrics.as_deref())
    }))
}
