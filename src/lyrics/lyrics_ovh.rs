use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::ProviderError;

use super::http::{endpoint, get_body};
use super::provider::LyricProvider;
use super::types::LyricResult;

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    #[serde(default)]
    lyrics: Option<String>,
}

/// [lyrics.ovh](https://lyrics.ovh) client. Plain text only.
pub struct LyricsOvhProvider {
    client: Client,
    base: Url,
}

impl LyricsOvhProvider {
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }
}

impl LyricProvider for LyricsOvhProvider {
    fn name(&self) -> &'static str {
        "lyrics.ovh"
    }

    fn fetch(&self, artist: &str, title: &str) -> Result<Option<LyricResult>, ProviderError> {
        // The lookup is an exact path match, so punctuation in tags only hurts.
        let artist = clean_query(artist);
        let title = clean_query(title);
        if artist.is_empty() || title.is_empty() {
            return Ok(None);
        }

        let url = endpoint(&self.base, ["v1", artist.as_str(), title.as_str()])?;
        match get_body(self.client.get(url))? {
            Some(body) => parse_lyrics(&body),
            None => Ok(None),
        }
    }
}

/// Keep word characters, whitespace and hyphens.
pub(super) fn clean_query(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .collect::<String>()
        .trim()
        .to_string()
}

pub(super) fn parse_lyrics(body: &str) -> Result<Option<LyricResult>, ProviderError> {
    let response: LyricsResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;
    Ok(LyricResult::prefer_synced(None, response.lyrics.as_deref()))
}
