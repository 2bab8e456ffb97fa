use crate::config::ProviderSettings;
use crate::error::AppError;

use super::http::parse_base_url;
use super::lrclib::LrclibProvider;
use super::lyrics_ovh::LyricsOvhProvider;
use super::provider::LyricProvider;
use super::types::LyricResult;

/// Lyrics together with the provider that supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub provider: &'static str,
    pub lyrics: LyricResult,
}

/// Ordered list of providers; the first one with lyrics wins.
pub struct ProviderChain {
    providers: Vec<Box<dyn LyricProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Box<dyn LyricProvider>>) -> Self {
        Self { providers }
    }

    /// LRCLIB first (synced when available), then lyrics.ovh.
    pub fn standard(
        client: reqwest::blocking::Client,
        settings: &ProviderSettings,
    ) -> Result<Self, AppError> {
        let lrclib = parse_base_url(&settings.lrclib_url)
            .map_err(|e| AppError::InvalidConfig(format!("providers.lrclib_url {e}")))?;
        let lyrics_ovh = parse_base_url(&settings.lyrics_ovh_url)
            .map_err(|e| AppError::InvalidConfig(format!("providers.lyrics_ovh_url {e}")))?;

        Ok(Self::new(vec![
            Box::new(LrclibProvider::new(client.clone(), lrclib)),
            Box::new(LyricsOvhProvider::new(client, lyrics_ovh)),
        ]))
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Ask each provider once, in order, and return the first usable answer.
    /// Results are never merged across providers.
    pub fn resolve(&self, artist: &str, title: &str) -> Option<Found> {
        for provider in &self.providers {
            let name = provider.name();
            tracing::debug!(provider = name, artist, title, "querying provider");

            match provider.fetch(artist, title) {
                Ok(Some(lyrics)) if !lyrics.text.trim().is_empty() => {
                    tracing::debug!(provider = name, synced = lyrics.synced, "provider hit");
                    return Some(Found {
                        provider: name,
                        lyrics,
                    });
                }
                Ok(_) => tracing::debug!(provider = name, "provider miss"),
                Err(e) => tracing::warn!(provider = name, error = %e, "provider failed"),
            }
        }
        None
    }
}
