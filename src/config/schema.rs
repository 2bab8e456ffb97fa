use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/lyricfetch/config.toml` or `~/.config/lyricfetch/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LYRICFETCH__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fetch: FetchSettings,
    pub providers: ProviderSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// Pause after every track that queried the providers (seconds).
    pub delay_secs: f64,
    /// Per-request timeout for provider calls (seconds).
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every provider request.
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            delay_secs: 2.0,
            timeout_secs: 10,
            user_agent: concat!("lyricfetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of the LRCLIB API (queried first, may return synced lyrics).
    pub lrclib_url: String,
    /// Base URL of the lyrics.ovh API (plain-text fallback).
    pub lyrics_ovh_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            lrclib_url: "https://lrclib.net".to_string(),
            lyrics_ovh_url: "https://api.lyrics.ovh".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["flac".into(), "mp3".into(), "m4a".into(), "mp4".into()],
            follow_links: true,
        }
    }
}
