//! Lyric lookup: provider clients and the fallback chain that queries them.
//!
//! Providers are tried one at a time in priority order. A provider that fails
//! (network error, bad status, unreadable payload) is treated exactly like one
//! that has no lyrics; the chain logs it and moves on.

mod chain;
mod http;
mod lrclib;
mod lyrics_ovh;
mod provider;
mod types;

pub use chain::{Found, ProviderChain};
pub use http::{build_client, parse_base_url};
pub use lrclib::LrclibProvider;
pub use lyrics_ovh::LyricsOvhProvider;
pub use provider::LyricProvider;
pub use types::LyricResult;
