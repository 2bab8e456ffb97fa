use crate::error::ProviderError;

use super::types::LyricResult;

/// A lyric lookup service.
///
/// `Ok(None)` means the service answered but has nothing usable for the
/// track; `Err` means the service could not be asked or its answer could not
/// be understood.
pub trait LyricProvider {
    /// Short human-readable name, used in progress output and logs.
    fn name(&self) -> &'static str;

    fn fetch(&self, artist: &str, title: &str) -> Result<Option<LyricResult>, ProviderError>;
}
