/// Lyrics returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricResult {
    pub text: String,
    /// Whether `text` carries per-line timestamps (LRC).
    pub synced: bool,
}

impl LyricResult {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            synced: false,
        }
    }

    pub fn synced(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            synced: true,
        }
    }

    /// Pick the synced text when it has content, otherwise the plain text.
    /// Blank strings count as missing.
    pub fn prefer_synced(synced: Option<&str>, plain: Option<&str>) -> Option<Self> {
        let usable = |s: &&str| !s.trim().is_empty();
        synced
            .filter(usable)
            .map(Self::synced)
            .or_else(|| plain.filter(usable).map(Self::plain))
    }

    pub fn extension(&self) -> &'static str {
        if self.synced { "lrc" } else { "txt" }
    }
}
