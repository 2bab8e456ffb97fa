use std::path::{Path, PathBuf};

/// What lyrics already sit next to a track.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SidecarState {
    None,
    PlainOnly,
    /// A `.lrc` exists. Reported even if a `.txt` is also present.
    SyncedOnly,
}

pub fn plain_path(track: &Path) -> PathBuf {
    track.with_extension("txt")
}

pub fn synced_path(track: &Path) -> PathBuf {
    track.with_extension("lrc")
}

pub fn sidecar_path(track: &Path, synced: bool) -> PathBuf {
    if synced {
        synced_path(track)
    } else {
        plain_path(track)
    }
}

/// Classify the sidecars of `track`. Synced lyrics are checked first.
pub fn inspect(track: &Path) -> SidecarState {
    if synced_path(track).is_file() {
        SidecarState::SyncedOnly
    } else if plain_path(track).is_file() {
        SidecarState::PlainOnly
    } else {
        SidecarState::None
    }
}
