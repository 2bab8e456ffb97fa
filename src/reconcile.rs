//! Decides what to do with a track's lyrics files given what is already on
//! disk and what the providers returned.

use std::fmt;

use crate::lyrics::LyricResult;
use crate::sidecar::SidecarState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    SyncedPresent,
    NoLyricsFound,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SyncedPresent => f.write_str("synced lyrics already present"),
            Self::NoLyricsFound => f.write_str("no lyrics found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Skip(SkipReason),
    /// Write a sidecar of the kind matching `synced`, overwriting one of the
    /// same kind.
    WriteNew(LyricResult),
    /// Delete the `.txt`, then write the `.lrc`.
    ReplaceWithSynced(LyricResult),
    /// Nothing new was found; the plain sidecar on disk is good enough.
    KeepExisting,
}

pub fn decide(state: SidecarState, fetched: Option<LyricResult>) -> Action {
    match (state, fetched) {
        (SidecarState::SyncedOnly, _) => Action::Skip(SkipReason::SyncedPresent),
        (SidecarState::PlainOnly, Some(lyrics)) if lyrics.synced => {
            Action::ReplaceWithSynced(lyrics)
        }
        (_, Some(lyrics)) => Action::WriteNew(lyrics),
        (SidecarState::PlainOnly, None) => Action::KeepExisting,
        (SidecarState::None, None) => Action::Skip(SkipReason::NoLyricsFound),
    }
}
