use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::library::{AudioTrack, TagReader, TrackTags};
use crate::lyrics::ProviderChain;
use crate::reconcile::{Action, SkipReason, decide};
use crate::sidecar::{self, SidecarState};

/// Run-wide counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Tracks that were looked up with the providers.
    pub processed: usize,
    /// Tracks that got a lyrics file written.
    pub found: usize,
    /// Tracks with missing tags, or with no lyrics anywhere.
    pub errors: usize,
}

impl RunStats {
    pub fn record(&mut self, outcome: &TrackOutcome) {
        match outcome {
            TrackOutcome::SkippedSynced => {}
            TrackOutcome::MissingMetadata => self.errors += 1,
            TrackOutcome::Saved { .. } => {
                self.processed += 1;
                self.found += 1;
            }
            TrackOutcome::KeptExisting | TrackOutcome::WriteFailed => self.processed += 1,
            TrackOutcome::NotFound => {
                self.processed += 1;
                self.errors += 1;
            }
        }
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(60));
        println!("📊 Summary:");
        println!("  Total processed: {}", self.processed);
        println!("  Lyrics found: {} ✓", self.found);
        println!("  Not found/errors: {}", self.errors);
    }
}

/// How a single track ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// A `.lrc` was already there; no lookup was made.
    SkippedSynced,
    /// Artist or title could not be read; no lookup was made.
    MissingMetadata,
    Saved { path: PathBuf, replaced: bool },
    KeptExisting,
    NotFound,
    WriteFailed,
}

impl TrackOutcome {
    /// Whether the providers were queried for this track.
    pub fn touched_network(&self) -> bool {
        !matches!(self, Self::SkippedSynced | Self::MissingMetadata)
    }
}

/// Processes tracks one after another, pausing after each lookup.
pub struct Driver<'a, R: TagReader> {
    reader: &'a R,
    chain: &'a ProviderChain,
    delay: Duration,
}

impl<'a, R: TagReader> Driver<'a, R> {
    pub fn new(reader: &'a R, chain: &'a ProviderChain, delay: Duration) -> Self {
        Self {
            reader,
            chain,
            delay,
        }
    }

    pub fn run(&self, tracks: Vec<AudioTrack>) -> RunStats {
        let mut stats = RunStats::default();
        for track in tracks {
            let outcome = self.process(track);
            if let TrackOutcome::Saved { path, replaced } = &outcome {
                tracing::debug!(path = %path.display(), replaced, "lyrics saved");
            }
            stats.record(&outcome);
            if outcome.touched_network() && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        stats
    }

    pub fn process(&self, track: AudioTrack) -> TrackOutcome {
        println!("\n🎵 Processing: {} [{}]", track.file_name(), track.format);

        let state = sidecar::inspect(&track.path);
        if state == SidecarState::SyncedOnly {
            println!("  ⏭️  Skipping - {}", SkipReason::SyncedPresent);
            return TrackOutcome::SkippedSynced;
        }

        let tags = self.reader.read_tags(&track.path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to read tags");
            TrackTags::default()
        });
        let track = track.with_tags(tags);

        let Some((artist, title)) = track.query() else {
            println!("  ⚠️  Skipping - missing artist or title metadata");
            return TrackOutcome::MissingMetadata;
        };

        println!("  🔍 Fetching lyrics for: {artist} - {title}");
        let fetched = match self.chain.resolve(artist, title) {
            Some(found) => {
                let kind = if found.lyrics.synced { "synced" } else { "plain" };
                println!("  ✅ Found {kind} lyrics from {}!", found.provider);
                Some(found.lyrics)
            }
            None => {
                println!("  ❌ No lyrics found from any source");
                None
            }
        };

        self.apply(&track, decide(state, fetched))
    }

    fn apply(&self, track: &AudioTrack, action: Action) -> TrackOutcome {
        match action {
            Action::Skip(SkipReason::SyncedPresent) => TrackOutcome::SkippedSynced,
            Action::Skip(SkipReason::NoLyricsFound) => TrackOutcome::NotFound,
            Action::KeepExisting => {
                println!("  ⏭️  Keeping existing plain text lyrics");
                TrackOutcome::KeptExisting
            }
            Action::WriteNew(lyrics) => save(track, &lyrics, false),
            Action::ReplaceWithSynced(lyrics) => {
                println!("  🔄 Replacing plain text with synced lyrics...");
                let outcome = save(track, &lyrics, true);
                // The .txt goes only once the .lrc is safely on disk.
                if matches!(outcome, TrackOutcome::Saved { .. }) {
                    if let Err(e) = sidecar::remove_plain(&track.path) {
                        tracing::warn!(error = %e, "could not remove plain lyrics");
                    }
                }
                outcome
            }
        }
    }
}

fn save(track: &AudioTrack, lyrics: &crate::lyrics::LyricResult, replaced: bool) -> TrackOutcome {
    match sidecar::write_lyrics(&track.path, lyrics) {
        Ok(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!(
                "  ✓ Saved to: {name} ({})",
                lyrics.extension().to_ascii_uppercase()
            );
            TrackOutcome::Saved { path, replaced }
        }
        Err(e) => {
            println!("  Error saving lyrics: {e}");
            TrackOutcome::WriteFailed
        }
    }
}
