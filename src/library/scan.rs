use std::collections::HashSet;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{AudioFormat, AudioTrack};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// Recursively collect audio files under `dir`, sorted by path.
///
/// Files reachable through more than one path (symlinked directories) are
/// kept once, under the first path in sort order.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<AudioTrack> {
    let mut paths: Vec<_> = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_audio_file(path, settings))
        .collect();

    paths.sort();

    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(fs::canonicalize(path).unwrap_or_else(|_| path.clone())))
        .filter_map(|path| {
            let format = AudioFormat::from_path(&path)?;
            Some(AudioTrack::new(path, format))
        })
        .collect()
}
