use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SidecarError;
use crate::lyrics::LyricResult;

use super::state::{plain_path, sidecar_path};

/// Write `lyrics` next to `track` in one whole-file write, replacing any
/// sidecar of the same kind. Returns the path written.
pub fn write_lyrics(track: &Path, lyrics: &LyricResult) -> Result<PathBuf, SidecarError> {
    let path = sidecar_path(track, lyrics.synced);
    fs::write(&path, lyrics.text.as_bytes()).map_err(|source| SidecarError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Delete the plain-text sidecar of `track`. A missing file is not an error.
pub fn remove_plain(track: &Path) -> Result<(), SidecarError> {
    let path = plain_path(track);
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(SidecarError::Remove { path, source }),
    }
}
