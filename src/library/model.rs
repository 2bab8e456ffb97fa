use std::fmt;
use std::path::{Path, PathBuf};

/// Container format of a track, derived from its file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioFormat {
    Flac,
    Mp3,
    /// MPEG-4 audio, usually AAC or ALAC.
    M4a,
    Mp4,
    /// Any other extension enabled through `library.extensions`.
    Other(String),
}

impl AudioFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        let format = match ext.as_str() {
            "flac" => Self::Flac,
            "mp3" => Self::Mp3,
            "m4a" => Self::M4a,
            "mp4" => Self::Mp4,
            "" => return None,
            _ => Self::Other(ext),
        };
        Some(format)
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flac => f.write_str("flac"),
            Self::Mp3 => f.write_str("mp3"),
            Self::M4a => f.write_str("m4a"),
            Self::Mp4 => f.write_str("mp4"),
            Self::Other(ext) => f.write_str(ext),
        }
    }
}

/// Artist and title as read from a file's tags. Blank values are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: Option<String>,
    pub title: Option<String>,
}

impl TrackTags {
    pub fn new(artist: Option<&str>, title: Option<&str>) -> Self {
        Self {
            artist: non_blank(artist),
            title: non_blank(title),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone)]
pub struct AudioTrack {
    pub path: PathBuf,
    pub format: AudioFormat,
    pub artist: Option<String>,
    pub title: Option<String>,
}

impl AudioTrack {
    pub fn new(path: PathBuf, format: AudioFormat) -> Self {
        Self {
            path,
            format,
            artist: None,
            title: None,
        }
    }

    pub fn with_tags(self, tags: TrackTags) -> Self {
        Self {
            artist: tags.artist,
            title: tags.title,
            ..self
        }
    }

    /// `(artist, title)` when both are known, otherwise `None`.
    pub fn query(&self) -> Option<(&str, &str)> {
        Some((self.artist.as_deref()?, self.title.as_deref()?))
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
