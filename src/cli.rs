use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lyricfetch")]
#[command(author, version, about = "Fetch lyrics for audio files from the internet")]
#[command(after_help = "\
Supported formats: FLAC, MP3, M4A/ALAC, MP4

Examples:
  lyricfetch ~/Music
  lyricfetch /Volumes/Music/Albums --delay 1.5
  lyricfetch .

The directory is searched recursively. Artist and title are read from each
file's tags and looked up on LRCLIB, then lyrics.ovh. Synced lyrics are saved
as .lrc files, plain text as .txt files, next to the audio file.")]
pub struct Cli {
    /// Directory to search for audio files
    pub directory: PathBuf,

    /// Delay between API requests in seconds (default: 2.0, or fetch.delay_secs from the config)
    #[arg(short, long, value_parser = parse_delay)]
    pub delay: Option<f64>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The directory to scan, with a leading `~` expanded.
    pub fn root(&self) -> PathBuf {
        let home = std::env::var_os("HOME").map(PathBuf::from);
        let expanded = expand_home(&self.directory, home.as_deref());
        std::path::absolute(&expanded).unwrap_or(expanded)
    }
}

fn parse_delay(raw: &str) -> Result<f64, String> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| "delay must be a non-negative number of seconds within range".to_string())?;
    Ok(secs)
}

fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
