use std::fs;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::AppError;
use crate::library::{LoftyTagReader, scan};
use crate::lyrics::{ProviderChain, build_client};

mod driver;
mod settings;

pub use driver::{Driver, RunStats, TrackOutcome};

/// Scan the requested directory and fetch lyrics for every audio file in it.
pub fn run(args: &Cli) -> Result<RunStats, AppError> {
    let settings = settings::load_settings(args.config.as_deref())?;

    let root = args.root();
    if !root.exists() {
        return Err(AppError::DirectoryNotFound(root));
    }
    let root = fs::canonicalize(&root).unwrap_or(root);

    let delay_secs = args.delay.unwrap_or(settings.fetch.delay_secs);
    let delay = Duration::try_from_secs_f64(delay_secs)
        .map_err(|e| AppError::InvalidConfig(format!("delay {delay_secs}: {e}")))?;
    let client = build_client(&settings.fetch).map_err(AppError::HttpClient)?;
    let chain = ProviderChain::standard(client, &settings.providers)?;

    println!("🔍 Searching for audio files in: {}", root.display());
    let tracks = scan(&root, &settings.library);
    if tracks.is_empty() {
        println!("❌ No audio files found");
        return Ok(RunStats::default());
    }

    println!(
        "📁 Found {} audio files (sources: {})\n",
        tracks.len(),
        chain.provider_names().join(", ")
    );
    println!("{}", "=".repeat(60));

    let stats = Driver::new(&LoftyTagReader, &chain, delay).run(tracks);
    stats.print_summary();
    Ok(stats)
}
