use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod error;
mod library;
mod logging;
mod lyrics;
mod reconcile;
mod runtime;
mod sidecar;

#[cfg(test)]
mod test_support;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    logging::init(args.verbose);

    println!("🎼 Lyric Fetcher\n");

    match runtime::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {e}");
            ExitCode::FAILURE
        }
    }
}
