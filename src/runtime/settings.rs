use std::path::Path;

use crate::config;
use crate::error::AppError;

/// Load settings, falling back to defaults when the implicit config is
/// broken. A config passed explicitly with `--config` must load and validate.
pub fn load_settings(explicit: Option<&Path>) -> Result<config::Settings, AppError> {
    match config::Settings::load(explicit) {
        Ok(s) => match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) if explicit.is_some() => Err(AppError::InvalidConfig(msg)),
            Err(msg) => {
                eprintln!("lyricfetch: invalid config, using defaults: {msg}");
                Ok(config::Settings::default())
            }
        },
        Err(e) if explicit.is_some() => Err(AppError::Config(e)),
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            eprintln!("lyricfetch: failed to load config, using defaults: {e}");
            Ok(config::Settings::default())
        }
    }
}
