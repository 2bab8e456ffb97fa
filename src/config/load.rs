use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::lyrics::parse_base_url;

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `LYRICFETCH__`) over an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and an optional config file.
    ///
    /// An `explicit` path (from `--config`) must exist; the resolved default path
    /// is allowed to be missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let config_path = explicit
            .map(Path::to_path_buf)
            .or_else(resolve_config_path);

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder
                .add_source(::config::File::from(path.as_path()).required(explicit.is_some()));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("LYRICFETCH")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if Duration::try_from_secs_f64(self.fetch.delay_secs).is_err() {
            return Err("fetch.delay_secs must be a non-negative number within range".to_string());
        }
        if self.fetch.timeout_secs == 0 {
            return Err("fetch.timeout_secs must be >= 1".to_string());
        }
        if self
            .library
            .extensions
            .iter()
            .all(|e| e.trim().trim_start_matches('.').is_empty())
        {
            return Err("library.extensions must name at least one extension".to_string());
        }
        parse_base_url(&self.providers.lrclib_url)
            .map_err(|e| format!("providers.lrclib_url {e}"))?;
        parse_base_url(&self.providers.lyrics_ovh_url)
            .map_err(|e| format!("providers.lyrics_ovh_url {e}"))?;
        Ok(())
    }
}

/// Resolve the config path from `LYRICFETCH_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("LYRICFETCH_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/lyricfetch/config.toml`
/// or `~/.config/lyricfetch/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("lyricfetch").join("config.toml"))
}
