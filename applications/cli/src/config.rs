/// Program configuration
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "medialib.toml";

/// Prefix for environment overrides, e.g. `MEDIALIB_SHOWCASE__USERNAME`
pub const ENV_PREFIX: &str = "MEDIALIB";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log")]
    pub log: LogSettings,

    #[serde(default = "default_showcase")]
    pub showcase: ShowcaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowcaseSettings {
    /// Name of the demo user
    #[serde(default = "default_username")]
    pub username: String,

    /// Name of the standalone playlist that gets copied
    #[serde(default = "default_playlist_name")]
    pub playlist_name: String,
}

impl AppConfig {
    /// Load configuration from `medialib.toml` and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from the given file (if it exists) and environment
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            settings = settings.add_source(config::File::from(PathBuf::from(path)));
        }

        // Override with environment variables (prefixed with MEDIALIB_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }
}

impl ShowcaseSettings {
    /// Validate showcase settings
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(CliError::Config(
                "showcase username must not be empty (set MEDIALIB_SHOWCASE__USERNAME)".to_string(),
            ));
        }

        if self.playlist_name.trim().is_empty() {
            return Err(CliError::Config(
                "showcase playlist name must not be empty (set MEDIALIB_SHOWCASE__PLAYLIST_NAME)"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_log() -> LogSettings {
    LogSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "medialib=info,medialib_cli=info,medialib_core=info".to_string()
}

fn default_showcase() -> ShowcaseSettings {
    ShowcaseSettings {
        username: default_username(),
        playlist_name: default_playlist_name(),
    }
}

fn default_username() -> String {
    "Alice".to_string()
}

fn default_playlist_name() -> String {
    "My Playlist".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: default_log(),
            showcase: default_showcase(),
        }
    }
}
