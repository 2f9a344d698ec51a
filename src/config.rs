//! Settings loading.
//!
//! Defaults reproduce the original deployment (backend at
//! `http://prometheus:9090`, 15 second refresh). An optional TOML file and
//! `PROMVIEW_*` environment variables can override them; CLI flags are
//! applied on top by the binary.

use std::path::{Path, PathBuf};

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default backend base URL.
pub const DEFAULT_ENDPOINT: &str = "http://prometheus:9090";

/// Default poll interval in seconds.
pub const DEFAULT_REFRESH_SECS: u64 = 15;

/// Resolved settings for one run.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Backend base URL; the query path and expression are fixed.
    pub endpoint: String,
    /// Poll interval in seconds.
    pub refresh_secs: u64,
    /// Append the operational log to this file. The TUI owns the terminal,
    /// so without a file the log is discarded.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from defaults, an optional file, and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("refresh_secs", DEFAULT_REFRESH_SECS)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(Environment::with_prefix("PROMVIEW").try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.endpoint, "http://prometheus:9090");
        assert_eq!(settings.refresh_secs, 15);
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "endpoint = \"http://metrics.local:9090\"").unwrap();
        writeln!(file, "refresh_secs = 30").unwrap();
        file.flush().unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.endpoint, "http://metrics.local:9090");
        assert_eq!(settings.refresh_secs, 30);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/promview.toml"))).is_err());
    }
}
