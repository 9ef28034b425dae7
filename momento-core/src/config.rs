use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Config {
    /// Day One command line tool. Must be on `$PATH` unless an absolute path is given.
    pub dayone_bin: String,
    /// Target Day One journal. `None` lets Day One pick its default journal.
    pub journal: Option<String>,
    /// Zone handed to Day One alongside the timestamp. Export times are read as UTC.
    pub time_zone: String,
    /// Only media ending with this extension is attached. Day One does not accept video.
    pub photo_extension: String,
    /// Name of the attachments folder Momento writes next to `Export.txt`.
    pub media_dir_name: String,
    /// Entries imported before the importer pauses.
    pub batch_size: usize,
    pub batch_pause: Duration,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    dayone_bin: Option<String>,
    journal: Option<String>,
    time_zone: Option<String>,
    photo_extension: Option<String>,
    media_dir_name: Option<String>,
    batch_size: Option<usize>,
    batch_pause_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let photo_extension = file_config
            .photo_extension
            .map(|ext| Self::normalize_extension(&ext))
            .unwrap_or_else(|| ".jpg".to_string());

        Self {
            dayone_bin: file_config
                .dayone_bin
                .unwrap_or_else(|| "dayone2".to_string()),
            journal: file_config.journal.filter(|j| !j.trim().is_empty()),
            time_zone: file_config.time_zone.unwrap_or_else(|| "UTC".to_string()),
            photo_extension,
            media_dir_name: file_config
                .media_dir_name
                .unwrap_or_else(|| "Attachments".to_string()),
            batch_size: file_config.batch_size.filter(|n| *n > 0).unwrap_or(100),
            batch_pause: Duration::from_secs(file_config.batch_pause_secs.unwrap_or(10)),
        }
    }

    /// `jpg` and `.jpg` both mean `.jpg`.
    fn normalize_extension(ext: &str) -> String {
        let ext = ext.trim();
        if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{ext}")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("momento")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("momento").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "loading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
