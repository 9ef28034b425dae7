use crate::Config;
use std::path::PathBuf;
use std::time::Duration;

/// The export used throughout the tests: one day, one entry, every kind of metadata.
pub const SAMPLE_EXPORT: &str = "13 August 2002
==========

13:45
Hello, Day One!
With: Joe Bloggs, John Smith
At: Home: 1 Road Drive, Country (0.0, -0.0)
At: Work
Tags: Journaling, First Entry
Media: MEDIA_109.jpg";

pub fn sample_media_root() -> PathBuf {
    PathBuf::from("/exports/Momento Export/Attachments")
}

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config() -> Config {
    Config {
        dayone_bin: "dayone2".to_string(),
        journal: None,
        time_zone: "UTC".to_string(),
        photo_extension: ".jpg".to_string(),
        media_dir_name: "Attachments".to_string(),
        batch_size: 100,
        batch_pause: Duration::from_secs(0),
    }
}
