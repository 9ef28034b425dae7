//! Builds the argument list for `dayone2 new`.

use crate::config::Config;
use crate::projection::ImportableEntry;

#[derive(Debug, Clone)]
pub struct DayOneOptions {
    pub time_zone: String,
    pub journal: Option<String>,
    pub photo_extension: String,
}

impl From<&Config> for DayOneOptions {
    fn from(config: &Config) -> Self {
        Self {
            time_zone: config.time_zone.clone(),
            journal: config.journal.clone(),
            photo_extension: config.photo_extension.clone(),
        }
    }
}

/// Returns the arguments for one `dayone2 new` call, e.g.
/// `new <text> --isoDate <ts> --time-zone UTC --tags a b --photos p.jpg --no-stdin`.
///
/// `--tags` and `--photos` are left out when there is nothing to pass. Only media
/// matching `photo_extension` is attached.
pub fn build_new_entry_args(entry: &impl ImportableEntry, options: &DayOneOptions) -> Vec<String> {
    let mut args = vec![
        "new".to_string(),
        entry.text().to_string(),
        "--isoDate".to_string(),
        entry.timestamp(),
        "--time-zone".to_string(),
        options.time_zone.clone(),
    ];

    if let Some(journal) = &options.journal {
        args.push("--journal".to_string());
        args.push(journal.clone());
    }

    let tags = entry.tags();
    if !tags.is_empty() {
        args.push("--tags".to_string());
        args.extend(tags.iter().cloned());
    }

    let photos = entry.media(&options.photo_extension);
    if !photos.is_empty() {
        args.push("--photos".to_string());
        args.extend(photos.iter().map(|p| p.display().to_string()));
    }

    // Otherwise dayone2 waits for text on stdin.
    args.push("--no-stdin".to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::parse_export_str;
    use crate::tests::{SAMPLE_EXPORT, mk_config, sample_media_root};
    use std::path::Path;

    fn options() -> DayOneOptions {
        DayOneOptions::from(&mk_config())
    }

    #[test]
    fn sample_entry_args() {
        let root = sample_media_root();
        let entry = parse_export_str(SAMPLE_EXPORT, &root).unwrap()[0].project();
        let args = build_new_entry_args(&entry, &options());
        let photo = root.join("MEDIA_109.jpg").display().to_string();
        assert_eq!(
            args,
            vec![
                "new",
                "Hello, Day One!",
                "--isoDate",
                "2002-08-13T13:45:00Z",
                "--time-zone",
                "UTC",
                "--tags",
                "Journaling",
                "First Entry",
                "Joe Bloggs",
                "John Smith",
                "Home",
                "Work",
                "--photos",
                photo.as_str(),
                "--no-stdin",
            ]
        );
    }

    #[test]
    fn bare_entry_skips_tags_and_photos() {
        let content = "13 August 2002\n==========\n\n13:45\nJust text\nMedia: clip.mp4";
        let entry = parse_export_str(content, Path::new("/m")).unwrap()[0].project();
        let args = build_new_entry_args(&entry, &options());
        assert!(!args.contains(&"--tags".to_string()));
        assert!(!args.contains(&"--photos".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("--no-stdin"));
    }

    #[test]
    fn journal_is_passed_when_configured() {
        let content = "13 August 2002\n==========\n\n13:45\nText";
        let entry = parse_export_str(content, Path::new("/m")).unwrap()[0].project();
        let mut opts = options();
        opts.journal = Some("Momento".to_string());
        let args = build_new_entry_args(&entry, &opts);
        let pos = args.iter().position(|a| a == "--journal").unwrap();
        assert_eq!(args[pos + 1], "Momento");
    }
}
