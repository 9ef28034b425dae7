use crate::export::{ExportEntry, iso_timestamp};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// What an importer needs from an entry, independent of where the entry came from.
pub trait ImportableEntry {
    /// RFC3339 timestamp with an explicit offset.
    fn timestamp(&self) -> String;
    fn text(&self) -> &str;
    fn tags(&self) -> &[String];
    /// Media whose path ends with `extension` (e.g. `".jpg"`), in their original order.
    fn media(&self, extension: &str) -> Vec<&Path>;
}

/// An `ExportEntry` reshaped for the destination journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedEntry {
    pub timestamp: DateTime<Utc>,
    pub text: String,
    /// Tags, then people, then places. Duplicates across the three are kept.
    pub merged_tags: Vec<String>,
    pub media: Vec<PathBuf>,
}

impl ProjectedEntry {
    pub fn iso_timestamp(&self) -> String {
        iso_timestamp(&self.timestamp)
    }

    pub fn filtered_media(&self, extension: &str) -> Vec<&Path> {
        self.media
            .iter()
            .filter(|p| p.to_string_lossy().ends_with(extension))
            .map(PathBuf::as_path)
            .collect()
    }
}

impl From<&ExportEntry> for ProjectedEntry {
    fn from(entry: &ExportEntry) -> Self {
        let merged_tags = entry
            .tags
            .iter()
            .chain(&entry.people)
            .chain(&entry.places)
            .cloned()
            .collect();
        Self {
            timestamp: entry.timestamp,
            text: entry.body.clone(),
            merged_tags,
            media: entry.media.clone(),
        }
    }
}

impl ExportEntry {
    pub fn project(&self) -> ProjectedEntry {
        ProjectedEntry::from(self)
    }
}

impl ImportableEntry for ProjectedEntry {
    fn timestamp(&self) -> String {
        self.iso_timestamp()
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn tags(&self) -> &[String] {
        &self.merged_tags
    }

    fn media(&self, extension: &str) -> Vec<&Path> {
        self.filtered_media(extension)
    }
}
