use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// One journal entry recovered from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub timestamp: DateTime<Utc>,
    pub body: String,
    /// Unique names in order of appearance.
    pub people: Vec<String>,
    pub places: Vec<String>,
    pub tags: Vec<String>,
    /// Media file names joined onto the media root.
    pub media: Vec<PathBuf>,
}

/// The accumulator the parser fills in while it walks the lines of one entry.
///
/// Lines seen before the first time header land in a pending entry without a
/// timestamp, which is never emitted.
#[derive(Debug, Default)]
pub(crate) struct PendingEntry {
    pub timestamp: Option<DateTime<Utc>>,
    pub people: Vec<String>,
    pub places: Vec<String>,
    pub tags: Vec<String>,
    pub media: Vec<PathBuf>,
}

impl PendingEntry {
    pub fn starting_at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..Default::default()
        }
    }

    pub fn push_place(&mut self, place: &str) {
        self.places.push(place.to_string());
    }

    /// A later `With:` line replaces the earlier one.
    pub fn set_people(&mut self, people: &[&str]) {
        self.people.clear();
        for name in people {
            if !self.people.iter().any(|p| p == name) {
                self.people.push(name.to_string());
            }
        }
    }

    /// A later `Tags:` line replaces the earlier one.
    pub fn set_tags(&mut self, tags: &[&str]) {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
    }

    pub fn push_media(&mut self, media_root: &Path, file_name: &str) {
        self.media.push(media_root.join(file_name));
    }

    /// Closes the entry with its accumulated body. Returns `None` for an entry that
    /// never received a timestamp.
    pub fn finish(self, body: &str) -> Option<ExportEntry> {
        let timestamp = self.timestamp?;
        Some(ExportEntry {
            timestamp,
            body: body.trim().to_string(),
            people: self.people,
            places: self.places,
            tags: self.tags,
            media: self.media,
        })
    }
}
