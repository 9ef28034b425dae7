//! Decides which production of the export grammar a single line belongs to.
//!
//! The export has no explicit delimiters. Headers are recognised by a cheap length
//! check followed by a full pattern match, and metadata by a literal prefix. Headers
//! are always tried before prefixes.

use once_cell::sync::Lazy;
use regex::Regex;

pub const PLACE_PREFIX: &str = "At: ";
pub const PEOPLE_PREFIX: &str = "With: ";
pub const TAGS_PREFIX: &str = "Tags: ";
pub const MEDIA_PREFIX: &str = "Media: ";
pub const LIST_SEPARATOR: &str = ", ";

// Unanchored: the date value is the matched text, so stray whitespace around it is ignored.
static DATE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{1,2} [A-Za-z]{3,9} [0-9]{4}").expect("valid date regex"));
static TIME_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time regex"));

/// A classified export line. Borrowed values point into the line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportLine<'a> {
    /// `13 August 2002`, the matched text only. The line after it is a separator and
    /// must be skipped.
    DateHeader(&'a str),
    /// `13:45`. Starts a new entry.
    TimeHeader(&'a str),
    /// `At: Home: 1 Road Drive` carries `Home`.
    Place(&'a str),
    /// `With: Joe Bloggs, John Smith`
    People(Vec<&'a str>),
    /// `Tags: Journaling, First Entry`
    Tags(Vec<&'a str>),
    /// `Media: MEDIA_109.jpg` carries the bare file name.
    Media(&'a str),
    Body(&'a str),
}

pub fn is_date_candidate(line: &str) -> bool {
    (10..=17).contains(&line.chars().count())
}

pub fn is_time_candidate(line: &str) -> bool {
    line.chars().count() == 5
}

/// Classifies `line`; first match wins in the order date header, time header,
/// place, people, tags, media, body.
pub fn classify(line: &str) -> ExportLine<'_> {
    if is_date_candidate(line) {
        if let Some(m) = DATE_HEADER.find(line) {
            return ExportLine::DateHeader(m.as_str());
        }
    }
    if is_time_candidate(line) && TIME_HEADER.is_match(line) {
        return ExportLine::TimeHeader(line);
    }
    if let Some(rest) = line.strip_prefix(PLACE_PREFIX) {
        return ExportLine::Place(place_name(rest));
    }
    if let Some(rest) = line.strip_prefix(PEOPLE_PREFIX) {
        return ExportLine::People(split_list(rest));
    }
    if let Some(rest) = line.strip_prefix(TAGS_PREFIX) {
        return ExportLine::Tags(split_list(rest));
    }
    if let Some(rest) = line.strip_prefix(MEDIA_PREFIX) {
        return ExportLine::Media(rest.trim());
    }
    ExportLine::Body(line)
}

/// Everything after the first colon is an address or GPS suffix.
fn place_name(rest: &str) -> &str {
    let name = match rest.find(':') {
        Some(pos) => &rest[..pos],
        None => rest,
    };
    name.trim()
}

fn split_list(rest: &str) -> Vec<&str> {
    rest.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}
