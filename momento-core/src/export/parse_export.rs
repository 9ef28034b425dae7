//! Parses a Momento text export into structured `ExportEntry` values.

use super::classify::{ExportLine, classify};
use super::date_utils::resolve_timestamp;
use super::export_entry::{ExportEntry, PendingEntry};
use super::export_paths::validate_export_path;
use crate::errors::ParseError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;
use tracing::{debug, info};

const BOM: char = '\u{FEFF}';

/// Parses a whole export in one pass.
///
/// The export looks like this:
/// - A date header (`13 August 2002`) followed by a separator line, which is skipped.
/// - One or more entries, each starting at a time header (`13:45`).
/// - Inside an entry, `At: `, `With: `, `Tags: ` and `Media: ` lines carry metadata and
///   every other line is body text.
///
/// # Arguments
///
/// * `reader` - The export text. A leading UTF-8 byte-order-mark is discarded.
/// * `media_root` - Directory that `Media: ` file names are joined onto.
///
/// # Returns
///
/// Entries in the order they appear. An empty `Vec` is a valid, empty export. Any
/// date/time pair that does not resolve aborts the whole parse.
pub fn parse_export<R: BufRead>(
    reader: R,
    media_root: &Path,
) -> Result<Vec<ExportEntry>, ParseError> {
    let mut entries = Vec::new();
    let mut current_date = String::new();
    let mut pending = PendingEntry::default();
    let mut body = String::new();

    let mut lines = reader.lines();
    let first = lines.next().map(|line| line.map(strip_bom));
    let mut lines = first.into_iter().chain(lines);
    while let Some(line) = lines.next() {
        let line = line?;
        match classify(&line) {
            ExportLine::DateHeader(date) => {
                current_date = date.to_string();
                // The separator under a date header is never validated.
                if let Some(separator) = lines.next() {
                    separator?;
                }
            }
            ExportLine::TimeHeader(time) => {
                let timestamp = resolve_timestamp(&current_date, time)?;
                let finished = std::mem::replace(&mut pending, PendingEntry::starting_at(timestamp));
                push_finished(&mut entries, finished, &body);
                body.clear();
            }
            ExportLine::Place(place) => pending.push_place(place),
            ExportLine::People(people) => pending.set_people(&people),
            ExportLine::Tags(tags) => pending.set_tags(&tags),
            ExportLine::Media(file_name) => pending.push_media(media_root, file_name),
            ExportLine::Body(text) => {
                body.push_str(text);
                body.push('\n');
            }
        }
    }
    push_finished(&mut entries, pending, &body);

    info!(entries = entries.len(), "export parsed");
    Ok(entries)
}

/// Parses an export already held in memory.
pub fn parse_export_str(content: &str, media_root: &Path) -> Result<Vec<ExportEntry>, ParseError> {
    parse_export(Cursor::new(content.as_bytes()), media_root)
}

/// Opens and parses the export at `path`. Only `.txt` exports are accepted.
pub fn parse_export_file(path: &Path, media_root: &Path) -> Result<Vec<ExportEntry>, ParseError> {
    validate_export_path(path)?;
    let file = File::open(path)?;
    debug!(path = %path.display(), "reading export");
    parse_export(BufReader::new(file), media_root)
}

fn push_finished(entries: &mut Vec<ExportEntry>, pending: PendingEntry, body: &str) {
    if let Some(entry) = pending.finish(body) {
        debug!(timestamp = %entry.timestamp, "entry parsed");
        entries.push(entry);
    }
}

/// Applied to the first decoded line only, so it works however the reader
/// splits the stream into reads.
fn strip_bom(line: String) -> String {
    match line.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{SAMPLE_EXPORT, sample_media_root};
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    #[test]
    fn parse_sample_export() {
        let root = sample_media_root();
        let entries = parse_export_str(SAMPLE_EXPORT, &root).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(
            entry.timestamp,
            Utc.with_ymd_and_hms(2002, 8, 13, 13, 45, 0).unwrap()
        );
        assert_eq!(entry.body, "Hello, Day One!");
        assert_eq!(entry.people, vec!["Joe Bloggs", "John Smith"]);
        assert_eq!(entry.places, vec!["Home", "Work"]);
        assert_eq!(entry.tags, vec!["Journaling", "First Entry"]);
        assert_eq!(entry.media, vec![root.join("MEDIA_109.jpg")]);
    }

    #[test]
    fn one_entry_per_time_header_and_last_is_flushed() {
        let content = "13 August 2002
==========

08:00
Morning.
12:30
Lunch.

14 August 2002
==========

21:15
Night.
Second line.";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].body, "Morning.");
        assert_eq!(entries[1].body, "Lunch.");
        assert_eq!(entries[2].body, "Night.\nSecond line.");
        assert_eq!(
            entries[2].timestamp,
            Utc.with_ymd_and_hms(2002, 8, 14, 21, 15, 0).unwrap()
        );
    }

    #[test]
    fn entry_with_no_content() {
        let content = "13 August 2002\n==============\n\n13:45";
        let entries = parse_export_str(content, Path::new("/dev/null")).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert!(entry.body.is_empty());
        assert!(entry.people.is_empty());
        assert!(entry.places.is_empty());
        assert!(entry.tags.is_empty());
        assert!(entry.media.is_empty());
    }

    #[test]
    fn empty_export_is_not_an_error() {
        let entries = parse_export_str("", Path::new("/media")).unwrap();
        assert!(entries.is_empty());

        let entries = parse_export_str("13 August 2002\n==========\n", Path::new("/media")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn later_tags_line_wins() {
        let content = "13 August 2002\n==========\n\n13:45\nTags: one, two\nTags: three, four";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries[0].tags, vec!["three", "four"]);
    }

    #[test]
    fn later_people_line_wins() {
        let content = "13 August 2002\n==========\n\n13:45\nWith: Ann\nWith: Bob, Cid";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries[0].people, vec!["Bob", "Cid"]);
    }

    #[test]
    fn places_accumulate_in_order() {
        let content = "13 August 2002\n==========\n\n13:45\nAt: Home: 1 Road\nAt: Work";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries[0].places, vec!["Home", "Work"]);
    }

    #[test]
    fn metadata_does_not_leak_between_entries() {
        let content = "13 August 2002\n==========\n\n08:00\nTags: first\nMedia: a.jpg\n09:00\nText";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1].tags.is_empty());
        assert!(entries[1].media.is_empty());
        assert_eq!(entries[1].body, "Text");
    }

    #[test]
    fn separator_is_skipped_whatever_it_contains() {
        let content = "13 August 2002\nnot a row of equals signs\n13:45\nBody";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, "Body");
    }

    #[test]
    fn text_before_first_time_header_is_dropped() {
        let content = "Preamble\nTags: orphan\n13 August 2002\n==========\n\n13:45\nBody";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, "Body");
        assert!(entries[0].tags.is_empty());
    }

    #[test]
    fn body_keeps_inner_blank_lines_and_crlf_is_stripped() {
        let content = "13 August 2002\r\n==========\r\n\r\n13:45\r\nOne\r\n\r\nTwo\r\n";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries[0].body, "One\n\nTwo");
    }

    #[test]
    fn bom_is_discarded() {
        let with_bom = format!("\u{FEFF}{SAMPLE_EXPORT}");
        let root = sample_media_root();
        assert_eq!(
            parse_export_str(&with_bom, &root).unwrap(),
            parse_export_str(SAMPLE_EXPORT, &root).unwrap()
        );
    }

    #[test]
    fn bom_only_stream_is_empty() {
        let bom = vec![0xEF, 0xBB, 0xBF];
        assert!(parse_export(Cursor::new(bom), Path::new("/")).unwrap().is_empty());
    }

    /// Hands out a single byte per `read`, like a slow pipe.
    struct Trickle(Cursor<Vec<u8>>);

    impl io::Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let end = buf.len().min(1);
            io::Read::read(&mut self.0, &mut buf[..end])
        }
    }

    #[test]
    fn bom_is_discarded_when_stream_arrives_byte_by_byte() {
        let with_bom = format!("{BOM}{SAMPLE_EXPORT}").into_bytes();
        let root = sample_media_root();
        let entries = parse_export(BufReader::new(Trickle(Cursor::new(with_bom))), &root).unwrap();
        assert_eq!(entries, parse_export_str(SAMPLE_EXPORT, &root).unwrap());
    }

    #[test]
    fn bom_is_only_stripped_at_stream_start() {
        let content = format!("13 August 2002\n==========\n\n13:45\n{BOM}Body");
        let entries = parse_export_str(&content, Path::new("/media")).unwrap();
        assert_eq!(entries[0].body, format!("{BOM}Body"));
    }

    #[test]
    fn date_header_with_trailing_whitespace_starts_a_new_day() {
        let content = "13 August 2002\n==========\n\n08:00\nOne\n\n14 August 2002 \n==========\n\n09:00\nTwo";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].body, "One");
        assert_eq!(
            entries[1].timestamp,
            Utc.with_ymd_and_hms(2002, 8, 14, 9, 0, 0).unwrap()
        );
        assert_eq!(entries[1].body, "Two");
    }

    #[test]
    fn date_header_on_last_line_without_separator() {
        let content = "13 August 2002\n==========\n\n13:45\nBody\n14 August 2002";
        let entries = parse_export_str(content, Path::new("/media")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, "Body");

        assert!(parse_export_str("14 August 2002", Path::new("/media")).unwrap().is_empty());
    }

    #[test]
    fn bad_date_is_fatal() {
        let content = "32 NotAMonth 2002\n==========\n\n13:45\n";
        let err = parse_export_str(content, Path::new("/media")).unwrap_err();
        match err {
            ParseError::MalformedTimestamp { date, time } => {
                assert_eq!(date, "32 NotAMonth 2002");
                assert_eq!(time, "13:45");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unknown_month_is_fatal() {
        let content = "13 Augusted 2002\n==============\n\n13:45";
        assert!(matches!(
            parse_export_str(content, Path::new("/dev/null")),
            Err(ParseError::MalformedTimestamp { .. })
        ));
    }

    #[test]
    fn time_header_before_any_date_is_fatal() {
        let content = "13:45\nBody";
        assert!(matches!(
            parse_export_str(content, Path::new("/media")),
            Err(ParseError::MalformedTimestamp { .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_an_io_failure() {
        let bytes: Vec<u8> = b"13 August 2002\n==========\n\n13:45\n\xFF\xFE\n".to_vec();
        let err = parse_export(Cursor::new(bytes), Path::new("/media")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn parse_file_rejects_other_extensions() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Export.csv");
        std::fs::write(&path, SAMPLE_EXPORT).unwrap();
        let err = parse_export_file(&path, tmp.path()).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFile { .. }));
    }

    #[test]
    fn parse_file_reads_txt_export() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Export.txt");
        std::fs::write(&path, SAMPLE_EXPORT).unwrap();
        let media = tmp.path().join("Attachments");
        let entries = parse_export_file(&path, &media).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].media, vec![PathBuf::from(media.join("MEDIA_109.jpg"))]);
    }

    #[test]
    fn parse_file_missing_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = parse_export_file(&tmp.path().join("missing.txt"), tmp.path()).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
