use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal conditions that abort an export parse.
///
/// There is no variant for unrecognised lines: anything that is not a header or
/// metadata line is body text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A date header and a time header could not be combined into a calendar instant.
    /// Both literals are kept so the offending part of the export can be found.
    #[error("malformed timestamp: date `{date}`, time `{time}`")]
    MalformedTimestamp { date: String, time: String },

    #[error("{} is not a Momento text export (expected a .txt file)", .path.display())]
    UnsupportedFile { path: PathBuf },

    #[error("failed to read export: {0}")]
    Io(#[from] io::Error),
}
