use crate::errors::ParseError;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Momento writes its text export as a `.txt` file.
pub fn validate_export_path(path: &Path) -> Result<(), ParseError> {
    if is_text_export(path) {
        Ok(())
    } else {
        Err(ParseError::UnsupportedFile {
            path: path.to_path_buf(),
        })
    }
}

/// The attachments directory Momento places next to the export file,
/// e.g. `Momento Export 2017-08-13/Attachments`.
pub fn default_media_dir(export_path: &Path, dir_name: &str) -> PathBuf {
    match export_path.parent() {
        Some(parent) => parent.join(dir_name),
        None => PathBuf::from(dir_name),
    }
}

fn is_text_export(p: &Path) -> bool {
    p.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
