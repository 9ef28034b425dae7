mod classify;
mod date_utils;
mod export_entry;
mod export_paths;
mod parse_export;

pub use classify::{ExportLine, classify};
pub use date_utils::{iso_timestamp, resolve_timestamp};
pub use export_entry::ExportEntry;
pub use export_paths::{default_media_dir, validate_export_path};
pub use parse_export::{parse_export, parse_export_file, parse_export_str};
