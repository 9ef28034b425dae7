pub mod config;
pub mod dayone;
pub mod errors;
pub mod export;
pub mod months;
pub mod projection;

#[cfg(test)]
#[path = "tests/common.rs"]
mod tests;

pub use config::Config;
pub use dayone::{DayOneOptions, build_new_entry_args};
pub use errors::ParseError;
pub use export::{
    ExportEntry, parse_export, parse_export_file, parse_export_str, default_media_dir,
    validate_export_path,
};
pub use projection::{ImportableEntry, ProjectedEntry};
