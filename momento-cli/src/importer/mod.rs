mod importer;
mod runner;

pub use importer::{ImportOptions, ImportSummary, Importer};
pub use runner::DayOneCli;
