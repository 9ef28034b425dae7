mod projected_entry;

pub use projected_entry::{ImportableEntry, ProjectedEntry};
