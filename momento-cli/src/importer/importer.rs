//! Feeds projected entries to Day One one at a time.

use super::runner::CommandRunner;
use momento_core::{Config, DayOneOptions, ImportableEntry, build_new_entry_args};
use std::{
    thread,
    time::{Duration, Instant},
};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub dayone_bin: String,
    pub dayone: DayOneOptions,
    pub batch_size: usize,
    pub batch_pause: Duration,
}

impl From<&Config> for ImportOptions {
    fn from(config: &Config) -> Self {
        Self {
            dayone_bin: config.dayone_bin.clone(),
            dayone: DayOneOptions::from(config),
            batch_size: config.batch_size.max(1),
            batch_pause: config.batch_pause,
        }
    }
}

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub imported: usize,
    /// Timestamps of the entries Day One rejected.
    pub failed: Vec<String>,
    pub elapsed: Duration,
}

pub struct Importer<R: CommandRunner> {
    runner: R,
    options: ImportOptions,
}

impl<R: CommandRunner> Importer<R> {
    pub fn new(runner: R, options: ImportOptions) -> Self {
        Self { runner, options }
    }

    /// Imports `entries` in order. A rejected entry is logged and counted, and the
    /// import carries on with the next one.
    ///
    /// `on_progress` is called with `(current, total)` before each entry is sent.
    /// After every `batch_size` entries the importer sleeps for `batch_pause` so
    /// Day One's sync can keep up.
    pub fn import<E: ImportableEntry>(
        &self,
        entries: &[E],
        mut on_progress: impl FnMut(usize, usize),
    ) -> ImportSummary {
        let total = entries.len();
        let start = Instant::now();
        let mut summary = ImportSummary::default();
        info!(entries = total, "Day One import starting");

        for (i, entry) in entries.iter().enumerate() {
            on_progress(i + 1, total);

            let args = build_new_entry_args(entry, &self.options.dayone);
            match self.runner.run(&self.options.dayone_bin, &args) {
                Ok(outcome) if outcome.success => summary.imported += 1,
                Ok(outcome) => {
                    warn!(
                        date = %entry.timestamp(),
                        status = %outcome.status,
                        output = %outcome.output,
                        "entry could not be imported"
                    );
                    summary.failed.push(entry.timestamp());
                }
                Err(e) => {
                    warn!(date = %entry.timestamp(), error = %e, "entry could not be imported");
                    summary.failed.push(entry.timestamp());
                }
            }

            let done = i + 1;
            if done % self.options.batch_size == 0 && done < total {
                thread::sleep(self.options.batch_pause);
            }
        }

        summary.elapsed = start.elapsed();
        info!(
            imported = summary.imported,
            errors = summary.failed.len(),
            elapsed = ?summary.elapsed,
            "Day One import complete"
        );
        summary
    }
}
