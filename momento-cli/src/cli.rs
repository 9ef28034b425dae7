use clap::{Parser, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// momento-import — Import a Momento text export into Day One
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the `Export.txt` written by Momento.
    pub export: PathBuf,
    /// Directory holding the exported media. Defaults to the `Attachments` folder next to the export.
    #[arg(long, short, env = "MOMENTO_MEDIA_DIR")]
    pub media_dir: Option<PathBuf>,
    /// Parse and print the entries without importing anything.
    #[arg(long, short = 'n')]
    pub dry_run: bool,
    /// With `--dry-run`, print one line per entry instead of the full text.
    #[arg(long, short)]
    pub short: bool,
    /// Day One journal to import into. Overrides `journal` in config.toml.
    #[arg(long, short)]
    pub journal: Option<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Append log events to this file instead of stderr.
    #[arg(long, env = "MOMENTO_LOG_FILE")]
    pub log_file: Option<PathBuf>,
    /// Skip the macOS and dayone2 availability checks.
    #[arg(long)]
    pub skip_checks: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `auto` honours `NO_COLOR` and only colours a terminal.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
        }
    }
}
