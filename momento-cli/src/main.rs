mod cli;
mod importer;
mod logging;
mod preflight;
mod render;

use anyhow::{Result, bail};
use clap::Parser;
use cli::Cli;
use importer::{DayOneCli, ImportOptions, Importer};
use momento_core::{Config, ExportEntry, ProjectedEntry, default_media_dir, parse_export_file};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("momento-import: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref())?;

    let mut config = Config::load()?;
    if let Some(journal) = &cli.journal {
        config.journal = Some(journal.clone());
    }
    debug!(?config, "configuration loaded");

    let renderer = Renderer::new(RenderOptions {
        use_color: cli.color.enabled(),
        short_mode: cli.short,
        photo_extension: config.photo_extension.clone(),
    });

    preflight::check_export(&cli.export)?;
    let media_dir = cli
        .media_dir
        .clone()
        .unwrap_or_else(|| default_media_dir(&cli.export, &config.media_dir_name));
    info!(export = %cli.export.display(), media = %media_dir.display(), "parsing export");

    let entries = parse_export_file(&cli.export, &media_dir)?;
    let projected: Vec<ProjectedEntry> = entries.iter().map(ExportEntry::project).collect();
    if projected.is_empty() {
        renderer.print_info(&format!("No entries found in {}.", cli.export.display()));
        return Ok(());
    }
    renderer.print_info(&format!("{} entries found.", projected.len()));

    if cli.dry_run {
        renderer.print_entries(&entries);
        return Ok(());
    }

    if !cli.skip_checks {
        preflight::check_platform()?;
        preflight::check_tool(&config.dayone_bin)?;
    }

    let importer = Importer::new(DayOneCli, ImportOptions::from(&config));
    let summary = importer.import(&projected, |current, total| {
        renderer.print_progress(current, total)
    });
    renderer.print_summary(&summary);

    if !summary.failed.is_empty() {
        bail!(
            "{} of {} entries could not be imported",
            summary.failed.len(),
            projected.len()
        );
    }
    Ok(())
}
