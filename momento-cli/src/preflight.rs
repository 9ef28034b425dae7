//! Checks run before anything is handed to Day One.

use anyhow::{Result, bail};
use momento_core::validate_export_path;
use std::{
    io::ErrorKind,
    path::Path,
    process::{Command, Stdio},
};

/// The Day One command line tool only ships for macOS.
pub fn check_platform() -> Result<()> {
    if !cfg!(target_os = "macos") {
        bail!("macOS is required: the Day One command line tool is only available there");
    }
    Ok(())
}

/// Makes sure `bin` can be launched. Its exit status is not inspected.
pub fn check_tool(bin: &str) -> Result<()> {
    let launched = Command::new(bin)
        .arg("--help")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match launched {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => bail!(
            "`{bin}` not found. Install the Day One command line tools (Day One > Install Command Line Tools) or set `dayone_bin` in config.toml"
        ),
        Err(e) => bail!("could not launch `{bin}`: {e}"),
    }
}

pub fn check_export(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("export not found at {}", path.display());
    }
    if !path.is_file() {
        bail!("{} is not a file", path.display());
    }
    validate_export_path(path)?;
    Ok(())
}
