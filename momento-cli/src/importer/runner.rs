use std::{io, process::Command};

/// What came back from one external command.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub success: bool,
    pub status: String,
    /// stdout followed by stderr.
    pub output: String,
}

/// Runs external commands on behalf of the importer.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutcome>;
}

/// Runs the real `dayone2` binary.
pub struct DayOneCli;

impl CommandRunner for DayOneCli {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutcome> {
        let output = Command::new(program).args(args).output()?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(CommandOutcome {
            success: output.status.success(),
            status: output.status.to_string(),
            output: combined.trim().to_string(),
        })
    }
}
