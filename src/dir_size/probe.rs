use std::path::Path;

use log::{debug, error};

use crate::command_runner::CommandRunner;

/// Produces raw `"<size>\t<path>"` lines for the target and its immediate
/// subdirectories.
pub trait SizeProbe {
    /// Never fails: problems are logged and yield an empty listing.
    fn probe(&mut self, target: &Path) -> Vec<String>;
}

/// Runs `du` one level deep with sizes in bytes.
pub struct DuProbe<R: CommandRunner> {
    runner: R,
    command: String,
    args: Vec<String>,
}

impl<R: CommandRunner> DuProbe<R> {
    pub fn new(runner: R) -> Self {
        Self::with_command(runner, "du", ["-d", "1", "-B1"])
    }

    /// `args` come before the target path, which is always last.
    pub fn with_command<I, S>(runner: R, command: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            runner,
            command: command.to_owned(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn into_runner(self) -> R {
        self.runner
    }
}

impl<R: CommandRunner> SizeProbe for DuProbe<R> {
    fn probe(&mut self, target: &Path) -> Vec<String> {
        let target = target.to_string_lossy();
        let mut args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.push(&target);

        let output = match self.runner.run(&self.command, args) {
            Ok(output) => output,
            Err(e) => {
                error!("failed to run {}: {e}", self.command);
                return Vec::new();
            }
        };
        if !output.status.success() {
            error!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
            return Vec::new();
        }

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_owned)
            .collect();
        debug!("{} reported {} entries for {target}", self.command, lines.len());
        lines
    }
}
