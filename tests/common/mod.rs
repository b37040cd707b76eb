// Shared fixtures for integration tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use duim::command_runner::CommandRunner;
use tempfile::TempDir;

/// Replays canned outputs in order and records what was asked for.
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: VecDeque<Output>,
    pub calls: Vec<(String, Vec<String>)>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.outputs.push_back(Output {
            status: ExitStatus::from_raw(exit_code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        });
        self
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&mut self, cmd_name: &str, args: Vec<&str>) -> io::Result<Output> {
        self.calls
            .push((cmd_name.to_owned(), args.iter().map(|a| a.to_string()).collect()));
        self.outputs
            .pop_front()
            .ok_or_else(|| io::Error::other("no scripted output left"))
    }
}

/// Create a directory tree where each `(subdir, bytes)` holds one file of
/// that many bytes.
pub fn create_tree(layout: &[(&str, usize)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_path_buf();
    for (name, bytes) in layout {
        let sub = root.join(name);
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("data.bin"), vec![0xA5u8; *bytes]).unwrap();
    }
    (dir, root)
}

pub fn report_paths(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|l| l.contains(" % ["))
        .filter_map(|l| l.rsplit_once(' ').map(|(_, path)| path))
        .collect()
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
