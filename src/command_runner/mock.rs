use std::collections::VecDeque;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};

use super::CommandRunner;

// `None` in either field means the invocation is not checked against it.
pub struct MockCommandInput {
    pub cmd_name: Option<String>,
    pub args: Option<Vec<String>>,
}

impl MockCommandInput {
    pub fn new(cmd_name: &str, args: Vec<&str>) -> Self {
        Self {
            cmd_name: Some(cmd_name.to_owned()),
            args: Some(args.iter().map(|&s| s.into()).collect()),
        }
    }

    pub fn any() -> Self {
        Self {
            cmd_name: None,
            args: None,
        }
    }
}

pub struct MockCommandOutput {
    pub result: io::Result<Output>,
}

impl MockCommandOutput {
    /// `exit_code` is the process exit code, not the raw wait status.
    pub fn new(exit_code: i32, out: &str, err: &str) -> Self {
        Self {
            result: Ok(Output {
                status: ExitStatus::from_raw(exit_code << 8),
                stdout: out.as_bytes().to_vec(),
                stderr: err.as_bytes().to_vec(),
            }),
        }
    }

    pub fn spawn_error(kind: io::ErrorKind) -> Self {
        Self {
            result: Err(io::Error::from(kind)),
        }
    }
}

pub struct MockCommandRunner {
    expectations: VecDeque<(MockCommandInput, MockCommandOutput)>,
}

impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCommandRunner {
    pub fn new() -> Self {
        MockCommandRunner {
            expectations: VecDeque::new(),
        }
    }

    pub fn add_expectation(&mut self, inp: MockCommandInput, out: MockCommandOutput) {
        self.expectations.push_back((inp, out));
    }

    pub fn add_du_interaction(&mut self, target: &str, exit_code: i32, out: &str, err: &str) {
        self.add_expectation(
            MockCommandInput::new("du", vec!["-d", "1", "-B1", target]),
            MockCommandOutput::new(exit_code, out, err),
        );
    }

    pub fn add_pidof_interaction(&mut self, name: &str, exit_code: i32, out: &str) {
        self.add_expectation(
            MockCommandInput::new("pidof", vec![name]),
            MockCommandOutput::new(exit_code, out, ""),
        );
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&mut self, cmd_name: &str, args: Vec<&str>) -> io::Result<Output> {
        let (inp, out) = self
            .expectations
            .pop_front()
            .expect("unexpected command: expectation queue is empty");
        if let Some(inp_name) = inp.cmd_name {
            assert_eq!(cmd_name, inp_name);
        }
        if let Some(inp_args) = inp.args {
            assert_eq!(args, inp_args);
        }
        out.result
    }
}

impl Drop for MockCommandRunner {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            assert!(self.expectations.is_empty(), "unconsumed command expectations");
        }
    }
}
