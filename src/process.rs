use log::{debug, error, warn};

use crate::command_runner::CommandRunner;
use crate::sysinfo::InfoSource;

const PIDOF: &str = "pidof";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub rss_kb: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySummary {
    pub total_kb: Option<u64>,
    pub available_kb: Option<u64>,
}

/// Looks up processes by name and reads their memory use from `/proc`.
///
/// Every lookup fails soft: errors are logged and the result is empty.
pub struct ProcessMemoryLookup<R: CommandRunner, S: InfoSource> {
    runner: R,
    source: S,
}

impl<R: CommandRunner, S: InfoSource> ProcessMemoryLookup<R, S> {
    pub fn new(runner: R, source: S) -> Self {
        Self { runner, source }
    }

    pub fn pids_of_program(&mut self, name: &str) -> Vec<String> {
        let output = match self.runner.run(PIDOF, vec![name]) {
            Ok(output) => output,
            Err(e) => {
                error!("failed to run {PIDOF}: {e}");
                return Vec::new();
            }
        };
        // pidof exits 1 with no output when nothing matches.
        if !output.status.success() {
            debug!("no process named {name}");
            return Vec::new();
        }
        String::from_utf8_lossy(&output.stdout)
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }

    /// Resident set size of `pid` in kB.
    pub fn rss_of_pid(&self, pid: &str) -> Option<u64> {
        let status = match self.source.status(pid) {
            Ok(status) => status,
            Err(e) => {
                error!("status of pid {pid}: {e}");
                return None;
            }
        };
        // Kernel threads have no VmRSS line.
        if status.vmrss.is_none() {
            debug!("pid {pid} ({}) reports no resident set size", status.name);
        }
        status.vmrss
    }

    pub fn records_of_program(&mut self, name: &str) -> Vec<ProcessRecord> {
        self.pids_of_program(name)
            .iter()
            .filter_map(|pid| match pid.parse::<u32>() {
                Ok(n) if n > 0 => Some(ProcessRecord {
                    pid: n,
                    rss_kb: self.rss_of_pid(pid),
                }),
                _ => {
                    warn!("ignoring malformed pid {pid:?}");
                    None
                }
            })
            .collect()
    }

    pub fn system_memory(&self) -> MemorySummary {
        match self.source.meminfo() {
            Ok(meminfo) => MemorySummary {
                total_kb: Some(meminfo.mem_total / 1024),
                available_kb: meminfo.mem_available.map(|bytes| bytes / 1024),
            },
            Err(e) => {
                error!("meminfo: {e}");
                MemorySummary::default()
            }
        }
    }

    pub fn total_memory_kb(&self) -> Option<u64> {
        self.system_memory().total_kb
    }

    pub fn available_memory_kb(&self) -> Option<u64> {
        self.system_memory().available_kb
    }
}
