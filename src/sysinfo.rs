use std::path::PathBuf;

use procfs::process::Status;
use procfs::{FromRead, Meminfo, ProcResult};

/// Where process status and system memory figures come from.
pub trait InfoSource {
    /// The parsed `status` file of process `pid`.
    fn status(&self, pid: &str) -> ProcResult<Status>;
    /// The parsed `meminfo` file. Its sizes are in bytes.
    fn meminfo(&self) -> ProcResult<Meminfo>;
}

/// Reads a mounted procfs, `/proc` unless told otherwise.
#[derive(Debug, Clone)]
pub struct ProcFs {
    root: PathBuf,
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::with_root("/proc")
    }
}

impl ProcFs {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn status_path(&self, pid: &str) -> PathBuf {
        self.root.join(pid).join("status")
    }
}

impl InfoSource for ProcFs {
    fn status(&self, pid: &str) -> ProcResult<Status> {
        Status::from_file(self.status_path(pid))
    }

    fn meminfo(&self) -> ProcResult<Meminfo> {
        Meminfo::from_file(self.root.join("meminfo"))
    }
}

#[cfg(test)]
pub use fake::FakeInfoSource;

#[cfg(test)]
mod fake {
    use std::collections::HashMap;

    use procfs::process::Status;
    use procfs::{FromRead, Meminfo, ProcError, ProcResult};

    use super::InfoSource;

    /// Serves canned file contents; anything not added is NotFound.
    #[derive(Default)]
    pub struct FakeInfoSource {
        statuses: HashMap<String, String>,
        meminfo: Option<String>,
    }

    impl FakeInfoSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_status(mut self, pid: &str, contents: &str) -> Self {
            self.statuses.insert(pid.to_owned(), contents.to_owned());
            self
        }

        pub fn with_meminfo(mut self, contents: &str) -> Self {
            self.meminfo = Some(contents.to_owned());
            self
        }
    }

    impl InfoSource for FakeInfoSource {
        fn status(&self, pid: &str) -> ProcResult<Status> {
            match self.statuses.get(pid) {
                Some(contents) => Status::from_read(contents.as_bytes()),
                None => Err(ProcError::NotFound(None)),
            }
        }

        fn meminfo(&self) -> ProcResult<Meminfo> {
            match &self.meminfo {
                Some(contents) => Meminfo::from_read(contents.as_bytes()),
                None => Err(ProcError::NotFound(None)),
            }
        }
    }
}
