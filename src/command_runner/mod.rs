use std::io;
use std::process::Output;

mod real;
pub use real::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::*;

/// Spawns an external program and waits for it to finish.
pub trait CommandRunner {
    fn run(&mut self, cmd_name: &str, args: Vec<&str>) -> io::Result<Output>;
}
