use std::io;
use std::process::{Command, Output};

use log::debug;

use super::CommandRunner;

pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&mut self, cmd_name: &str, args: Vec<&str>) -> io::Result<Output> {
        debug!("running {cmd_name} {}", args.join(" "));
        Command::new(cmd_name).args(args).output()
    }
}
