pub mod cli;
pub mod comfy_table;
pub mod command_runner;
pub mod config;
pub mod dir_size;
pub mod error;
pub mod format;
pub mod process;
pub mod report;
pub mod sysinfo;

pub use error::{Error, Result};
