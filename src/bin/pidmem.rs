use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use duim::cli::{PidMemCli, init_logging};
use duim::comfy_table::{create_comfy_table, memory_line};
use duim::command_runner::RealCommandRunner;
use duim::process::ProcessMemoryLookup;
use duim::sysinfo::ProcFs;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = PidMemCli::parse();
    init_logging(module_path!(), cli.verbose).wrap_err("Failed to initialize log")?;

    let mut lookup = ProcessMemoryLookup::new(RealCommandRunner, ProcFs::default());
    let memory = lookup.system_memory();

    let mut found = false;
    for program in &cli.programs {
        let records = lookup.records_of_program(program);
        if records.is_empty() {
            println!("{program}: no running process");
            continue;
        }
        found = true;
        println!("{}", create_comfy_table(program, &records, memory.total_kb)?);
    }
    println!("{}", memory_line(&memory)?);

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
