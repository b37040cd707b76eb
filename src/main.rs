use std::{env, io, process::ExitCode};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use log::debug;

use duim::cli::{Cli, expand_target, init_logging};
use duim::command_runner::RealCommandRunner;
use duim::config::get_config;
use duim::dir_size::DuProbe;
use duim::report::{Outcome, ReportOptions, Reporter};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(module_path!(), cli.verbose).wrap_err("Failed to initialize log")?;

    let settings = get_config().wrap_err("Failed to load configuration")?;
    debug!("{settings:?}");

    let target = match cli.target {
        Some(target) => expand_target(target),
        None => env::current_dir().wrap_err("Could not read the current directory")?,
    };
    let options = ReportOptions {
        length: cli.length.map_or(settings.length, usize::from),
        human_readable: cli.human_readable || settings.human_readable,
        glyphs: settings.glyphs.glyphs(),
    };

    let probe = DuProbe::with_command(
        RealCommandRunner,
        &settings.probe.command,
        settings.probe.args,
    );
    let mut reporter = Reporter::new(probe, options);
    let outcome = reporter
        .run(&target, &mut io::stdout().lock())
        .wrap_err_with(|| format!("Failed to report on {}", target.display()))?;

    Ok(match outcome {
        Outcome::ProbeFailed => ExitCode::FAILURE,
        Outcome::Printed { .. } | Outcome::NoData => ExitCode::SUCCESS,
    })
}
