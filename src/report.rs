use std::fmt;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::dir_size::{SizeProbe, SizeTable};
use crate::error::Result;
use crate::format::{self, Glyphs};

pub const NO_DATA: &str = "No data available.";

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub length: usize,
    pub human_readable: bool,
    pub glyphs: Glyphs,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            length: 20,
            human_readable: false,
            glyphs: Glyphs::default(),
        }
    }
}

/// How a report run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Printed { entries: usize },
    /// The probe produced sizes, but they add up to zero.
    NoData,
    /// The probe produced nothing, usually because the target is unreadable.
    ProbeFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub percent: f64,
    pub bar: String,
    pub size: String,
    pub path: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3.0} % [{}] {} {}",
            self.percent, self.bar, self.size, self.path
        )
    }
}

pub struct Reporter<P: SizeProbe> {
    probe: P,
    options: ReportOptions,
}

impl<P: SizeProbe> Reporter<P> {
    pub fn new(probe: P, options: ReportOptions) -> Self {
        Self { probe, options }
    }

    pub fn into_probe(self) -> P {
        self.probe
    }

    /// Format a size as raw bytes or in human units.
    fn size_display(&self, bytes: u64) -> Result<String> {
        if self.options.human_readable {
            format::humanize(bytes as f64)
        } else {
            Ok(bytes.to_string())
        }
    }

    /// Build the per-directory lines; `None` when there is nothing to show.
    pub fn lines(&self, table: &SizeTable) -> Result<Option<Vec<ReportLine>>> {
        let Some(shares) = table.percentages() else {
            return Ok(None);
        };
        shares
            .into_iter()
            .map(|(entry, percent)| {
                Ok(ReportLine {
                    percent,
                    bar: format::bar_with(percent, self.options.length, &self.options.glyphs)?,
                    size: self.size_display(entry.size)?,
                    path: entry.path.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Probe `target` and write the report to `out`.
    pub fn run<W: Write>(&mut self, target: &Path, out: &mut W) -> Result<Outcome> {
        let raw = self.probe.probe(target);
        if raw.is_empty() {
            writeln!(out, "{NO_DATA}")?;
            return Ok(Outcome::ProbeFailed);
        }

        let table = SizeTable::parse(&raw)?;
        let Some(lines) = self.lines(&table)? else {
            info!("{} reports zero total size", target.display());
            writeln!(out, "{NO_DATA}")?;
            return Ok(Outcome::NoData);
        };

        for line in &lines {
            writeln!(out, "{line}")?;
        }
        writeln!(
            out,
            "Total: {} {}",
            self.size_display(table.total())?,
            target.display()
        )?;
        Ok(Outcome::Printed {
            entries: lines.len(),
        })
    }
}
