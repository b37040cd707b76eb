use crate::error::{Error, Result};

const UNITS: [&str; 7] = ["B", "K", "M", "G", "T", "P", "E"];
const OVERFLOW_UNIT: &str = "Y";

/// Characters used to draw the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyphs {
    pub filled: char,
    pub empty: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            filled: '=',
            empty: ' ',
        }
    }
}

/// Render `percent` as a bar of exactly `width` characters with the default
/// glyphs.
pub fn bar(percent: f64, width: usize) -> Result<String> {
    bar_with(percent, width, &Glyphs::default())
}

/// The number of filled glyphs is rounded half to even, the same way the
/// percent column rounds, so 2.5% of 20 fills none and 12.5% fills two.
pub fn bar_with(percent: f64, width: usize, glyphs: &Glyphs) -> Result<String> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(Error::PercentOutOfRange(percent));
    }
    let filled = ((percent * width as f64) / 100.0).round_ties_even() as usize;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(glyphs.filled, filled));
    out.extend(std::iter::repeat_n(glyphs.empty, width - filled));
    Ok(out)
}

/// Format a byte count with 1024-based units and one decimal, e.g. "1.5K".
///
/// Anything past exabytes is reported in `Y` without further scaling.
pub fn humanize(bytes: f64) -> Result<String> {
    if !bytes.is_finite() {
        return Err(Error::NonFiniteSize);
    }
    if bytes < 0.0 {
        return Err(Error::NegativeSize(bytes));
    }
    let mut value = bytes;
    for unit in UNITS {
        if value < 1024.0 {
            return Ok(format!("{value:.1}{unit}"));
        }
        value /= 1024.0;
    }
    Ok(format!("{value:.1}{OVERFLOW_UNIT}"))
}

/// Share of `value` in `total`, or `None` when there is nothing to divide by.
pub fn percent(value: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(value as f64 / total as f64 * 100.0)
    }
}
