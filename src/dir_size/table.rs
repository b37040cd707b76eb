use std::collections::HashMap;

use log::warn;

use crate::error::{Error, Result};
use crate::format;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: String,
    pub size: u64,
}

/// Directory sizes in the order the probe listed them.
#[derive(Debug, Default, Clone)]
pub struct SizeTable {
    entries: Vec<DirectoryEntry>,
    index: HashMap<String, usize>,
    total: u64,
}

impl SizeTable {
    /// Parse `"<size>\t<path>"` lines.
    ///
    /// A path listed twice keeps its first position and the sizes are added
    /// together, so the total always matches what the probe reported. Sizes
    /// whose sum does not fit in a `u64` are an error.
    pub fn parse<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for line in lines {
            let entry = parse_line(line.as_ref())?;
            table.insert(entry)?;
        }
        Ok(table)
    }

    fn insert(&mut self, entry: DirectoryEntry) -> Result<()> {
        // Every entry is part of the total, so a checked total also bounds
        // each summed duplicate.
        self.total = self
            .total
            .checked_add(entry.size)
            .ok_or_else(|| Error::SizeOverflow {
                path: entry.path.clone(),
            })?;
        match self.index.get(&entry.path) {
            Some(&pos) => {
                warn!("{} listed more than once, adding sizes", entry.path);
                self.entries[pos].size += entry.size;
            }
            None => {
                self.index.insert(entry.path.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<u64> {
        self.index.get(path).map(|&pos| self.entries[pos].size)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Each entry with its share of the total, or `None` if the total is zero
    /// (an empty table included).
    pub fn percentages(&self) -> Option<Vec<(&DirectoryEntry, f64)>> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.entries
            .iter()
            .map(|e| format::percent(e.size, total).map(|p| (e, p)))
            .collect()
    }
}

fn parse_line(line: &str) -> Result<DirectoryEntry> {
    let malformed = |reason| Error::Parse {
        line: line.to_owned(),
        reason,
    };
    let (size, path) = line
        .split_once('\t')
        .ok_or_else(|| malformed("missing tab separator"))?;
    if path.contains('\t') {
        return Err(malformed("more than one tab separator"));
    }
    if path.is_empty() {
        return Err(malformed("empty path"));
    }
    let size = size
        .trim()
        .parse::<u64>()
        .map_err(|_| malformed("size is not an unsigned integer"))?;
    Ok(DirectoryEntry {
        path: path.to_owned(),
        size,
    })
}
