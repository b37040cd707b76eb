use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets::UTF8_FULL};

use crate::error::Result;
use crate::format::humanize;
use crate::process::{MemorySummary, ProcessRecord};

fn kb_display(kb: Option<u64>) -> Result<String> {
    match kb {
        Some(kb) => humanize(kb as f64 * 1024.0),
        None => Ok("n/a".to_string()),
    }
}

/// One row per process: PID, resident memory and its share of `MemTotal`.
pub fn create_comfy_table(
    program: &str,
    records: &[ProcessRecord],
    total_kb: Option<u64>,
) -> Result<Table> {
    let mut table = Table::new();

    let header = vec![
        Cell::new(program).add_attribute(Attribute::Bold),
        Cell::new("RSS"),
        Cell::new("% of memory"),
    ];
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let share = match (record.rss_kb, total_kb) {
            (Some(rss), Some(total)) if total > 0 => {
                format!("{:.1} %", rss as f64 / total as f64 * 100.0)
            }
            _ => "n/a".to_string(),
        };
        rows.push(vec![
            Cell::new(record.pid),
            Cell::new(kb_display(record.rss_kb)?)
                .fg(Color::Yellow)
                .set_alignment(CellAlignment::Right),
            Cell::new(share).set_alignment(CellAlignment::Right),
        ]);
    }

    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80)
        .set_header(header)
        .add_rows(rows);

    Ok(table)
}

pub fn memory_line(memory: &MemorySummary) -> Result<String> {
    Ok(format!(
        "Memory: {} available of {}",
        kb_display(memory.available_kb)?,
        kb_display(memory.total_kb)?
    ))
}
