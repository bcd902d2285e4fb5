//! Operator-facing table rendering

use crate::selector::Candidate;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

/// Renders a candidate list as a bordered table.
pub fn candidate_table(candidates: &[Candidate]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "CPU%", "Memory%"]);
    for candidate in candidates {
        table.add_row(vec![
            Cell::new(&candidate.name),
            Cell::new(format!("{:.2}", candidate.cpu_percent)),
            Cell::new(format!("{:.2}", candidate.memory_percent)),
        ]);
    }
    table
}
