//! Table builder wrapper around comfy-table for field listings.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::style;

/// Create a borderless table with upper-cased headers.
///
/// comfy-table honours NO_COLOR on its own.
pub fn field_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Render the table under a bold title line.
pub fn render_fields(title: &str, table: &Table, rows: usize) -> String {
    if rows == 0 {
        return format!("{title}: nothing resolved.");
    }
    format!("{}\n{table}", style(format!("{title}:")).bold())
}
