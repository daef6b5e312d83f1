//! Borderless table formatting with comfy-table.

use super::options::TableData;
use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Spaces between adjacent columns.
pub const COLUMN_PADDING: u16 = 3;

/// Render headers and rows as a left-aligned grid without borders. Cells are
/// printed verbatim; headers are bold cyan when `color` is set. Trailing
/// whitespace is trimmed from every line.
pub fn format_table(td: &TableData, color: bool) -> String {
    if td.headers.is_empty() && td.rows.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    let header: Vec<Cell> = td
        .headers
        .iter()
        .map(|h| {
            let cell = Cell::new(h);
            if color {
                cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
            } else {
                cell
            }
        })
        .collect();
    if !header.is_empty() {
        table.set_header(header);
    }
    for row in &td.rows {
        table.add_row(row.iter().map(Cell::new));
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, COLUMN_PADDING));
        column.set_cell_alignment(CellAlignment::Left);
    }

    table
        .to_string()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
