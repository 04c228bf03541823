//! Content-based row heights and column widths
//!
//! Text metrics are estimated from character counts and the resolved font
//! size; merged cells spanning several lines of the measured kind are
//! ignored, like spreadsheet hosts do.

use table_builder_core::style::DEFAULT_TEXT_SIZE;
use table_builder_core::{
    CellRange, CellsSet, Column, MergeAreaId, Row, Table, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT,
};

use crate::error::SheetResult;

/// Extra width added to the longest text, in character units
pub const COLUMN_PADDING: f64 = 0.71;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f64 = 1.33;

/// Width needed by the widest text in `column`
pub fn column_width(table: &Table, column: &Column) -> SheetResult<f64> {
    let mut width: Option<f64> = None;

    for cell in column.cells(table) {
        if spans(table, cell.merge_area(), |range| range.column_count()) {
            continue;
        }
        let text = cell.content().value_text();
        let Some(chars) = text.lines().map(|line| line.chars().count()).max() else {
            continue;
        };
        if chars == 0 {
            continue;
        }

        let size = table.resolve_format(cell.address())?.text.text_size;
        let needed = chars as f64 * size / DEFAULT_TEXT_SIZE + COLUMN_PADDING;
        width = Some(width.map_or(needed, |w| w.max(needed)));
    }

    Ok(width.unwrap_or(DEFAULT_COLUMN_WIDTH))
}

/// Height needed by the tallest text in `row`, never below the default
pub fn row_height(table: &Table, row: &Row) -> SheetResult<f64> {
    let mut height = DEFAULT_ROW_HEIGHT;

    for cell in row.cells(table) {
        if spans(table, cell.merge_area(), |range| range.row_count()) {
            continue;
        }
        let text = cell.content().value_text();
        if text.is_empty() {
            continue;
        }

        let lines = text.lines().count().max(1) as f64;
        let size = table.resolve_format(cell.address())?.text.text_size;
        height = height.max(size * LINE_HEIGHT_FACTOR * lines);
    }

    Ok(height)
}

fn spans<F>(table: &Table, area: Option<MergeAreaId>, extent: F) -> bool
where
    F: Fn(&CellRange) -> usize,
{
    area.and_then(|id| table.merge_area(id))
        .map_or(false, |range| extent(&range) > 1)
}
