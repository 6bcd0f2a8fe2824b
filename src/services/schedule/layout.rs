use serde::Serialize;

/// Every calendar row covers one hour.
pub const CELL_MINUTES: u32 = 60;

/// Where a booking card sits inside its hour cell, as percentages of the
/// cell height. `height_percent` may exceed 100: a long booking overflows
/// into the following cells, and the column (not the cell) must own the
/// clipping for that to render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellPlacement {
    pub top_percent: f64,
    pub height_percent: f64,
    pub z_index: usize,
}

/// Vertical geometry of one `[start, end)` span against the cell starting
/// at `cell_start`.
pub fn place_in_cell(start_minutes: u32, end_minutes: u32, cell_start: u32) -> (f64, f64) {
    let top = (start_minutes as f64 - cell_start as f64) / CELL_MINUTES as f64 * 100.0;
    let height =
        end_minutes.saturating_sub(start_minutes) as f64 / CELL_MINUTES as f64 * 100.0;
    (top.max(0.0), height)
}

/// Place a cell's bookings. Z-order is assignment order: simultaneous
/// bookings stack by their array index, with no secondary tie-break.
pub fn layout_cell(spans: &[(u32, u32)], cell_start: u32) -> Vec<CellPlacement> {
    spans
        .iter()
        .enumerate()
        .map(|(index, &(start, end))| {
            let (top_percent, height_percent) = place_in_cell(start, end, cell_start);
            CellPlacement {
                top_percent,
                height_percent,
                z_index: index,
            }
        })
        .collect()
}
