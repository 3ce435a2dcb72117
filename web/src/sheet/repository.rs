use shared_types::MarketRecord;

use super::connection::{SheetConnection, SheetError};

/// Worksheet holding the market table.
pub const WORKSHEET: &str = "Tianguis";

type SheetResult<T> = Result<T, SheetError>;

/// The table every page load works from: cached fetch-all of the first
/// six columns, empty rows dropped, first 95 rows kept.
pub fn load_table(conn: &SheetConnection) -> SheetResult<Vec<MarketRecord>> {
    conn.read(WORKSHEET)
}

/// Appends the new rows to the session-base table and rewrites the whole
/// worksheet. The base comes through the freshness window, not a forced
/// re-read, so a write inside the window reuses the table as the page saw
/// it. Returns how many rows were appended.
pub fn append_records(conn: &SheetConnection, new_rows: Vec<MarketRecord>) -> SheetResult<usize> {
    let appended = new_rows.len();
    let mut table = conn.read(WORKSHEET)?;
    table.extend(new_rows);
    conn.update(WORKSHEET, &table)?;
    Ok(appended)
}
