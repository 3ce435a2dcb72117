use leptos::prelude::*;
use leptos::server;
use shared_types::{MarketRecord, NewMarketEntry};

#[cfg(feature = "ssr")]
use crate::sheet::{connection::connection, repository};

/// The market table as the page works with it: cached fetch-all, empty
/// rows dropped, first 95 rows kept. A load failure surfaces to the page.
#[server]
pub async fn fetch_market_table() -> Result<Vec<MarketRecord>, ServerFnError> {
    match repository::load_table(connection()) {
        Ok(rows) => Ok(rows),
        Err(e) => Err(ServerFnError::new(format!("Worksheet error: {}", e))),
    }
}

/// Expands a submission into one row per selected day, appends the rows
/// to the session-base table and rewrites the worksheet. Returns how many
/// rows were written.
#[server]
pub async fn submit_market_entries(entry: NewMarketEntry) -> Result<usize, ServerFnError> {
    use crate::market::validate::{check_submission, expand_entry};

    // The form enforces this too, but the page is not the only possible
    // caller of the endpoint.
    if let Err(block) = check_submission(&entry, false) {
        return Err(ServerFnError::new(block.message()));
    }

    let new_rows = expand_entry(&entry);
    repository::append_records(connection(), new_rows)
        .map_err(|e| ServerFnError::new(format!("Worksheet error: {}", e)))
}
