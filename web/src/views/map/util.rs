use shared_types::MarketRecord;

/// Fallback view center when the table is empty: Mexicali.
pub const DEFAULT_CENTER: (f64, f64) = (32.6245, -115.4523);

/// Map center: plain arithmetic mean over every loaded row, so a location
/// listed on more days pulls the center harder.
pub fn table_center(rows: &[MarketRecord]) -> Option<(f64, f64)> {
    if rows.is_empty() {
        return None;
    }
    let count = rows.len() as f64;
    let lat = rows.iter().map(|r| r.lat).sum::<f64>() / count;
    let lon = rows.iter().map(|r| r.lon).sum::<f64>() / count;
    Some((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Weekday;

    fn row(lat: f64, lon: f64) -> MarketRecord {
        MarketRecord {
            lat,
            lon,
            colonia: String::new(),
            calles: String::new(),
            dia: Weekday::Lunes,
            momento: None,
        }
    }

    #[test]
    fn empty_table_has_no_center() {
        assert_eq!(table_center(&[]), None);
    }

    #[test]
    fn center_is_the_mean_over_rows_not_locations() {
        // Two rows at the same spot weigh it double.
        let rows = vec![row(32.0, -115.0), row(32.0, -115.0), row(35.0, -118.0)];
        let (lat, lon) = table_center(&rows).unwrap();
        assert!((lat - 33.0).abs() < 1e-9);
        assert!((lon - (-116.0)).abs() < 1e-9);
    }
}
