use shared_types::{LocationSummary, MarketRecord, Weekday};
use std::collections::HashMap;

/// Groups table rows sharing the exact same numeric coordinate pair into
/// one summary per location.
///
/// Group order follows first appearance in the table; `colonia` and
/// `calles` keep the first row's values, and `dias` collects every row's
/// day in table order.
pub fn summarize_locations(rows: &[MarketRecord]) -> Vec<LocationSummary> {
    let mut index: HashMap<(u64, u64), usize> = HashMap::new();
    let mut groups: Vec<LocationSummary> = Vec::new();

    for row in rows {
        let key = (coord_key(row.lat), coord_key(row.lon));
        match index.get(&key).copied() {
            Some(at) => groups[at].dias.push(row.dia),
            None => {
                index.insert(key, groups.len());
                groups.push(LocationSummary {
                    lat: row.lat,
                    lon: row.lon,
                    colonia: row.colonia.clone(),
                    calles: row.calles.clone(),
                    dias: vec![row.dia],
                });
            }
        }
    }

    groups
}

/// Occurrence count per day for one location, ordered by descending count
/// with first-appearance tiebreak. Feeds the pie-icon wedge layout.
pub fn day_counts(dias: &[Weekday]) -> Vec<(Weekday, usize)> {
    let mut counts: Vec<(Weekday, usize)> = Vec::new();
    for dia in dias {
        match counts.iter().position(|(d, _)| d == dia) {
            Some(at) => counts[at].1 += 1,
            None => counts.push((*dia, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// Grouping key: the numeric value, not its text. 0.0 and -0.0 compare
// equal, so they must share a key.
fn coord_key(value: f64) -> u64 {
    let normalized = if value == 0.0 { 0.0 } else { value };
    normalized.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::TimeOfDay;

    fn row(lat: f64, lon: f64, colonia: &str, calles: &str, dia: Weekday) -> MarketRecord {
        MarketRecord {
            lat,
            lon,
            colonia: colonia.to_string(),
            calles: calles.to_string(),
            dia,
            momento: Some(TimeOfDay::Manana),
        }
    }

    #[test]
    fn groups_rows_by_exact_coordinate_pair() {
        let rows = vec![
            row(32.6, -115.4, "Centro", "Reforma", Weekday::Lunes),
            row(32.6, -115.4, "Centro", "Reforma", Weekday::Miercoles),
            row(32.5, -115.3, "Pueblo Nuevo", "Colima", Weekday::Viernes),
        ];

        let groups = summarize_locations(&rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].dias, vec![Weekday::Lunes, Weekday::Miercoles]);
        assert_eq!(groups[1].dias, vec![Weekday::Viernes]);
    }

    #[test]
    fn day_count_equals_source_rows_in_group() {
        let rows = vec![
            row(32.61, -115.41, "A", "x", Weekday::Martes),
            row(32.61, -115.41, "A", "x", Weekday::Martes),
            row(32.61, -115.41, "A", "x", Weekday::Sabado),
        ];

        let groups = summarize_locations(&rows);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].dias.len(), 3);
    }

    #[test]
    fn first_row_wins_for_colonia_and_calles() {
        let rows = vec![
            row(32.6, -115.4, "Primera", "Calle A", Weekday::Lunes),
            row(32.6, -115.4, "Segunda", "Calle B", Weekday::Martes),
        ];

        let groups = summarize_locations(&rows);
        assert_eq!(groups[0].colonia, "Primera");
        assert_eq!(groups[0].calles, "Calle A");
    }

    #[test]
    fn trailing_zero_text_parses_to_the_same_group() {
        // "32.60" and "32.6" are the same number once parsed, so the rows
        // land in one group.
        let a: f64 = "32.60".parse().unwrap();
        let b: f64 = "32.6".parse().unwrap();
        let rows = vec![
            row(a, -115.4, "A", "x", Weekday::Lunes),
            row(b, -115.4, "A", "x", Weekday::Jueves),
        ];

        assert_eq!(summarize_locations(&rows).len(), 1);
    }

    #[test]
    fn nearby_but_different_numbers_stay_separate() {
        let rows = vec![
            row(32.600001, -115.4, "A", "x", Weekday::Lunes),
            row(32.600002, -115.4, "A", "x", Weekday::Lunes),
        ];

        assert_eq!(summarize_locations(&rows).len(), 2);
    }

    #[test]
    fn group_order_follows_first_appearance() {
        let rows = vec![
            row(1.0, 1.0, "A", "x", Weekday::Lunes),
            row(2.0, 2.0, "B", "y", Weekday::Martes),
            row(1.0, 1.0, "A", "x", Weekday::Viernes),
        ];

        let groups = summarize_locations(&rows);
        assert_eq!(groups[0].colonia, "A");
        assert_eq!(groups[1].colonia, "B");
    }

    #[test]
    fn day_counts_sorts_by_count_then_first_seen() {
        let dias = vec![
            Weekday::Sabado,
            Weekday::Lunes,
            Weekday::Lunes,
            Weekday::Domingo,
        ];

        let counts = day_counts(&dias);
        assert_eq!(counts[0], (Weekday::Lunes, 2));
        assert_eq!(counts[1], (Weekday::Sabado, 1));
        assert_eq!(counts[2], (Weekday::Domingo, 1));
    }
}
