use shared_types::{MarketRecord, NewMarketEntry};

/// The permissive numeric-format check the coordinate fields have always
/// used: strip every '.' and '-', then require the non-empty remainder to
/// be all ASCII digits. Shapes like "1.2.3" or "--41" pass; exponent
/// notation does not.
pub fn coarse_numeric(text: &str) -> bool {
    let stripped: String = text.chars().filter(|c| *c != '.' && *c != '-').collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

/// Both captured coordinate fields must be present and pass the coarse
/// numeric check before the submit button unlocks.
pub fn coordinates_valid(lat: &str, lon: &str) -> bool {
    !lat.is_empty() && !lon.is_empty() && coarse_numeric(lat) && coarse_numeric(lon)
}

/// Why a submission was refused before any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlock {
    NoDaySelected,
    MissingStreet,
}

impl SubmitBlock {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitBlock::NoDaySelected => {
                "⚠️ Por favor, selecciona al menos un día antes de enviar."
            }
            SubmitBlock::MissingStreet => {
                "⚠️ Por favor, escribe el nombre de la calle antes de enviar."
            }
        }
    }
}

/// Submission gate: at least one day always; a street name only when the
/// flow requires one.
pub fn check_submission(entry: &NewMarketEntry, require_street: bool) -> Result<(), SubmitBlock> {
    if entry.entries.is_empty() {
        return Err(SubmitBlock::NoDaySelected);
    }
    if require_street && entry.calles.trim().is_empty() {
        return Err(SubmitBlock::MissingStreet);
    }
    Ok(())
}

/// Expands a submission into worksheet rows: one per selected day, all
/// sharing the coordinates and street, each with its own chosen moment.
/// Registered rows never carry a colonia.
pub fn expand_entry(entry: &NewMarketEntry) -> Vec<MarketRecord> {
    entry
        .entries
        .iter()
        .map(|day| MarketRecord {
            lat: entry.lat,
            lon: entry.lon,
            colonia: String::new(),
            calles: entry.calles.clone(),
            dia: day.dia,
            momento: Some(day.momento),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{DayEntry, TimeOfDay, Weekday};

    fn entry(calles: &str, entries: Vec<DayEntry>) -> NewMarketEntry {
        NewMarketEntry {
            lat: 32.6,
            lon: -115.4,
            calles: calles.to_string(),
            entries,
        }
    }

    #[test]
    fn coarse_numeric_accepts_plain_decimals() {
        assert!(coarse_numeric("32.6"));
        assert!(coarse_numeric("-115.4"));
        assert!(coarse_numeric("32.600000"));
        assert!(coarse_numeric("0"));
    }

    #[test]
    fn coarse_numeric_rejects_text_and_empty() {
        assert!(!coarse_numeric(""));
        assert!(!coarse_numeric("abc"));
        assert!(!coarse_numeric("32.6N"));
        assert!(!coarse_numeric("..."));
        assert!(!coarse_numeric("- -"));
    }

    #[test]
    fn coarse_numeric_keeps_its_known_weaknesses() {
        // Malformed shapes that still pass, and valid scientific notation
        // that does not. Deliberately preserved behavior.
        assert!(coarse_numeric("1.2.3"));
        assert!(coarse_numeric("--41"));
        assert!(coarse_numeric("32.6-"));
        assert!(!coarse_numeric("1e5"));
    }

    #[test]
    fn coordinates_require_both_fields() {
        assert!(coordinates_valid("32.6", "-115.4"));
        assert!(!coordinates_valid("", "-115.4"));
        assert!(!coordinates_valid("32.6", ""));
    }

    #[test]
    fn zero_selected_days_blocks_submission() {
        let e = entry("Calle X", vec![]);
        assert_eq!(check_submission(&e, false), Err(SubmitBlock::NoDaySelected));
        assert_eq!(check_submission(&e, true), Err(SubmitBlock::NoDaySelected));
    }

    #[test]
    fn street_requirement_only_applies_to_the_strict_flow() {
        let e = entry(
            "",
            vec![DayEntry {
                dia: Weekday::Lunes,
                momento: TimeOfDay::Manana,
            }],
        );
        assert_eq!(check_submission(&e, false), Ok(()));
        assert_eq!(check_submission(&e, true), Err(SubmitBlock::MissingStreet));
    }

    #[test]
    fn expansion_yields_one_row_per_selected_day() {
        let e = entry(
            "Calle X",
            vec![
                DayEntry {
                    dia: Weekday::Martes,
                    momento: TimeOfDay::Tarde,
                },
                DayEntry {
                    dia: Weekday::Sabado,
                    momento: TimeOfDay::Noche,
                },
            ],
        );

        let rows = expand_entry(&e);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].lat, 32.6);
        assert_eq!(rows[0].lon, -115.4);
        assert_eq!(rows[0].calles, "Calle X");
        assert_eq!(rows[0].dia, Weekday::Martes);
        assert_eq!(rows[0].momento, Some(TimeOfDay::Tarde));

        assert_eq!(rows[1].dia, Weekday::Sabado);
        assert_eq!(rows[1].momento, Some(TimeOfDay::Noche));

        // New rows never carry a colonia.
        assert!(rows.iter().all(|r| r.colonia.is_empty()));
    }
}
