use shared_types::Weekday;

/// Fixed day-of-week palette, shared by the marker pie icons and the map
/// legend.
pub const DAY_COLORS: [(Weekday, &str); 7] = [
    (Weekday::Lunes, "#2e7aab"),
    (Weekday::Martes, "#ca7214"),
    (Weekday::Miercoles, "#ff5659"),
    (Weekday::Jueves, "#47bab1"),
    (Weekday::Viernes, "#00a247"),
    (Weekday::Sabado, "#fcca37"),
    (Weekday::Domingo, "#c27ba5"),
];

pub fn color_for(dia: Weekday) -> &'static str {
    DAY_COLORS
        .iter()
        .find(|(d, _)| *d == dia)
        .map(|(_, color)| *color)
        .unwrap_or("#888888")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_every_weekday() {
        assert_eq!(DAY_COLORS.len(), 7);
        for dia in Weekday::ALL {
            assert!(DAY_COLORS.iter().any(|(d, _)| *d == dia));
        }
    }

    #[test]
    fn color_lookup_matches_table() {
        assert_eq!(color_for(Weekday::Lunes), "#2e7aab");
        assert_eq!(color_for(Weekday::Domingo), "#c27ba5");
    }
}
