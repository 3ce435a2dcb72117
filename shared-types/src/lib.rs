use serde::{Deserialize, Serialize};

/// Days a tianguis can operate, in calendar order. Serialized with the
/// uppercase Spanish names the "Tianguis" worksheet uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "LUNES")]
    Lunes,
    #[serde(rename = "MARTES")]
    Martes,
    #[serde(rename = "MIERCOLES")]
    Miercoles,
    #[serde(rename = "JUEVES")]
    Jueves,
    #[serde(rename = "VIERNES")]
    Viernes,
    #[serde(rename = "SABADO")]
    Sabado,
    #[serde(rename = "DOMINGO")]
    Domingo,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Lunes,
        Weekday::Martes,
        Weekday::Miercoles,
        Weekday::Jueves,
        Weekday::Viernes,
        Weekday::Sabado,
        Weekday::Domingo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Lunes => "LUNES",
            Weekday::Martes => "MARTES",
            Weekday::Miercoles => "MIERCOLES",
            Weekday::Jueves => "JUEVES",
            Weekday::Viernes => "VIERNES",
            Weekday::Sabado => "SABADO",
            Weekday::Domingo => "DOMINGO",
        }
    }

    /// Capitalized form shown by the map legend.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Lunes => "Lunes",
            Weekday::Martes => "Martes",
            Weekday::Miercoles => "Miercoles",
            Weekday::Jueves => "Jueves",
            Weekday::Viernes => "Viernes",
            Weekday::Sabado => "Sabado",
            Weekday::Domingo => "Domingo",
        }
    }

    pub fn from_name(name: &str) -> Option<Weekday> {
        Weekday::ALL.iter().copied().find(|d| d.as_str() == name)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The moment of the day a tianguis operates, as offered by the capture
/// form. Serialized with the full Spanish labels stored in the worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "Por la mañana")]
    Manana,
    #[serde(rename = "Por la tarde")]
    Tarde,
    #[serde(rename = "Por la noche")]
    Noche,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Manana, TimeOfDay::Tarde, TimeOfDay::Noche];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Manana => "Por la mañana",
            TimeOfDay::Tarde => "Por la tarde",
            TimeOfDay::Noche => "Por la noche",
        }
    }

    pub fn from_label(label: &str) -> Option<TimeOfDay> {
        TimeOfDay::ALL.iter().copied().find(|t| t.as_str() == label)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the "Tianguis" worksheet, in column order.
///
/// Several rows may share the same coordinate pair; each row is one
/// operating day at that spot. `momento` is carried through reads and
/// writes but never shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "Nombre")]
    pub colonia: String,
    #[serde(rename = "Calles")]
    pub calles: String,
    #[serde(rename = "DiaSemana")]
    pub dia: Weekday,
    #[serde(rename = "momento")]
    pub momento: Option<TimeOfDay>,
}

/// Per-coordinate aggregate used only for rendering markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub lat: f64,
    pub lon: f64,
    pub colonia: String,
    pub calles: String,
    pub dias: Vec<Weekday>,
}

/// One selected day with its chosen moment, as captured by the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub dia: Weekday,
    pub momento: TimeOfDay,
}

/// A new tianguis submission before expansion into worksheet rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMarketEntry {
    pub lat: f64,
    pub lon: f64,
    pub calles: String,
    pub entries: Vec<DayEntry>,
}
