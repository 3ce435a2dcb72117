use shared_types::{MarketRecord, TimeOfDay, Weekday};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("worksheet io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("worksheet read error: {0}")]
    Csv(#[from] csv::Error),
    #[error("worksheet row {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("sheet connection already initialized")]
    AlreadyInitialized,
}

/// Freshness window for cached worksheet reads.
pub const CACHE_TTL: Duration = Duration::from_secs(1800);

/// How many worksheet rows the application works with.
pub const MAX_ROWS: usize = 95;

const READ_COLUMNS: usize = 6;
const HEADER: [&str; READ_COLUMNS] = ["lat", "lon", "Nombre", "Calles", "DiaSemana", "momento"];

struct CachedTable {
    rows: Vec<MarketRecord>,
    loaded_at: Instant,
}

/// Spreadsheet-like backing store: one CSV file per worksheet under a data
/// directory, fetch-all reads behind a freshness window, full-file
/// replace writes.
pub struct SheetConnection {
    dir: PathBuf,
    ttl: Duration,
    cache: Mutex<Option<CachedTable>>,
}

static CONNECTION: OnceLock<SheetConnection> = OnceLock::new();

/// Initializes the process-wide connection from `TIANGUIS_DATA_DIR`
/// (default `data`). Call once at startup.
pub fn init() -> Result<(), SheetError> {
    let dir = std::env::var("TIANGUIS_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    std::fs::create_dir_all(&dir)?;

    CONNECTION
        .set(SheetConnection::new(dir))
        .map_err(|_| SheetError::AlreadyInitialized)
}

pub fn connection() -> &'static SheetConnection {
    CONNECTION
        .get()
        .expect("Sheet connection not initialized. Call init() first.")
}

impl SheetConnection {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_ttl(dir, CACHE_TTL)
    }

    pub fn with_ttl(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            cache: Mutex::new(None),
        }
    }

    /// Cached fetch-all: the file is only touched once per freshness
    /// window, every other call inside it sees the same table.
    pub fn read(&self, worksheet: &str) -> Result<Vec<MarketRecord>, SheetError> {
        let mut cache = self.cache.lock().expect("sheet cache lock poisoned");
        if let Some(cached) = cache.as_ref() {
            if cached.loaded_at.elapsed() < self.ttl {
                return Ok(cached.rows.clone());
            }
        }

        let rows = self.read_file(worksheet)?;
        *cache = Some(CachedTable {
            rows: rows.clone(),
            loaded_at: Instant::now(),
        });
        Ok(rows)
    }

    /// Uncached read: sees the file as it is right now.
    pub fn read_fresh(&self, worksheet: &str) -> Result<Vec<MarketRecord>, SheetError> {
        self.read_file(worksheet)
    }

    /// Full-table replace: the worksheet becomes exactly `rows`, and the
    /// cache is refreshed to match what was written.
    pub fn update(&self, worksheet: &str, rows: &[MarketRecord]) -> Result<(), SheetError> {
        let mut writer = csv::Writer::from_path(self.worksheet_path(worksheet))?;
        writer.write_record(HEADER)?;
        for row in rows {
            writer.write_record([
                row.lat.to_string().as_str(),
                row.lon.to_string().as_str(),
                row.colonia.as_str(),
                row.calles.as_str(),
                row.dia.as_str(),
                row.momento.map(|m| m.as_str()).unwrap_or(""),
            ])?;
        }
        writer.flush()?;

        let mut cache = self.cache.lock().expect("sheet cache lock poisoned");
        *cache = Some(CachedTable {
            rows: rows.to_vec(),
            loaded_at: Instant::now(),
        });
        Ok(())
    }

    fn worksheet_path(&self, worksheet: &str) -> PathBuf {
        self.dir.join(format!("{worksheet}.csv"))
    }

    #[cfg(test)]
    pub(crate) fn dir_for_tests(&self) -> &std::path::Path {
        &self.dir
    }

    // Takes the first six columns of every row, drops rows empty across
    // all of them, truncates to the first MAX_ROWS remaining, then parses.
    fn read_file(&self, worksheet: &str) -> Result<Vec<MarketRecord>, SheetError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(self.worksheet_path(worksheet))?;

        let mut rows = Vec::new();
        for (at, record) in reader.records().enumerate() {
            let record = record?;
            let fields: Vec<&str> = (0..READ_COLUMNS)
                .map(|i| record.get(i).unwrap_or(""))
                .collect();
            if fields.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            rows.push(parse_row(at + 2, &fields)?);
            if rows.len() == MAX_ROWS {
                break;
            }
        }
        Ok(rows)
    }
}

fn parse_row(line: usize, fields: &[&str]) -> Result<MarketRecord, SheetError> {
    let malformed = |message: String| SheetError::Malformed { line, message };

    let lat: f64 = fields[0]
        .trim()
        .parse()
        .map_err(|_| malformed(format!("bad latitude {:?}", fields[0])))?;
    let lon: f64 = fields[1]
        .trim()
        .parse()
        .map_err(|_| malformed(format!("bad longitude {:?}", fields[1])))?;
    let dia = Weekday::from_name(fields[4].trim())
        .ok_or_else(|| malformed(format!("unknown day {:?}", fields[4])))?;
    let momento = match fields[5].trim() {
        "" => None,
        label => Some(
            TimeOfDay::from_label(label)
                .ok_or_else(|| malformed(format!("unknown moment {:?}", label)))?,
        ),
    };

    Ok(MarketRecord {
        lat,
        lon,
        colonia: fields[2].to_string(),
        calles: fields[3].to_string(),
        dia,
        momento,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tianguis-sheet-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn seed(dir: &Path, body: &str) {
        let mut content = String::from("lat,lon,Nombre,Calles,DiaSemana,momento\n");
        content.push_str(body);
        fs::write(dir.join("Tianguis.csv"), content).unwrap();
    }

    fn record(lat: f64, dia: Weekday) -> MarketRecord {
        MarketRecord {
            lat,
            lon: -115.4,
            colonia: "Centro".to_string(),
            calles: "Reforma".to_string(),
            dia,
            momento: Some(TimeOfDay::Tarde),
        }
    }

    #[test]
    fn read_drops_fully_empty_rows() {
        let dir = temp_dir("dropna");
        seed(
            &dir,
            "32.6,-115.4,Centro,Reforma,LUNES,Por la mañana\n,,,,,\n32.5,-115.3,,Colima,VIERNES,\n",
        );
        let conn = SheetConnection::new(&dir);

        let rows = conn.read("Tianguis").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].dia, Weekday::Lunes);
        assert_eq!(rows[1].momento, None);
    }

    #[test]
    fn read_truncates_to_ninety_five_rows() {
        let dir = temp_dir("truncate");
        let mut body = String::new();
        for i in 0..120 {
            body.push_str(&format!("32.{i},-115.4,C,R,LUNES,Por la mañana\n"));
        }
        seed(&dir, &body);
        let conn = SheetConnection::new(&dir);

        assert_eq!(conn.read("Tianguis").unwrap().len(), MAX_ROWS);
    }

    #[test]
    fn read_within_window_returns_the_cached_table() {
        let dir = temp_dir("cached");
        seed(&dir, "32.6,-115.4,Centro,Reforma,LUNES,Por la mañana\n");
        let conn = SheetConnection::new(&dir);

        let first = conn.read("Tianguis").unwrap();
        // The file changes underneath, but the window has not elapsed.
        seed(&dir, "32.5,-115.3,Otra,Colima,VIERNES,Por la noche\n");
        let second = conn.read("Tianguis").unwrap();
        assert_eq!(first, second);

        // An uncached read sees the new file immediately.
        let fresh = conn.read_fresh("Tianguis").unwrap();
        assert_eq!(fresh[0].dia, Weekday::Viernes);
    }

    #[test]
    fn expired_window_refetches_from_the_file() {
        let dir = temp_dir("expired");
        seed(&dir, "32.6,-115.4,Centro,Reforma,LUNES,Por la mañana\n");
        let conn = SheetConnection::with_ttl(&dir, Duration::ZERO);

        conn.read("Tianguis").unwrap();
        seed(&dir, "32.5,-115.3,Otra,Colima,VIERNES,Por la noche\n");
        let rows = conn.read("Tianguis").unwrap();
        assert_eq!(rows[0].dia, Weekday::Viernes);
    }

    #[test]
    fn update_replaces_the_whole_worksheet() {
        let dir = temp_dir("replace");
        seed(&dir, "32.6,-115.4,Centro,Reforma,LUNES,Por la mañana\n");
        let conn = SheetConnection::new(&dir);

        conn.update("Tianguis", &[record(32.1, Weekday::Sabado)]).unwrap();

        let rows = conn.read_fresh("Tianguis").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].dia, Weekday::Sabado);
    }

    #[test]
    fn written_table_reloads_identically() {
        let dir = temp_dir("roundtrip");
        let conn = SheetConnection::new(&dir);
        let written = vec![
            record(32.6, Weekday::Martes),
            MarketRecord {
                lat: 32.5,
                lon: -115.3,
                colonia: String::new(),
                calles: "Calle X".to_string(),
                dia: Weekday::Domingo,
                momento: None,
            },
        ];

        conn.update("Tianguis", &written).unwrap();
        assert_eq!(conn.read_fresh("Tianguis").unwrap(), written);
    }

    #[test]
    fn unknown_day_is_a_load_error() {
        let dir = temp_dir("malformed");
        seed(&dir, "32.6,-115.4,Centro,Reforma,FERIADO,\n");
        let conn = SheetConnection::new(&dir);

        assert!(matches!(
            conn.read("Tianguis"),
            Err(SheetError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn missing_worksheet_is_a_load_error() {
        let dir = temp_dir("missing");
        let conn = SheetConnection::new(&dir);
        assert!(conn.read("Tianguis").is_err());
    }
}
