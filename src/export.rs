use crate::calendar::MachineCalendar;
use crate::error::{CalendarError, CalendarResult};
use crate::locale::Locale;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum ExportError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    Calendar(CalendarError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Serialization(err) => write!(f, "serialization error: {err}"),
            ExportError::Io(err) => write!(f, "io error: {err}"),
            ExportError::Csv(err) => write!(f, "csv error: {err}"),
            ExportError::Calendar(err) => write!(f, "calendar error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<SerdeJsonError> for ExportError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<CalendarError> for ExportError {
    fn from(value: CalendarError) -> Self {
        Self::Calendar(value)
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Cell markers used in the tabular grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMarkers {
    pub present: String,
    pub absent: String,
}

impl Default for GridMarkers {
    fn default() -> Self {
        Self {
            present: "✓".to_string(),
            absent: "-".to_string(),
        }
    }
}

const ID_HEADERS: [&str; 4] = ["Machine No", "Machine Name", "Maintenance Type", "Frequency"];

/// Columns per grid row: 4 identifying columns plus 12 months x 4 weeks.
/// This shape is a fixed contract with downstream spreadsheet writers.
pub const GRID_COLUMNS: usize = ID_HEADERS.len() + 48;

/// Flatten machine calendars into the fixed 52-column grid. Row 0 is the
/// header; every following row is one (machine, schedule) pair with a
/// marker per (month, week) cell, month-major then week-minor.
pub fn calendar_grid_rows(
    calendars: &[MachineCalendar],
    locale: &Locale,
    markers: &GridMarkers,
) -> CalendarResult<Vec<Vec<String>>> {
    let mut header: Vec<String> = ID_HEADERS.iter().map(|h| h.to_string()).collect();
    for month in 1..=12 {
        let month_name = locale.month_name(month)?;
        for week in 1..=4 {
            header.push(format!("{month_name} H{week}"));
        }
    }

    let mut rows = vec![header];
    for calendar in calendars {
        for schedule in &calendar.schedules {
            let mut row = Vec::with_capacity(GRID_COLUMNS);
            row.push(calendar.machine_no.clone());
            row.push(calendar.machine_name.clone());
            row.push(schedule.maintenance_type.clone());
            row.push(schedule.frequency_label.clone());

            for month in 1..=12 {
                let weeks = schedule.weeks_by_month.get(&month);
                for week in 1..=4 {
                    let marked = weeks
                        .map(|weeks| weeks.iter().any(|w| w.number() == week))
                        .unwrap_or(false);
                    row.push(if marked {
                        markers.present.clone()
                    } else {
                        markers.absent.clone()
                    });
                }
            }
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Write the 52-column grid for the given calendars to a CSV file.
pub fn save_grid_to_csv<P: AsRef<Path>>(
    calendars: &[MachineCalendar],
    locale: &Locale,
    markers: &GridMarkers,
    path: P,
) -> ExportResult<()> {
    let rows = calendar_grid_rows(calendars, locale, markers)?;
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Snapshot a set of machine calendars to a JSON file.
pub fn save_calendars_to_json<P: AsRef<Path>>(
    calendars: &[MachineCalendar],
    path: P,
) -> ExportResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, calendars)?;
    Ok(())
}

pub fn load_calendars_from_json<P: AsRef<Path>>(path: P) -> ExportResult<Vec<MachineCalendar>> {
    let file = File::open(path)?;
    let calendars: Vec<MachineCalendar> = serde_json::from_reader(file)?;
    Ok(calendars)
}
