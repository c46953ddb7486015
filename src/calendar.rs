use crate::error::{CalendarError, CalendarResult};
use crate::frequency::{self, Frequency};
use crate::locale::Locale;
use crate::machine::{MaintenanceSchedule, Machine};
use crate::validation;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the four fixed day-range buckets partitioning a calendar month:
/// days 1-7, 8-14, 15-21, and 22 through the end of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum WeekOfMonth {
    First,
    Second,
    Third,
    Fourth,
}

impl WeekOfMonth {
    pub const ALL: [WeekOfMonth; 4] = [
        WeekOfMonth::First,
        WeekOfMonth::Second,
        WeekOfMonth::Third,
        WeekOfMonth::Fourth,
    ];

    /// Bucket a day of the month. The bucket index never depends on month
    /// length; only the fourth bucket's rendered end day does.
    pub fn from_day(day: u32) -> CalendarResult<Self> {
        match day {
            1..=7 => Ok(WeekOfMonth::First),
            8..=14 => Ok(WeekOfMonth::Second),
            15..=21 => Ok(WeekOfMonth::Third),
            22..=31 => Ok(WeekOfMonth::Fourth),
            _ => Err(CalendarError::DayOutOfRange(day)),
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            WeekOfMonth::First => 1,
            WeekOfMonth::Second => 2,
            WeekOfMonth::Third => 3,
            WeekOfMonth::Fourth => 4,
        }
    }

    pub fn start_day(&self) -> u32 {
        match self {
            WeekOfMonth::First => 1,
            WeekOfMonth::Second => 8,
            WeekOfMonth::Third => 15,
            WeekOfMonth::Fourth => 22,
        }
    }

    /// Last day covered by this bucket in the given month. The fourth bucket
    /// runs to the actual end of the month, so it needs the real year.
    pub fn end_day(&self, year: i32, month: u32) -> CalendarResult<u32> {
        match self {
            WeekOfMonth::First => Ok(7),
            WeekOfMonth::Second => Ok(14),
            WeekOfMonth::Third => Ok(21),
            WeekOfMonth::Fourth => days_in_month(year, month),
        }
    }
}

impl From<WeekOfMonth> for u32 {
    fn from(week: WeekOfMonth) -> u32 {
        week.number()
    }
}

impl TryFrom<u32> for WeekOfMonth {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(WeekOfMonth::First),
            2 => Ok(WeekOfMonth::Second),
            3 => Ok(WeekOfMonth::Third),
            4 => Ok(WeekOfMonth::Fourth),
            other => Err(CalendarError::DayOutOfRange(other)),
        }
    }
}

/// Number of days in the given month of the given year (28-31).
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::MonthOutOfRange(month))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(CalendarError::MonthOutOfRange(month))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Resolved occurrence grid for a single schedule within a machine calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCalendar {
    pub id: i64,
    pub maintenance_type: String,
    pub frequency: Frequency,
    pub frequency_label: String,
    pub months: Vec<u32>,
    pub weeks_by_month: BTreeMap<u32, Vec<WeekOfMonth>>,
}

/// A machine together with the resolved occurrence grids of all its
/// schedules for one target year. Entries keep the input schedule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineCalendar {
    pub machine_no: String,
    pub machine_name: String,
    pub year: i32,
    pub schedules: Vec<ScheduleCalendar>,
}

pub fn build_machine_calendar(
    machine: &Machine,
    schedules: &[MaintenanceSchedule],
    year: i32,
    locale: &Locale,
) -> CalendarResult<MachineCalendar> {
    let mut entries = Vec::with_capacity(schedules.len());
    for schedule in schedules {
        validation::validate_schedule(schedule)?;
        entries.push(ScheduleCalendar {
            id: schedule.id,
            maintenance_type: schedule.maintenance_type.clone(),
            frequency: schedule.frequency,
            frequency_label: locale.frequency_label(schedule.frequency).to_string(),
            months: schedule.months.clone(),
            weeks_by_month: frequency::expand(schedule.frequency, &schedule.months)?,
        });
    }
    Ok(MachineCalendar {
        machine_no: machine.machine_no.clone(),
        machine_name: machine.machine_name.clone(),
        year,
        schedules: entries,
    })
}

/// Build calendars for a whole fleet. Machines are independent of each
/// other, so the fan-out runs in parallel; results come back in input order.
pub fn build_all_calendars(
    machines: &[(Machine, Vec<MaintenanceSchedule>)],
    year: i32,
    locale: &Locale,
) -> CalendarResult<Vec<MachineCalendar>> {
    machines
        .par_iter()
        .map(|(machine, schedules)| build_machine_calendar(machine, schedules, year, locale))
        .collect()
}
