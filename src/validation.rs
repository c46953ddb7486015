use crate::error::{CalendarError, CalendarResult};
use crate::frequency::Frequency;
use crate::machine::MaintenanceSchedule;
use std::collections::HashSet;

/// Check that a schedule carries everything the calendar computations need.
pub fn validate_schedule(schedule: &MaintenanceSchedule) -> CalendarResult<()> {
    let missing = |field: &'static str| CalendarError::MissingRequiredField {
        field,
        schedule_id: Some(schedule.id),
    };

    if schedule.machine_no.trim().is_empty() {
        return Err(missing("machine_no"));
    }
    if schedule.maintenance_type.trim().is_empty() {
        return Err(missing("maintenance_type"));
    }
    for &month in &schedule.months {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
    }
    // Weekly expands to the full year without consulting months; every other
    // frequency with no months would silently occur nowhere.
    if schedule.frequency != Frequency::Weekly && schedule.months.is_empty() {
        return Err(missing("months"));
    }
    Ok(())
}

pub fn validate_schedule_collection(schedules: &[MaintenanceSchedule]) -> CalendarResult<()> {
    let mut seen_ids = HashSet::with_capacity(schedules.len());
    for schedule in schedules {
        if !seen_ids.insert(schedule.id) {
            return Err(CalendarError::DuplicateScheduleId(schedule.id));
        }
        validate_schedule(schedule)?;
    }
    Ok(())
}
