use crate::error::{CalendarError, CalendarResult};
use crate::frequency::Frequency;
use serde::{Deserialize, Serialize};

/// A piece of equipment under maintenance tracking. Owned by the external
/// store; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub machine_no: String,
    pub machine_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Machine {
    pub fn new(machine_no: impl Into<String>, machine_name: impl Into<String>) -> Self {
        Self {
            machine_no: machine_no.into(),
            machine_name: machine_name.into(),
            location: None,
            active: true,
        }
    }
}

/// A recurring maintenance definition for one machine: what kind of work,
/// how often, and in which calendar months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub id: i64,
    pub machine_no: String,
    pub maintenance_type: String,
    pub frequency: Frequency,
    pub months: Vec<u32>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl MaintenanceSchedule {
    pub fn new(
        id: i64,
        machine_no: impl Into<String>,
        maintenance_type: impl Into<String>,
        frequency: Frequency,
        months: Vec<u32>,
    ) -> Self {
        Self {
            id,
            machine_no: machine_no.into(),
            maintenance_type: maintenance_type.into(),
            frequency,
            months,
            active: true,
        }
    }
}

fn default_active() -> bool {
    true
}

/// Loosely-typed schedule row as handed over by external stores and file
/// importers, where any field may be absent. Conversion into a
/// [`MaintenanceSchedule`] surfaces the gaps as explicit errors instead of
/// defaulting them away.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub machine_no: Option<String>,
    #[serde(default)]
    pub maintenance_type: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub months: Option<Vec<u32>>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl ScheduleRecord {
    pub fn into_schedule(self) -> CalendarResult<MaintenanceSchedule> {
        let id = self.id.ok_or(CalendarError::MissingRequiredField {
            field: "id",
            schedule_id: None,
        })?;
        let missing = |field: &'static str| CalendarError::MissingRequiredField {
            field,
            schedule_id: Some(id),
        };

        let machine_no = self.machine_no.ok_or_else(|| missing("machine_no"))?;
        let maintenance_type = self
            .maintenance_type
            .ok_or_else(|| missing("maintenance_type"))?;
        let frequency = Frequency::parse(&self.frequency.ok_or_else(|| missing("frequency"))?)?;

        // A weekly schedule covers every month regardless of its months
        // list, so the list may be absent for weekly rows only.
        let months = match self.months {
            Some(months) => months,
            None if frequency == Frequency::Weekly => Vec::new(),
            None => return Err(missing("months")),
        };
        for &month in &months {
            if !(1..=12).contains(&month) {
                return Err(CalendarError::MonthOutOfRange(month));
            }
        }

        Ok(MaintenanceSchedule {
            id,
            machine_no,
            maintenance_type,
            frequency,
            months,
            active: self.active.unwrap_or(true),
        })
    }
}
