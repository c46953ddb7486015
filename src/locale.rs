use crate::error::{CalendarError, CalendarResult};
use crate::frequency::Frequency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Presentation lookups for month names and frequency labels. Injected into
/// the rendering and export paths so the computational core stays free of
/// locale concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    month_names: [String; 12],
    frequency_labels: BTreeMap<Frequency, String>,
}

impl Locale {
    pub fn new(
        month_names: [String; 12],
        frequency_labels: BTreeMap<Frequency, String>,
    ) -> Self {
        Self {
            month_names,
            frequency_labels,
        }
    }

    /// Turkish month names and frequency labels.
    pub fn turkish() -> Self {
        Self {
            month_names: [
                "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos",
                "Eylül", "Ekim", "Kasım", "Aralık",
            ]
            .map(String::from),
            frequency_labels: BTreeMap::from([
                (Frequency::Weekly, "Haftalık".to_string()),
                (Frequency::Monthly, "Aylık".to_string()),
                (Frequency::Quarterly, "3 Aylık".to_string()),
                (Frequency::SemiAnnual, "6 Aylık".to_string()),
                (Frequency::Annual, "Yıllık".to_string()),
            ]),
        }
    }

    pub fn month_name(&self, month: u32) -> CalendarResult<&str> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        Ok(&self.month_names[(month - 1) as usize])
    }

    /// Display label for a frequency. An unmapped frequency falls back to
    /// its raw spelling; this lookup never fails.
    pub fn frequency_label(&self, frequency: Frequency) -> &str {
        self.frequency_labels
            .get(&frequency)
            .map(String::as_str)
            .unwrap_or_else(|| frequency.as_str())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
            frequency_labels: BTreeMap::from([
                (Frequency::Weekly, "Weekly".to_string()),
                (Frequency::Monthly, "Monthly".to_string()),
                (Frequency::Quarterly, "Quarterly".to_string()),
                (Frequency::SemiAnnual, "Semi-annual".to_string()),
                (Frequency::Annual, "Annual".to_string()),
            ]),
        }
    }
}
