use crate::error::CalendarResult;
use crate::frequency::{self, Frequency};
use crate::locale::Locale;
use crate::machine::MaintenanceSchedule;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Aggregated maintenance load for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLoad {
    pub month_name: String,
    pub total_maintenances: u32,
    pub by_frequency: BTreeMap<Frequency, u32>,
    /// Distinct machines touched this month, sorted by machine number.
    pub machines: Vec<String>,
    pub machine_count: usize,
}

/// Twelve-month maintenance load summary across a fleet. Every month is
/// always present, so a quiet month shows up with zero counts instead of
/// being missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub months: BTreeMap<u32, MonthLoad>,
}

#[derive(Default)]
struct LoadAccumulator {
    total: u32,
    by_frequency: BTreeMap<Frequency, u32>,
    machines: BTreeSet<String>,
}

/// Fold a flat collection of schedules (across all machines) into the fixed
/// 12-month load summary. A schedule contributes exactly once to every month
/// its expansion covers, regardless of how many weeks are marked; the data
/// model carries no finer granularity than month membership.
pub fn summarize(
    schedules: &[MaintenanceSchedule],
    year: i32,
    locale: &Locale,
) -> CalendarResult<MonthlySummary> {
    let mut accumulators: BTreeMap<u32, LoadAccumulator> =
        (1..=12).map(|month| (month, LoadAccumulator::default())).collect();

    for schedule in schedules {
        let weeks_by_month = frequency::expand(schedule.frequency, &schedule.months)?;
        for month in weeks_by_month.keys() {
            let load = accumulators
                .get_mut(month)
                .expect("expansion only yields months 1-12");
            load.total += 1;
            load.machines.insert(schedule.machine_no.clone());
            *load.by_frequency.entry(schedule.frequency).or_insert(0) += 1;
        }
    }

    let mut months = BTreeMap::new();
    for (month, load) in accumulators {
        let machines: Vec<String> = load.machines.into_iter().collect();
        months.insert(
            month,
            MonthLoad {
                month_name: locale.month_name(month)?.to_string(),
                total_maintenances: load.total,
                by_frequency: load.by_frequency,
                machine_count: machines.len(),
                machines,
            },
        );
    }

    Ok(MonthlySummary { year, months })
}

/// Months whose total maintenance count meets the threshold, as
/// `(month, total)` pairs sorted by count descending; ties break toward the
/// earlier month so the ranking is deterministic.
pub fn find_busy_periods(summary: &MonthlySummary, threshold: u32) -> Vec<(u32, u32)> {
    let mut busy: Vec<(u32, u32)> = summary
        .months
        .iter()
        .filter(|(_, load)| load.total_maintenances >= threshold)
        .map(|(&month, load)| (month, load.total_maintenances))
        .collect();
    busy.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    busy
}
