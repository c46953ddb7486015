use crate::calendar::MachineCalendar;
use crate::error::CalendarResult;
use crate::locale::Locale;
use crate::summary::MonthlySummary;

/// How much detail a rendered machine calendar carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Month names only, sorted ascending.
    Compact,
    /// Per month, per week day-range labels; week 4's end day comes from the
    /// actual month length for the calendar's year.
    Detailed,
}

const BANNER_WIDTH: usize = 80;

pub fn render_machine_calendar(
    calendar: &MachineCalendar,
    mode: RenderMode,
    locale: &Locale,
) -> CalendarResult<String> {
    let mut out = String::new();
    let banner = "=".repeat(BANNER_WIDTH);

    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format!(
        "MACHINE: {} - {}\n",
        calendar.machine_no, calendar.machine_name
    ));
    out.push_str(&format!("YEAR: {}\n", calendar.year));
    out.push_str(&banner);
    out.push('\n');

    if calendar.schedules.is_empty() {
        out.push_str("\n  no maintenance schedule defined for this machine\n");
        return Ok(out);
    }

    for (idx, schedule) in calendar.schedules.iter().enumerate() {
        out.push_str(&format!(
            "\nMAINTENANCE {}: {} - {}\n",
            idx + 1,
            schedule.maintenance_type,
            schedule.frequency_label
        ));
        out.push_str("   ");
        out.push_str(&"-".repeat(BANNER_WIDTH - 4));
        out.push('\n');

        match mode {
            RenderMode::Compact => {
                let mut names = Vec::with_capacity(schedule.weeks_by_month.len());
                for month in schedule.weeks_by_month.keys() {
                    names.push(locale.month_name(*month)?);
                }
                out.push_str(&format!("   Months: {}\n", names.join(", ")));
            }
            RenderMode::Detailed => {
                for (month, weeks) in &schedule.weeks_by_month {
                    let mut week_parts = Vec::with_capacity(weeks.len());
                    for week in weeks {
                        week_parts.push(format!(
                            "H{} ({}-{})",
                            week.number(),
                            week.start_day(),
                            week.end_day(calendar.year, *month)?
                        ));
                    }
                    out.push_str(&format!(
                        "   {:<10} : {}\n",
                        locale.month_name(*month)?,
                        week_parts.join(" | ")
                    ));
                }
            }
        }
    }

    out.push('\n');
    Ok(out)
}

/// Render the 12-row monthly load table: month, total maintenances, distinct
/// machine count, and the per-frequency breakdown.
pub fn render_monthly_summary(summary: &MonthlySummary, locale: &Locale) -> String {
    let headers = ["Month", "Total", "Machines", "By frequency"];
    let mut rows: Vec<[String; 4]> = Vec::with_capacity(summary.months.len());

    for load in summary.months.values() {
        let breakdown: Vec<String> = load
            .by_frequency
            .iter()
            .map(|(freq, count)| format!("{}:{}", locale.frequency_label(*freq), count))
            .collect();
        let breakdown = if breakdown.is_empty() {
            "-".to_string()
        } else {
            breakdown.join(", ")
        };
        rows.push([
            load.month_name.clone(),
            load.total_maintenances.to_string(),
            load.machine_count.to_string(),
            breakdown,
        ]);
    }

    // Compute column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > widths[idx] {
                widths[idx] = len;
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for width in &widths {
        sep.push_str(&"-".repeat(width + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&format!("MONTHLY MAINTENANCE LOAD {}\n", summary.year));
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    for (idx, header) in headers.iter().enumerate() {
        out.push_str(&format!(" {:<width$} |", header, width = widths[idx]));
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row in &rows {
        out.push('|');
        for (idx, cell) in row.iter().enumerate() {
            let pad = widths[idx].saturating_sub(cell.chars().count());
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(pad));
            out.push_str(" |");
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}
