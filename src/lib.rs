pub mod calendar;
pub mod error;
pub mod export;
pub mod frequency;
pub mod locale;
pub mod machine;
pub mod render;
pub mod summary;
pub mod validation;

pub use calendar::{
    MachineCalendar, ScheduleCalendar, WeekOfMonth, build_all_calendars, build_machine_calendar,
    days_in_month,
};
pub use error::{CalendarError, CalendarResult};
pub use export::{
    ExportError, ExportResult, GRID_COLUMNS, GridMarkers, calendar_grid_rows,
    load_calendars_from_json, save_calendars_to_json, save_grid_to_csv,
};
pub use frequency::{Frequency, expand};
pub use locale::Locale;
pub use machine::{MaintenanceSchedule, Machine, ScheduleRecord};
pub use render::{RenderMode, render_machine_calendar, render_monthly_summary};
pub use summary::{MonthLoad, MonthlySummary, find_busy_periods, summarize};
pub use validation::{validate_schedule, validate_schedule_collection};
