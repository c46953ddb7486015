use std::fmt;

/// Errors raised by the calendar engine. All of these indicate malformed
/// input data rather than transient failure; none are retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    UnknownFrequency(String),
    MissingRequiredField {
        field: &'static str,
        schedule_id: Option<i64>,
    },
    DayOutOfRange(u32),
    MonthOutOfRange(u32),
    DuplicateScheduleId(i64),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::UnknownFrequency(value) => write!(
                f,
                "unknown frequency '{value}' (expected weekly, monthly, quarterly, semi-annual, or annual)"
            ),
            CalendarError::MissingRequiredField { field, schedule_id } => match schedule_id {
                Some(id) => write!(f, "schedule {id} is missing required field '{field}'"),
                None => write!(f, "schedule is missing required field '{field}'"),
            },
            CalendarError::DayOutOfRange(day) => {
                write!(f, "day of month {day} is outside the valid range 1-31")
            }
            CalendarError::MonthOutOfRange(month) => {
                write!(f, "month {month} is outside the valid range 1-12")
            }
            CalendarError::DuplicateScheduleId(id) => {
                write!(f, "duplicate schedule id {id}")
            }
        }
    }
}

impl std::error::Error for CalendarError {}

pub type CalendarResult<T> = Result<T, CalendarError>;
