use crate::calendar::WeekOfMonth;
use crate::error::{CalendarError, CalendarResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Recurrence class of a maintenance schedule. The set is closed: anything
/// outside these five values is rejected at parse time rather than silently
/// expanding to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "quarterly")]
    Quarterly,
    #[serde(rename = "semi-annual")]
    SemiAnnual,
    #[serde(rename = "annual")]
    Annual,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::SemiAnnual,
        Frequency::Annual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::SemiAnnual => "semi-annual",
            Frequency::Annual => "annual",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "quarterly" => Some(Frequency::Quarterly),
            "semi-annual" => Some(Frequency::SemiAnnual),
            "annual" => Some(Frequency::Annual),
            _ => None,
        }
    }

    /// Strict variant of [`Frequency::from_str`] for inbound data where an
    /// unknown spelling must surface as an error instead of being dropped.
    pub fn parse(value: &str) -> CalendarResult<Self> {
        Self::from_str(value.trim()).ok_or_else(|| CalendarError::UnknownFrequency(value.into()))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve which weeks of which months a schedule occupies.
///
/// A weekly schedule covers every week of every month no matter what its
/// `months` list says. Every other frequency covers exactly the listed
/// months, each with all four weeks; month membership is the finest
/// granularity the data model carries.
pub fn expand(
    frequency: Frequency,
    months: &[u32],
) -> CalendarResult<BTreeMap<u32, Vec<WeekOfMonth>>> {
    let mut weeks_by_month = BTreeMap::new();
    match frequency {
        Frequency::Weekly => {
            for month in 1..=12 {
                weeks_by_month.insert(month, WeekOfMonth::ALL.to_vec());
            }
        }
        Frequency::Monthly | Frequency::Quarterly | Frequency::SemiAnnual | Frequency::Annual => {
            for &month in months {
                if !(1..=12).contains(&month) {
                    return Err(CalendarError::MonthOutOfRange(month));
                }
                weeks_by_month.insert(month, WeekOfMonth::ALL.to_vec());
            }
        }
    }
    Ok(weeks_by_month)
}
