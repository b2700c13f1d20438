//! Attendance record for a pay period.

use serde::{Deserialize, Serialize};

use super::Hours;

/// The kinds of overtime a multiplier can be configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeCategory {
    /// Overtime on a regular working day.
    Weekday,
    /// Overtime on a rest day.
    Weekend,
    /// Overtime on a public holiday.
    Holiday,
}

impl OvertimeCategory {
    /// All categories, in the order they are summed.
    pub const ALL: [OvertimeCategory; 3] = [
        OvertimeCategory::Weekday,
        OvertimeCategory::Weekend,
        OvertimeCategory::Holiday,
    ];

    /// Returns the snake_case name used in audit output.
    pub fn as_str(self) -> &'static str {
        match self {
            OvertimeCategory::Weekday => "weekday",
            OvertimeCategory::Weekend => "weekend",
            OvertimeCategory::Holiday => "holiday",
        }
    }
}

/// Hours worked, worked as overtime, and missed during a pay period.
///
/// All values are expected to be non-negative. Whether work and absence
/// hours fit in the period is not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Regular hours worked.
    #[serde(default)]
    pub work_hours: Hours,
    /// Overtime hours on weekdays.
    #[serde(default)]
    pub overtime_weekday: Hours,
    /// Overtime hours on weekends.
    #[serde(default)]
    pub overtime_weekend: Hours,
    /// Overtime hours on public holidays.
    #[serde(default)]
    pub overtime_holiday: Hours,
    /// Hours of absence deducted from base pay.
    #[serde(default)]
    pub absence_hours: Hours,
}

impl AttendanceRecord {
    /// Returns the overtime hours recorded for a category.
    pub fn overtime_hours(&self, category: OvertimeCategory) -> Hours {
        match category {
            OvertimeCategory::Weekday => self.overtime_weekday,
            OvertimeCategory::Weekend => self.overtime_weekend,
            OvertimeCategory::Holiday => self.overtime_holiday,
        }
    }
}
