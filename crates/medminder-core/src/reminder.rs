use std::fmt;

use crate::error::ValidationError;
use crate::time::ClockTime;
use crate::weekday::DaySelection;

/// Input cap on the medicine name field.
pub const NAME_MAX_CHARS: usize = 20;

/// Input cap on the times-per-day field.
pub const FREQUENCY_MAX_DIGITS: usize = 3;

/// Raw form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderDraft {
    pub name: String,
    pub time: Option<ClockTime>,
    pub frequency: String,
    pub days: DaySelection,
}

impl ReminderDraft {
    /// Presence checks in fixed order: name, time, frequency, days.
    /// Only the first failure is reported.
    pub fn validate(&self) -> Result<Reminder, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let time = self.time.ok_or(ValidationError::MissingTime)?;
        let frequency = self.frequency.trim();
        if frequency.is_empty() {
            return Err(ValidationError::MissingFrequency);
        }
        if self.days.is_empty() {
            return Err(ValidationError::NoDaysSelected);
        }

        Ok(Reminder {
            name: name.to_string(),
            time,
            frequency: frequency.to_string(),
            days: self.days,
        })
    }
}

/// A validated reminder, ready to be written as one line of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub name: String,
    pub time: ClockTime,
    pub frequency: String,
    pub days: DaySelection,
}

impl Reminder {
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Multi-line summary shown after a successful save.
    pub fn confirmation(&self) -> String {
        format!(
            "Medicine: {}\nTime: {}\nTimes/day: {}\nDays: {}",
            self.name, self.time, self.frequency, self.days
        )
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}, {} times/day on {}",
            self.name, self.time, self.frequency, self.days
        )
    }
}
