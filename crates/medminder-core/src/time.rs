use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::error::CoreError;

/// Wall-clock time of day picked for a reminder, stored in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, CoreError> {
        if hour > 23 {
            return Err(CoreError::InvalidInput(format!("hour out of range: {hour}")));
        }
        if minute > 59 {
            return Err(CoreError::InvalidInput(format!(
                "minute out of range: {minute}"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour on a 12-hour dial: 0 becomes 12, 13..=23 drop by 12.
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    pub fn meridiem(&self) -> &'static str {
        if self.is_pm() {
            "PM"
        } else {
            "AM"
        }
    }

    /// Move the hour by `delta`, wrapping within the day. Minutes are untouched.
    pub fn shift_hour(self, delta: i16) -> Self {
        Self {
            hour: (i16::from(self.hour) + delta).rem_euclid(24) as u8,
            ..self
        }
    }

    /// Move the minute by `delta`, wrapping within the hour. No carry into the hour.
    pub fn shift_minute(self, delta: i16) -> Self {
        Self {
            minute: (i16::from(self.minute) + delta).rem_euclid(60) as u8,
            ..self
        }
    }

    /// Same dial position, forced into the morning or the afternoon.
    pub fn with_pm(self, pm: bool) -> Self {
        match (self.is_pm(), pm) {
            (false, true) => self.shift_hour(12),
            (true, false) => self.shift_hour(-12),
            _ => self,
        }
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(t: NaiveTime) -> Self {
        // NaiveTime keeps hour < 24 and minute < 60.
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} {}",
            self.hour12(),
            self.minute,
            self.meridiem()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(hour: u8, minute: u8) -> String {
        ClockTime::new(hour, minute).unwrap().to_string()
    }

    #[test]
    fn twelve_hour_formatting() {
        assert_eq!(fmt(0, 0), "12:00 AM");
        assert_eq!(fmt(0, 30), "12:30 AM");
        assert_eq!(fmt(9, 7), "09:07 AM");
        assert_eq!(fmt(11, 59), "11:59 AM");
        assert_eq!(fmt(12, 0), "12:00 PM");
        assert_eq!(fmt(13, 5), "01:05 PM");
        assert_eq!(fmt(14, 5), "02:05 PM");
        assert_eq!(fmt(23, 45), "11:45 PM");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ClockTime::new(24, 0).is_err());
        assert!(ClockTime::new(0, 60).is_err());
        assert!(ClockTime::new(23, 59).is_ok());
    }

    #[test]
    fn shifting_wraps_each_component() {
        let t = ClockTime::new(23, 58).unwrap();
        assert_eq!(t.shift_hour(1), ClockTime::new(0, 58).unwrap());
        assert_eq!(t.shift_minute(3), ClockTime::new(23, 1).unwrap());
        let t = ClockTime::new(0, 0).unwrap();
        assert_eq!(t.shift_hour(-1), ClockTime::new(23, 0).unwrap());
        assert_eq!(t.shift_minute(-1), ClockTime::new(0, 59).unwrap());
    }

    #[test]
    fn meridiem_switch_keeps_dial_position() {
        let morning = ClockTime::new(9, 15).unwrap();
        assert_eq!(morning.with_pm(true).to_string(), "09:15 PM");
        assert_eq!(morning.with_pm(false), morning);
        let midnight = ClockTime::new(0, 0).unwrap();
        assert_eq!(midnight.with_pm(true).to_string(), "12:00 PM");
        assert_eq!(midnight.with_pm(true).with_pm(false), midnight);
    }

    #[test]
    fn from_naive_time() {
        let t = NaiveTime::from_hms_opt(18, 20, 41).unwrap();
        let clock = ClockTime::from(t);
        assert_eq!(clock.hour(), 18);
        assert_eq!(clock.minute(), 20);
        assert_eq!(clock.to_string(), "06:20 PM");
    }
}
