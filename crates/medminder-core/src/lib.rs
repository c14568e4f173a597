pub mod error;
pub mod listing;
pub mod reminder;
pub mod time;
pub mod weekday;

pub use error::{CoreError, ValidationError};
pub use reminder::{Reminder, ReminderDraft, FREQUENCY_MAX_DIGITS, NAME_MAX_CHARS};
pub use time::ClockTime;
pub use weekday::{DaySelection, Weekday};
