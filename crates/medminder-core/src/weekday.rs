use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Checkbox declaration order. Saved records list days in this order.
    pub const ALL: &[Weekday] = &[
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Seven independent day toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySelection {
    checked: [bool; 7],
}

impl DaySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, day: Weekday) {
        let slot = &mut self.checked[day.index()];
        *slot = !*slot;
    }

    pub fn set(&mut self, day: Weekday, checked: bool) {
        self.checked[day.index()] = checked;
    }

    pub fn is_selected(&self, day: Weekday) -> bool {
        self.checked[day.index()]
    }

    /// Selected days, Monday first.
    pub fn selected(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL
            .iter()
            .copied()
            .filter(|day| self.is_selected(*day))
    }

    pub fn is_empty(&self) -> bool {
        !self.checked.iter().any(|c| *c)
    }
}

impl FromIterator<Weekday> for DaySelection {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut selection = DaySelection::new();
        for day in iter {
            selection.set(day, true);
        }
        selection
    }
}

impl fmt::Display for DaySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for day in self.selected() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(day.display_name())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_lists_days_in_declaration_order() {
        let days: DaySelection = [Weekday::Sunday, Weekday::Monday, Weekday::Wednesday]
            .into_iter()
            .collect();
        assert_eq!(days.to_string(), "Monday Wednesday Sunday");
    }

    #[test]
    fn toggle_twice_clears() {
        let mut days = DaySelection::new();
        assert!(days.is_empty());
        days.toggle(Weekday::Friday);
        assert!(days.is_selected(Weekday::Friday));
        assert!(!days.is_empty());
        days.toggle(Weekday::Friday);
        assert!(days.is_empty());
        assert_eq!(days.to_string(), "");
    }
}
