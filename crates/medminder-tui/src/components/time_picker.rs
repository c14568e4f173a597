use crossterm::event::{KeyCode, KeyEvent};
use medminder_core::ClockTime;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePart {
    Hour,
    Minute,
}

/// Result of feeding one key to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Still open.
    Pending,
    Confirmed(ClockTime),
    /// Closed without a choice.
    Dismissed,
}

/// Modal hour/minute spinner on a 12-hour dial.
#[derive(Debug, Clone)]
pub struct TimePicker {
    value: ClockTime,
    part: TimePart,
}

impl TimePicker {
    pub fn new(initial: ClockTime) -> Self {
        Self {
            value: initial,
            part: TimePart::Hour,
        }
    }

    pub fn value(&self) -> ClockTime {
        self.value
    }

    pub fn part(&self) -> TimePart {
        self.part
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PickerOutcome {
        match key.code {
            KeyCode::Enter => return PickerOutcome::Confirmed(self.value),
            KeyCode::Esc => return PickerOutcome::Dismissed,
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab
            | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.part = match self.part {
                    TimePart::Hour => TimePart::Minute,
                    TimePart::Minute => TimePart::Hour,
                };
            }
            KeyCode::Up | KeyCode::Char('k') => self.step(1),
            KeyCode::Down | KeyCode::Char('j') => self.step(-1),
            KeyCode::PageUp => self.step(10),
            KeyCode::PageDown => self.step(-10),
            KeyCode::Char('a') | KeyCode::Char('A') => self.value = self.value.with_pm(false),
            KeyCode::Char('p') | KeyCode::Char('P') => self.value = self.value.with_pm(true),
            _ => {}
        }
        PickerOutcome::Pending
    }

    fn step(&mut self, delta: i16) {
        self.value = match self.part {
            TimePart::Hour => self.value.shift_hour(delta),
            TimePart::Minute => self.value.shift_minute(delta),
        };
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 30, area);
        frame.render_widget(Clear, popup);

        let focused = Style::default().fg(Color::Black).bg(Color::Cyan).bold();
        let normal = Style::default().fg(Color::White);
        let (hour_style, minute_style) = match self.part {
            TimePart::Hour => (focused, normal),
            TimePart::Minute => (normal, focused),
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(format!(" {:02} ", self.value.hour12()), hour_style),
                Span::raw(" : "),
                Span::styled(format!(" {:02} ", self.value.minute()), minute_style),
                Span::raw("  "),
                Span::styled(self.value.meridiem(), Style::default().fg(Color::Yellow)),
            ])
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(
                "↑/↓ adjust  ←/→ switch  a/p AM/PM",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                "Enter OK  Esc cancel",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Select Time ");
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn picker(hour: u8, minute: u8) -> TimePicker {
        TimePicker::new(ClockTime::new(hour, minute).unwrap())
    }

    #[test]
    fn enter_confirms_seeded_value() {
        let mut p = picker(14, 5);
        assert_eq!(
            p.handle_key(key(KeyCode::Enter)),
            PickerOutcome::Confirmed(ClockTime::new(14, 5).unwrap())
        );
    }

    #[test]
    fn esc_dismisses() {
        let mut p = picker(8, 0);
        p.handle_key(key(KeyCode::Up));
        assert_eq!(p.handle_key(key(KeyCode::Esc)), PickerOutcome::Dismissed);
    }

    #[test]
    fn arrows_adjust_focused_part() {
        let mut p = picker(23, 59);
        assert_eq!(p.part(), TimePart::Hour);
        assert_eq!(p.handle_key(key(KeyCode::Up)), PickerOutcome::Pending);
        assert_eq!(p.value(), ClockTime::new(0, 59).unwrap());

        p.handle_key(key(KeyCode::Right));
        assert_eq!(p.part(), TimePart::Minute);
        p.handle_key(key(KeyCode::Char('k')));
        assert_eq!(p.value(), ClockTime::new(0, 0).unwrap());
        p.handle_key(key(KeyCode::PageDown));
        assert_eq!(p.value(), ClockTime::new(0, 50).unwrap());
    }

    #[test]
    fn meridiem_keys() {
        let mut p = picker(9, 30);
        p.handle_key(key(KeyCode::Char('p')));
        assert_eq!(p.value().to_string(), "09:30 PM");
        p.handle_key(key(KeyCode::Char('a')));
        assert_eq!(p.value().to_string(), "09:30 AM");
    }
}
