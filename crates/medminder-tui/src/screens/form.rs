use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use medminder_core::{
    ClockTime, ReminderDraft, Weekday, FREQUENCY_MAX_DIGITS, NAME_MAX_CHARS,
};
use medminder_store::ReminderStore;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{debug, info};

use crate::components::time_picker::{PickerOutcome, TimePicker};
use crate::screen::{Screen, ScreenContext, ScreenKind, Toast, Transition};

/// One focusable row of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Time,
    Frequency,
    Day(Weekday),
    Submit,
}

impl FormField {
    /// Focus order, top to bottom.
    pub const ORDER: [FormField; 11] = [
        FormField::Name,
        FormField::Time,
        FormField::Frequency,
        FormField::Day(Weekday::Monday),
        FormField::Day(Weekday::Tuesday),
        FormField::Day(Weekday::Wednesday),
        FormField::Day(Weekday::Thursday),
        FormField::Day(Weekday::Friday),
        FormField::Day(Weekday::Saturday),
        FormField::Day(Weekday::Sunday),
        FormField::Submit,
    ];

    fn is_text(&self) -> bool {
        matches!(self, FormField::Name | FormField::Frequency)
    }
}

/// The "Add Medicine" form.
#[derive(Debug, Default)]
pub struct FormScreen {
    draft: ReminderDraft,
    focus: usize,
    picker: Option<TimePicker>,
}

impl FormScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ReminderDraft {
        &self.draft
    }

    pub fn focused(&self) -> FormField {
        FormField::ORDER[self.focus]
    }

    pub fn picker(&self) -> Option<&TimePicker> {
        self.picker.as_ref()
    }

    /// Label for the time row, as shown to the user.
    pub fn time_label(&self) -> String {
        match self.draft.time {
            Some(t) => format!("Time: {t}"),
            None => "No time selected".to_string(),
        }
    }

    /// Validate, append to the store and report the outcome as a toast.
    pub fn on_submit(&mut self, store: &dyn ReminderStore) -> Toast {
        let reminder = match self.draft.validate() {
            Ok(r) => r,
            Err(e) => {
                debug!("form rejected: {e}");
                return Toast::short(e.to_string());
            }
        };
        match store.append_line(&reminder.to_line()) {
            Ok(()) => {
                info!(name = %reminder.name, "reminder saved");
                Toast::long(reminder.confirmation())
            }
            Err(e) => Toast::error(format!("Could not save reminder: {e}")),
        }
    }

    fn open_picker(&mut self, now: ClockTime) {
        self.picker = Some(TimePicker::new(now));
    }

    fn move_focus(&mut self, forward: bool) {
        let len = FormField::ORDER.len();
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    fn push_char(&mut self, c: char) {
        match self.focused() {
            FormField::Name => {
                if self.draft.name.chars().count() < NAME_MAX_CHARS {
                    self.draft.name.push(c);
                }
            }
            FormField::Frequency => {
                if c.is_ascii_digit() && self.draft.frequency.len() < FREQUENCY_MAX_DIGITS {
                    self.draft.frequency.push(c);
                }
            }
            _ => {}
        }
    }

    fn pop_char(&mut self) {
        match self.focused() {
            FormField::Name => {
                self.draft.name.pop();
            }
            FormField::Frequency => {
                self.draft.frequency.pop();
            }
            _ => {}
        }
    }

    /// Enter or Space on a non-text row.
    fn activate_focused(&mut self, ctx: &mut ScreenContext<'_>) {
        match self.focused() {
            FormField::Time => self.open_picker(ClockTime::from(ctx.now)),
            FormField::Day(day) => self.draft.days.toggle(day),
            FormField::Submit => {
                let toast = self.on_submit(ctx.store);
                ctx.notify(toast);
            }
            FormField::Name | FormField::Frequency => self.move_focus(true),
        }
    }

    fn row_style(&self, field: FormField) -> Style {
        if self.focused() == field {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        }
    }

    fn text_row<'a>(
        &self,
        field: FormField,
        label: &'a str,
        value: &'a str,
        hint: &'a str,
    ) -> Line<'a> {
        let value_span = if value.is_empty() {
            Span::styled(hint, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value)
        };
        let mut spans = vec![Span::styled(label, Style::default().bold()), value_span];
        if self.focused() == field && self.picker.is_none() {
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans).style(self.row_style(field))
    }
}

impl Screen for FormScreen {
    /// Each visit starts from an empty form.
    fn on_activate(&mut self, _store: &dyn ReminderStore) {
        *self = Self::default();
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext<'_>) -> Transition {
        if let Some(picker) = self.picker.as_mut() {
            match picker.handle_key(key) {
                PickerOutcome::Pending => {}
                PickerOutcome::Confirmed(time) => {
                    self.draft.time = Some(time);
                    self.picker = None;
                }
                PickerOutcome::Dismissed => self.picker = None,
            }
            return Transition::Stay;
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let toast = self.on_submit(ctx.store);
            ctx.notify(toast);
            return Transition::Stay;
        }

        match key.code {
            KeyCode::Esc => return Transition::Goto(ScreenKind::List),
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Enter => self.activate_focused(ctx),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char(' ') if !self.focused().is_text() => self.activate_focused(ctx),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.push_char(c)
            }
            _ => {}
        }
        Transition::Stay
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled("Add Medicine", Style::default().bold()))
                .alignment(Alignment::Center),
            Line::from(""),
            self.text_row(FormField::Name, "Medicine name: ", &self.draft.name, "Medicine Name"),
            Line::from(vec![
                Span::styled("Time:          ", Style::default().bold()),
                Span::raw(self.time_label()),
                Span::styled("  [Select Time]", Style::default().fg(Color::Yellow)),
            ])
            .style(self.row_style(FormField::Time)),
            self.text_row(
                FormField::Frequency,
                "Times per day: ",
                &self.draft.frequency,
                "Times per day (e.g., 3)",
            ),
            Line::from(""),
            Line::from(Span::styled("Select Days:", Style::default().bold())),
        ];

        for &day in Weekday::ALL {
            let mark = if self.draft.days.is_selected(day) { "[x] " } else { "[ ] " };
            lines.push(
                Line::from(format!("  {mark}{day}")).style(self.row_style(FormField::Day(day))),
            );
        }

        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled("< Add to List >", Style::default().bold()))
                .alignment(Alignment::Center)
                .style(self.row_style(FormField::Submit)),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" ← Back (Esc) ");
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if let Some(ref picker) = self.picker {
            picker.render(frame, area);
        }
    }

    fn is_input_mode(&self) -> bool {
        self.picker.is_some() || self.focused().is_text()
    }
}
