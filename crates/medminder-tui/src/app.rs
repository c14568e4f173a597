use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveTime};
use crossterm::event::KeyEvent;
use medminder_store::ReminderStore;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::debug;

use crate::components::bottom_rect;
use crate::screen::{Screen, ScreenContext, ScreenKind, Toast, ToastKind, Transition};
use crate::screens::{FormScreen, ListScreen};

pub struct App {
    store: Arc<dyn ReminderStore>,
    list: ListScreen,
    form: FormScreen,
    active: ScreenKind,
    toast: Option<Toast>,
    clock: Box<dyn Fn() -> NaiveTime>,
}

impl App {
    pub fn new(store: Arc<dyn ReminderStore>) -> Self {
        Self::with_clock(store, || Local::now().time())
    }

    /// Build an app whose time picker is seeded from `clock`.
    pub fn with_clock(
        store: Arc<dyn ReminderStore>,
        clock: impl Fn() -> NaiveTime + 'static,
    ) -> Self {
        let mut app = Self {
            store,
            list: ListScreen::new(),
            form: FormScreen::new(),
            active: ScreenKind::List,
            toast: None,
            clock: Box::new(clock),
        };
        app.activate(ScreenKind::List);
        app
    }

    pub fn active_screen(&self) -> ScreenKind {
        self.active
    }

    pub fn list(&self) -> &ListScreen {
        &self.list
    }

    pub fn form(&self) -> &FormScreen {
        &self.form
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn is_input_mode(&self) -> bool {
        match self.active {
            ScreenKind::List => self.list.is_input_mode(),
            ScreenKind::Form => self.form.is_input_mode(),
        }
    }

    /// True while a toast is visible, so the event loop wakes up to expire it.
    pub fn needs_polling(&self) -> bool {
        self.toast.is_some()
    }

    /// Drop the toast once its time is up.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            debug!("toast expired");
            self.toast = None;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.toast = None;

        let store = Arc::clone(&self.store);
        let mut ctx = ScreenContext::new(store.as_ref(), (self.clock)());
        let transition = match self.active {
            ScreenKind::List => self.list.handle_key(key, &mut ctx),
            ScreenKind::Form => self.form.handle_key(key, &mut ctx),
        };
        self.toast = ctx.take_toast();

        if let Transition::Goto(kind) = transition {
            self.activate(kind);
        }
    }

    fn activate(&mut self, kind: ScreenKind) {
        debug!(screen = ?kind, "activating screen");
        self.active = kind;
        match kind {
            ScreenKind::List => self.list.on_activate(self.store.as_ref()),
            ScreenKind::Form => self.form.on_activate(self.store.as_ref()),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        match self.active {
            ScreenKind::List => self.list.render(frame, layout[1]),
            ScreenKind::Form => self.form.render(frame, layout[1]),
        }
        self.render_status_bar(frame, layout[2]);

        if let Some(ref toast) = self.toast {
            self.render_toast(frame, toast, area);
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let screen = match self.active {
            ScreenKind::List => "Reminders",
            ScreenKind::Form => "Add Medicine",
        };
        let title = Line::from(vec![
            Span::styled(
                " Medicine Reminder ",
                Style::default().bold().fg(Color::White).bg(Color::DarkGray),
            ),
            Span::raw(" | "),
            Span::styled(screen, Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(title, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.active {
            ScreenKind::List => " a: add medicine  r: refresh  j/k: scroll  q: quit",
            ScreenKind::Form => {
                if self.form.picker().is_some() {
                    " ↑/↓: adjust  ←/→: hour/minute  Enter: ok  Esc: cancel"
                } else {
                    " Tab/↑/↓: move  Space: toggle  Enter: select  Ctrl-S: add  Esc: back"
                }
            }
        };
        let line = Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)));
        frame.render_widget(line, area);
    }

    fn render_toast(&self, frame: &mut Frame, toast: &Toast, area: Rect) {
        let height = u16::try_from(toast.text.lines().count())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let popup = bottom_rect(60, height, area);
        frame.render_widget(Clear, popup);

        let color = match toast.kind {
            ToastKind::Info => Color::Green,
            ToastKind::Error => Color::Red,
        };
        let paragraph = Paragraph::new(toast.text.as_str())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(paragraph, popup);
    }
}
