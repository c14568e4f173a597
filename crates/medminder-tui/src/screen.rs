use std::time::{Duration, Instant};

use chrono::NaiveTime;
use crossterm::event::KeyEvent;
use medminder_store::ReminderStore;
use ratatui::prelude::*;

const SHORT_TOAST: Duration = Duration::from_millis(2000);
const LONG_TOAST: Duration = Duration::from_millis(3500);

/// Which screen is in the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    List,
    Form,
}

/// What a screen asks the app to do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Goto(ScreenKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient message drawn over the active screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    shown_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn short(text: impl Into<String>) -> Self {
        Self::new(text.into(), ToastKind::Info, SHORT_TOAST)
    }

    pub fn long(text: impl Into<String>) -> Self {
        Self::new(text.into(), ToastKind::Info, LONG_TOAST)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text.into(), ToastKind::Error, SHORT_TOAST)
    }

    fn new(text: String, kind: ToastKind, duration: Duration) -> Self {
        Self {
            text,
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

/// Everything a screen may touch while handling a key.
pub struct ScreenContext<'a> {
    pub store: &'a dyn ReminderStore,
    /// Wall-clock time when the key arrived. Seeds the time picker.
    pub now: NaiveTime,
    toast: Option<Toast>,
}

impl<'a> ScreenContext<'a> {
    pub fn new(store: &'a dyn ReminderStore, now: NaiveTime) -> Self {
        Self {
            store,
            now,
            toast: None,
        }
    }

    pub fn notify(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toast.take()
    }
}

/// Lifecycle shared by the list and form screens.
pub trait Screen {
    /// Called every time the screen comes to the foreground.
    fn on_activate(&mut self, store: &dyn ReminderStore);

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext<'_>) -> Transition;

    fn render(&self, frame: &mut Frame, area: Rect);

    /// True while typed characters belong to the screen rather than to
    /// global shortcuts.
    fn is_input_mode(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_durations() {
        assert_eq!(Toast::short("x").duration(), Duration::from_secs(2));
        assert_eq!(Toast::long("x").duration(), Duration::from_millis(3500));
        assert_eq!(Toast::error("x").kind, ToastKind::Error);
    }

    #[test]
    fn toast_expires_after_duration() {
        let toast = Toast::short("Please select a time");
        let start = Instant::now();
        assert!(!toast.is_expired(toast.shown_at));
        assert!(toast.is_expired(start + Duration::from_secs(3)));
    }
}
