use crossterm::event::{KeyCode, KeyEvent};
use medminder_core::listing::listing_text;
use medminder_store::ReminderStore;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tracing::debug;

use crate::screen::{Screen, ScreenContext, ScreenKind, Transition};

/// Saved reminders, one bulleted line each.
#[derive(Debug, Default)]
pub struct ListScreen {
    /// Text produced by the latest activation.
    text: String,
    scroll: u16,
}

impl ListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn line_count(&self) -> u16 {
        u16::try_from(self.text.lines().count()).unwrap_or(u16::MAX)
    }
}

impl Screen for ListScreen {
    fn on_activate(&mut self, store: &dyn ReminderStore) {
        self.text = listing_text(store.read_all_lines());
        self.scroll = 0;
        debug!(lines = self.text.lines().count(), "reminder list refreshed");
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext<'_>) -> Transition {
        match key.code {
            KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Enter => {
                return Transition::Goto(ScreenKind::Form);
            }
            KeyCode::Char('r') => self.on_activate(ctx.store),
            KeyCode::Char('j') | KeyCode::Down => {
                if self.scroll + 1 < self.line_count() {
                    self.scroll += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            _ => {}
        }
        Transition::Stay
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let button = Paragraph::new(Line::from(vec![
            Span::styled("[a] ", Style::default().fg(Color::Yellow)),
            Span::styled("Add Medicine", Style::default().bold()),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, layout[0]);

        let list = Paragraph::new(self.text.as_str())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Reminders "),
            );
        frame.render_widget(list, layout[1]);
    }
}
