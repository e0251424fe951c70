//! # TitleBar Component
//!
//! Top status line: deck title plus a transient status message. Purely
//! presentational — it receives all data as props and holds no state, which
//! keeps it trivial to test against a `TestBackend` buffer.

use crate::tui::component::Component;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

/// Top status bar component showing the deck title and status messages.
pub struct TitleBar {
    /// Deck title, or the fallback name for untitled decks.
    pub deck_title: String,
    /// Transient status (e.g. "Auto-advance off").
    pub status_message: String,
}

impl TitleBar {
    pub fn new(deck_title: String, status_message: String) -> Self {
        Self {
            deck_title,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Zoetrope — {}", self.deck_title)
        } else {
            format!("Zoetrope — {} | {}", self.deck_title, self.status_message)
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_deck_title() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut title_bar = TitleBar::new("Launch Talk".to_string(), String::new());
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Zoetrope"));
        assert!(text.contains("Launch Talk"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut title_bar = TitleBar::new("Demo".to_string(), "Auto-advance off".to_string());
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Demo"));
        assert!(text.contains("Auto-advance off"));
    }
}
