use crate::core::deck::Deck;
use crate::tui::component::Component;
use crate::tui::components::{Carousel, Ticker, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::Frame;

/// Screen regions of the single-view layout.
pub struct Areas {
    pub title: Rect,
    pub gallery: Rect,
    pub ticker: Rect,
    pub help: Rect,
}

/// Split the frame: title line, gallery panel, ticker panel, help line.
pub fn layout_areas(frame_area: Rect) -> Areas {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(8), Length(7), Length(1)]);
    let [title, gallery, ticker, help] = layout.areas(frame_area);
    Areas {
        title,
        gallery,
        ticker,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState, deck: &Deck) {
    let areas = layout_areas(frame.area());

    let deck_title = deck
        .title
        .clone()
        .unwrap_or_else(|| "untitled deck".to_string());
    let mut title_bar = TitleBar::new(deck_title, tui.status_message.clone());
    title_bar.render(frame, areas.title);

    Carousel::new(
        &mut tui.gallery,
        &deck.slides,
        "Gallery",
        tui.focus == Focus::Gallery,
    )
    .render(frame, areas.gallery);

    Ticker::new(&mut tui.ticker, &deck.quotes, tui.focus == Focus::Ticker).render(frame, areas.ticker);

    let help = Span::styled(
        " ←/→ navigate  1-9 jump  Tab focus  Space auto  drag to swipe  q quit",
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(help, areas.help);
}
