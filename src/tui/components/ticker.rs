//! # Ticker Component
//!
//! The auto-advancing quote panel. Same navigation surface as the gallery
//! carousel, plus a periodic rotation timer: quotes advance on their own,
//! any user interaction pauses the rotation and schedules a resume, and
//! Space toggles it outright.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TickerState` lives in `TuiState`
//! - `Ticker` is created each frame with borrowed state

use std::time::{Duration, Instant};

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::core::deck::Quote;
use crate::core::gesture::DragTracker;
use crate::core::navigator::SlideNavigator;
use crate::core::timer::Timers;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the ticker widget.
pub struct TickerState {
    pub navigator: SlideNavigator,
    drag: DragTracker,
    auto_interval: Duration,
    resume_delay: Duration,
    /// Panel area at the last render, for mouse routing.
    area: Rect,
    /// Indicator dot cells at the last render, one per quote.
    dots: Vec<(u16, u16)>,
}

/// Events emitted by the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerEvent {
    /// An accepted move to the given index.
    Moved(usize),
    /// Auto-advance was switched on or off via the toggle key.
    AutoToggled(bool),
}

impl TickerState {
    pub fn new(
        quote_count: usize,
        transition: Duration,
        swipe_threshold: i32,
        auto_interval: Duration,
        resume_delay: Duration,
    ) -> Self {
        Self {
            navigator: SlideNavigator::new(quote_count, transition, swipe_threshold),
            drag: DragTracker::new(),
            auto_interval,
            resume_delay,
            area: Rect::default(),
            dots: Vec::new(),
        }
    }

    /// Kick off the periodic rotation.
    pub fn start(&mut self, now: Instant, timers: &mut Timers) {
        self.navigator
            .start_auto_advance(self.auto_interval, now, timers);
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.area.contains(ratatui::layout::Position::new(col, row))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Whether the rotation is running or merely paused pending a resume.
    pub fn auto_engaged(&self) -> bool {
        self.navigator.auto_advance_active() || self.navigator.resume_pending()
    }

    /// Release every timer handle this widget owns.
    pub fn teardown(&mut self, timers: &mut Timers) {
        self.navigator.teardown(timers);
    }

    /// A user touched the widget: stop rotating for a while, then pick the
    /// rotation back up.
    fn pause(&mut self, now: Instant, timers: &mut Timers) {
        self.navigator
            .pause_then_resume(self.resume_delay, now, timers);
    }

    fn toggle_auto(&mut self, now: Instant, timers: &mut Timers) -> TickerEvent {
        if self.auto_engaged() {
            self.navigator.stop_auto_advance(timers);
            self.navigator.cancel_resume(timers);
            TickerEvent::AutoToggled(false)
        } else {
            self.start(now, timers);
            TickerEvent::AutoToggled(true)
        }
    }

    fn hit_indicator(&self, col: u16, row: u16) -> Option<usize> {
        self.dots.iter().position(|&cell| cell == (col, row))
    }
}

impl EventHandler for TickerState {
    type Event = TickerEvent;

    fn handle_event(
        &mut self,
        event: &TuiEvent,
        now: Instant,
        timers: &mut Timers,
    ) -> Option<TickerEvent> {
        if let TuiEvent::ToggleAutoAdvance = event {
            return Some(self.toggle_auto(now, timers));
        }

        // Everything below is a user interaction: whenever it produces a
        // navigation attempt, the rotation pauses and later resumes.
        let moved = match *event {
            TuiEvent::NextSlide => {
                self.pause(now, timers);
                self.navigator.next(now, timers)
            }
            TuiEvent::PrevSlide => {
                self.pause(now, timers);
                self.navigator.previous(now, timers)
            }
            TuiEvent::JumpTo(index) => {
                self.pause(now, timers);
                self.navigator.goto(index, now, timers)
            }
            TuiEvent::MouseDown(col, row) => {
                if let Some(index) = self.hit_indicator(col, row) {
                    self.pause(now, timers);
                    self.navigator.goto(index, now, timers)
                } else {
                    self.drag.press(col);
                    None
                }
            }
            TuiEvent::MouseDrag(col, _) => {
                self.drag.drag(col);
                None
            }
            TuiEvent::MouseUp(col, _) => {
                self.drag.drag(col);
                match self.drag.release() {
                    Some(delta) => {
                        let moved = self.navigator.on_swipe(delta, now, timers);
                        if moved.is_some() {
                            // Only a drag that cleared the threshold counts
                            // as an interaction worth pausing for.
                            self.pause(now, timers);
                        }
                        moved
                    }
                    None => None,
                }
            }
            TuiEvent::WheelDown(_, _) => {
                self.pause(now, timers);
                self.navigator.next(now, timers)
            }
            TuiEvent::WheelUp(_, _) => {
                self.pause(now, timers);
                self.navigator.previous(now, timers)
            }
            _ => None,
        };
        moved.map(TickerEvent::Moved)
    }
}

/// Transient render wrapper for the ticker panel.
pub struct Ticker<'a> {
    state: &'a mut TickerState,
    quotes: &'a [Quote],
    focused: bool,
}

impl<'a> Ticker<'a> {
    pub fn new(state: &'a mut TickerState, quotes: &'a [Quote], focused: bool) -> Self {
        Self {
            state,
            quotes,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;
        self.state.dots.clear();

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let status = if self.state.navigator.auto_advance_active() {
            " auto "
        } else if self.state.navigator.resume_pending() {
            " paused "
        } else {
            " manual "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Quotes ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(status).right_aligned())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.quotes.is_empty() {
            let empty = Paragraph::new("No quotes in this deck")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let quote = &self.quotes[self.state.navigator.current_index()];
        let text_area = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };

        let mut lines: Vec<Line> = textwrap::wrap(&quote.text, text_area.width.max(1) as usize)
            .iter()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().add_modifier(Modifier::ITALIC))))
            .collect();
        if let Some(attribution) = &quote.attribution {
            let label = format!("— {}", attribution);
            // Right-align by hand so the em-dash hangs with the name.
            let pad = (text_area.width as usize).saturating_sub(label.width());
            lines.push(Line::from(Span::styled(
                format!("{}{}", " ".repeat(pad), label),
                Style::default().fg(Color::Gray),
            )));
        }
        frame.render_widget(Paragraph::new(lines), text_area);

        self.render_indicators(frame, inner);
    }

    fn render_indicators(&mut self, frame: &mut Frame, inner: Rect) {
        let count = self.quotes.len();
        if count < 2 || inner.height < 2 {
            return;
        }
        let width = (count * 2 - 1) as u16;
        if width > inner.width {
            return;
        }
        let start = inner.x + (inner.width - width) / 2;
        let row = inner.y + inner.height - 1;
        let current = self.state.navigator.current_index();

        let mut spans = Vec::with_capacity(count * 2);
        for i in 0..count {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let (dot, style) = if i == current {
                ("●", Style::default().fg(Color::Cyan))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(dot, style));
            self.state.dots.push((start + (i * 2) as u16, row));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(start, row, width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn quotes(n: usize) -> Vec<Quote> {
        (0..n)
            .map(|i| Quote {
                text: format!("Quote number {}", i + 1),
                attribution: Some("someone".to_string()),
            })
            .collect()
    }

    fn state_for(n: usize) -> TickerState {
        TickerState::new(
            n,
            Duration::from_millis(500),
            6,
            Duration::from_millis(3000),
            Duration::from_millis(10000),
        )
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_renders_quote_and_status() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let deck = quotes(3);
        let mut state = state_for(3);
        let mut timers = Timers::new();
        state.start(Instant::now(), &mut timers);

        terminal
            .draw(|f| Ticker::new(&mut state, &deck, false).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Quotes"));
        assert!(text.contains("Quote number 1"));
        assert!(text.contains("someone"));
        assert!(text.contains("auto"));
    }

    #[test]
    fn test_interaction_pauses_rotation() {
        let mut state = state_for(3);
        let mut timers = Timers::new();
        let now = Instant::now();
        state.start(now, &mut timers);
        assert!(state.navigator.auto_advance_active());

        let result = state.handle_event(&TuiEvent::NextSlide, now, &mut timers);
        assert_eq!(result, Some(TickerEvent::Moved(1)));
        assert!(!state.navigator.auto_advance_active());
        assert!(state.navigator.resume_pending());
    }

    #[test]
    fn test_rotation_resumes_after_delay() {
        let mut state = state_for(3);
        let mut timers = Timers::new();
        let t0 = Instant::now();
        state.start(t0, &mut timers);
        state.handle_event(&TuiEvent::NextSlide, t0, &mut timers);

        // Walk simulated time past the resume delay and one more rotation
        // interval, routing fired timers.
        let mut now = t0;
        for _ in 0..30 {
            now += ms(500);
            for id in timers.poll(now) {
                state.navigator.on_timer(id, now, &mut timers);
            }
        }
        assert!(state.navigator.auto_advance_active());
        // And the rotation has actually moved on since resuming.
        assert_ne!(state.navigator.current_index(), 1);
    }

    #[test]
    fn test_short_swipe_does_not_pause() {
        let mut state = state_for(3);
        let mut timers = Timers::new();
        let now = Instant::now();
        state.start(now, &mut timers);

        state.handle_event(&TuiEvent::MouseDown(40, 4), now, &mut timers);
        let result = state.handle_event(&TuiEvent::MouseUp(38, 4), now, &mut timers);
        assert_eq!(result, None);
        assert!(state.navigator.auto_advance_active());
    }

    #[test]
    fn test_swipe_past_threshold_moves_and_pauses() {
        let mut state = state_for(3);
        let mut timers = Timers::new();
        let now = Instant::now();
        state.start(now, &mut timers);

        state.handle_event(&TuiEvent::MouseDown(40, 4), now, &mut timers);
        state.handle_event(&TuiEvent::MouseDrag(20, 4), now, &mut timers);
        let result = state.handle_event(&TuiEvent::MouseUp(20, 4), now, &mut timers);
        assert_eq!(result, Some(TickerEvent::Moved(1)));
        assert!(state.navigator.resume_pending());
    }

    #[test]
    fn test_toggle_switches_rotation_off_and_on() {
        let mut state = state_for(3);
        let mut timers = Timers::new();
        let now = Instant::now();
        state.start(now, &mut timers);

        let off = state.handle_event(&TuiEvent::ToggleAutoAdvance, now, &mut timers);
        assert_eq!(off, Some(TickerEvent::AutoToggled(false)));
        assert!(!state.auto_engaged());
        assert_eq!(timers.pending(), 0);

        let on = state.handle_event(&TuiEvent::ToggleAutoAdvance, now, &mut timers);
        assert_eq!(on, Some(TickerEvent::AutoToggled(true)));
        assert!(state.navigator.auto_advance_active());
    }

    #[test]
    fn test_toggle_while_paused_switches_off() {
        let mut state = state_for(3);
        let mut timers = Timers::new();
        let now = Instant::now();
        state.start(now, &mut timers);
        state.handle_event(&TuiEvent::NextSlide, now, &mut timers);
        assert!(state.navigator.resume_pending());

        state.handle_event(&TuiEvent::ToggleAutoAdvance, now, &mut timers);
        assert!(!state.auto_engaged());

        // The cancelled resume must not bring the rotation back.
        let later = now + ms(60000);
        for id in timers.poll(later) {
            state.navigator.on_timer(id, later, &mut timers);
        }
        assert!(!state.navigator.auto_advance_active());
        assert_eq!(timers.pending(), 0);
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }
}
