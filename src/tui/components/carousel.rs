//! # Carousel Component
//!
//! The manually navigated gallery: one slide at a time inside a bordered
//! panel, with `‹ ›` edge arrows, an indicator dot row, and a position
//! label. Navigation comes from arrow keys, digit jumps, indicator clicks,
//! the mouse wheel, and horizontal drags.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CarouselState` lives in `TuiState`
//! - `Carousel` is created each frame with borrowed state
//!
//! The render pass caches the panel area and indicator dot cells so the
//! next event dispatch can hit-test clicks without re-deriving the layout.

use std::time::{Duration, Instant};

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;

use crate::core::deck::Slide;
use crate::core::gesture::DragTracker;
use crate::core::navigator::SlideNavigator;
use crate::core::timer::Timers;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Persistent state for a carousel widget.
pub struct CarouselState {
    pub navigator: SlideNavigator,
    drag: DragTracker,
    /// Panel area at the last render, for mouse routing.
    area: Rect,
    /// Indicator dot cells at the last render, one per slide.
    dots: Vec<(u16, u16)>,
    /// Arrow cells at the last render.
    arrow_left: Option<(u16, u16)>,
    arrow_right: Option<(u16, u16)>,
}

/// Events emitted by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// An accepted move to the given index.
    Moved(usize),
}

impl CarouselState {
    pub fn new(slide_count: usize, transition: Duration, swipe_threshold: i32) -> Self {
        Self {
            navigator: SlideNavigator::new(slide_count, transition, swipe_threshold),
            drag: DragTracker::new(),
            area: Rect::default(),
            dots: Vec::new(),
            arrow_left: None,
            arrow_right: None,
        }
    }

    /// Whether the given screen cell falls inside the panel as of the last
    /// render.
    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.area.contains(ratatui::layout::Position::new(col, row))
    }

    /// Whether a drag that started inside this widget is still in flight.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Abandon an in-flight drag (pointer left the widget).
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Release every timer handle this widget owns.
    pub fn teardown(&mut self, timers: &mut Timers) {
        self.navigator.teardown(timers);
    }

    fn hit_indicator(&self, col: u16, row: u16) -> Option<usize> {
        self.dots.iter().position(|&cell| cell == (col, row))
    }

    fn on_mouse_down(
        &mut self,
        col: u16,
        row: u16,
        now: Instant,
        timers: &mut Timers,
    ) -> Option<usize> {
        if let Some(index) = self.hit_indicator(col, row) {
            return self.navigator.goto(index, now, timers);
        }
        if self.arrow_left == Some((col, row)) {
            return self.navigator.previous(now, timers);
        }
        if self.arrow_right == Some((col, row)) {
            return self.navigator.next(now, timers);
        }
        self.drag.press(col);
        None
    }
}

impl EventHandler for CarouselState {
    type Event = CarouselEvent;

    fn handle_event(
        &mut self,
        event: &TuiEvent,
        now: Instant,
        timers: &mut Timers,
    ) -> Option<CarouselEvent> {
        let moved = match *event {
            TuiEvent::NextSlide => self.navigator.next(now, timers),
            TuiEvent::PrevSlide => self.navigator.previous(now, timers),
            TuiEvent::JumpTo(index) => self.navigator.goto(index, now, timers),
            TuiEvent::MouseDown(col, row) => self.on_mouse_down(col, row, now, timers),
            TuiEvent::MouseDrag(col, _) => {
                self.drag.drag(col);
                None
            }
            TuiEvent::MouseUp(col, _) => {
                self.drag.drag(col);
                self.drag
                    .release()
                    .and_then(|delta| self.navigator.on_swipe(delta, now, timers))
            }
            TuiEvent::WheelDown(_, _) => self.navigator.next(now, timers),
            TuiEvent::WheelUp(_, _) => self.navigator.previous(now, timers),
            _ => None,
        };
        moved.map(CarouselEvent::Moved)
    }
}

/// Transient render wrapper for a carousel panel.
pub struct Carousel<'a> {
    state: &'a mut CarouselState,
    slides: &'a [Slide],
    title: &'a str,
    focused: bool,
}

impl<'a> Carousel<'a> {
    pub fn new(
        state: &'a mut CarouselState,
        slides: &'a [Slide],
        title: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            slides,
            title,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;
        self.state.dots.clear();
        self.state.arrow_left = None;
        self.state.arrow_right = None;

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        if !self.slides.is_empty() {
            let position = format!(
                " {} / {} ",
                self.state.navigator.current_index() + 1,
                self.slides.len()
            );
            block = block.title_bottom(Line::from(position).right_aligned());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.slides.is_empty() {
            let empty = Paragraph::new("No slides in this deck")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let slide = &self.slides[self.state.navigator.current_index()];

        // Reserve one row at the bottom for the indicator dots; arrows take
        // one column on each side of the content.
        let content = Rect {
            x: inner.x + 2,
            y: inner.y,
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(1),
        };

        let heading = Paragraph::new(Line::from(Span::styled(
            slide.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(
            heading,
            Rect {
                height: content.height.min(1),
                ..content
            },
        );

        if content.height > 2 {
            let body_area = Rect {
                y: content.y + 2,
                height: content.height - 2,
                ..content
            };
            let wrapped = textwrap::wrap(&slide.body, body_area.width.max(1) as usize);
            let lines: Vec<Line> = wrapped.iter().map(|l| Line::from(l.as_ref())).collect();
            frame.render_widget(Paragraph::new(lines), body_area);
        }

        self.render_arrows(frame, inner);
        self.render_indicators(frame, inner);
    }

    fn render_arrows(&mut self, frame: &mut Frame, inner: Rect) {
        if self.slides.len() < 2 || inner.width < 4 {
            return;
        }
        let mid = inner.y + inner.height / 2;
        let left = (inner.x, mid);
        let right = (inner.x + inner.width - 1, mid);
        let style = Style::default().fg(Color::Gray);

        frame.render_widget(
            Paragraph::new(Span::styled("‹", style)),
            Rect::new(left.0, left.1, 1, 1),
        );
        frame.render_widget(
            Paragraph::new(Span::styled("›", style)),
            Rect::new(right.0, right.1, 1, 1),
        );
        self.state.arrow_left = Some(left);
        self.state.arrow_right = Some(right);
    }

    fn render_indicators(&mut self, frame: &mut Frame, inner: Rect) {
        let count = self.slides.len();
        if count < 2 || inner.height < 2 {
            return;
        }
        // One dot per slide, one cell apart: "● ○ ○"
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
                (ACTIVE_DOT, Style::default().fg(Color::Cyan))
            } else {
                (INACTIVE_DOT, Style::default().fg(Color::DarkGray))
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
