//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates input events into navigator operations.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work: a frame
//! is drawn only after an input event or a fired timer changed something.
//! The input poll timeout is derived from the timer facility's next
//! deadline, capped at 500ms, so the loop sleeps instead of spinning while
//! still waking exactly when an auto-advance tick or debounce window is due.
//!
//! ## Widget Independence
//!
//! The gallery and the ticker are two `SlideNavigator` instances sharing one
//! `Timers` facility. Fired handles are offered to both; each navigator
//! routes only its own. Keyboard navigation goes to the focused widget,
//! mouse events to the widget under the pointer (or the one owning the
//! in-flight drag).

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::info;
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::timer::Timers;
use crate::tui::component::EventHandler;
use crate::tui::components::{CarouselState, TickerEvent, TickerState};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// Longest the loop sleeps on input when no timer is due sooner.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which widget keyboard navigation is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Gallery,
    Ticker,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Gallery => Focus::Ticker,
            Focus::Ticker => Focus::Gallery,
        }
    }
}

/// TUI-specific presentation state (not part of core navigation logic)
pub struct TuiState {
    pub gallery: CarouselState,
    pub ticker: TickerState,
    pub focus: Focus,
    pub status_message: String,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, deck: &Deck) -> Self {
        Self {
            gallery: CarouselState::new(
                deck.slides.len(),
                config.transition,
                config.swipe_threshold,
            ),
            ticker: TickerState::new(
                deck.quotes.len(),
                config.transition,
                config.swipe_threshold,
                config.auto_advance_interval,
                config.resume_delay,
            ),
            focus: Focus::Gallery,
            status_message: String::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig, deck: Deck) -> std::io::Result<()> {
    let mut tui = TuiState::new(&config, &deck);
    let mut timers = Timers::new();

    if config.auto_advance {
        tui.ticker.start(Instant::now(), &mut timers);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &mut tui, &deck))?;
            needs_redraw = false;
        }

        // Sleep until input arrives or the next timer is due
        let timeout = timers
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let now = Instant::now();
            match tui_event {
                TuiEvent::Quit => {
                    should_quit = true;
                }
                TuiEvent::Resize => {
                    needs_redraw = true;
                }
                TuiEvent::FocusNext => {
                    tui.focus = tui.focus.next();
                    needs_redraw = true;
                }
                // Space always addresses the ticker's rotation
                TuiEvent::ToggleAutoAdvance => {
                    if let Some(TickerEvent::AutoToggled(on)) =
                        tui.ticker.handle_event(&tui_event, now, &mut timers)
                    {
                        tui.status_message = if on {
                            "Auto-advance on".to_string()
                        } else {
                            "Auto-advance off".to_string()
                        };
                        needs_redraw = true;
                    }
                }
                // Keyboard navigation goes to the focused widget
                TuiEvent::NextSlide | TuiEvent::PrevSlide | TuiEvent::JumpTo(_) => {
                    let handled = match tui.focus {
                        Focus::Gallery => tui
                            .gallery
                            .handle_event(&tui_event, now, &mut timers)
                            .is_some(),
                        Focus::Ticker => tui
                            .ticker
                            .handle_event(&tui_event, now, &mut timers)
                            .is_some(),
                    };
                    if handled {
                        needs_redraw = true;
                    }
                }
                // Mouse presses go to the widget under the pointer, which
                // also takes keyboard focus
                TuiEvent::MouseDown(col, row)
                | TuiEvent::WheelUp(col, row)
                | TuiEvent::WheelDown(col, row) => {
                    if tui.gallery.contains(col, row) {
                        tui.focus = Focus::Gallery;
                        tui.ticker.cancel_drag();
                        if tui
                            .gallery
                            .handle_event(&tui_event, now, &mut timers)
                            .is_some()
                        {
                            needs_redraw = true;
                        }
                    } else if tui.ticker.contains(col, row) {
                        tui.focus = Focus::Ticker;
                        tui.gallery.cancel_drag();
                        if tui
                            .ticker
                            .handle_event(&tui_event, now, &mut timers)
                            .is_some()
                        {
                            needs_redraw = true;
                        }
                    }
                }
                // Drag continuation and release go to the widget owning the
                // in-flight drag, wherever the pointer is now
                TuiEvent::MouseDrag(_, _) | TuiEvent::MouseUp(_, _) => {
                    let owner_event = if tui.gallery.is_dragging() {
                        tui.gallery.handle_event(&tui_event, now, &mut timers).map(|_| ())
                    } else if tui.ticker.is_dragging() {
                        tui.ticker.handle_event(&tui_event, now, &mut timers).map(|_| ())
                    } else {
                        None
                    };
                    if owner_event.is_some() {
                        needs_redraw = true;
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Fire due timers and let each navigator route its own handles
        let now = Instant::now();
        for id in timers.poll(now) {
            tui.gallery.navigator.on_timer(id, now, &mut timers);
            tui.ticker.navigator.on_timer(id, now, &mut timers);
            // Ticks move indices and a resume flips the ticker's label, so
            // redraw after any firing rather than tracking which
            needs_redraw = true;
        }
    }

    // Release every timer handle before the view goes away
    tui.gallery.teardown(&mut timers);
    tui.ticker.teardown(&mut timers);
    info!("Shutting down ({} timers left pending)", timers.pending());

    ratatui::restore();
    Ok(())
}
