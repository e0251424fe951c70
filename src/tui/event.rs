use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,

    // Keyboard navigation for the focused widget
    NextSlide,
    PrevSlide,
    /// Jump to a slide by zero-based index (digit keys)
    JumpTo(usize),
    /// Tab — move focus between the gallery and the ticker
    FocusNext,
    /// Space — toggle ticker auto-advance
    ToggleAutoAdvance,

    // Mouse, in screen coordinates; hit-testing happens in the run loop
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),
    WheelUp(u16, u16),
    WheelDown(u16, u16),

    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Left) => Some(TuiEvent::PrevSlide),
                (_, KeyCode::Right) => Some(TuiEvent::NextSlide),
                (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                (_, KeyCode::Char(' ')) => Some(TuiEvent::ToggleAutoAdvance),
                // 1..9 jump to that slide (1-based on the keyboard)
                (_, KeyCode::Char(c)) if c.is_ascii_digit() && c != '0' => {
                    Some(TuiEvent::JumpTo(c as usize - '1' as usize))
                }
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
                MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::MouseDrag(col, row)),
                MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
                MouseEventKind::ScrollUp => Some(TuiEvent::WheelUp(col, row)),
                MouseEventKind::ScrollDown => Some(TuiEvent::WheelDown(col, row)),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}
