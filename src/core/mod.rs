//! # Core Navigation Logic
//!
//! This module contains zoetrope's domain logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │           CORE              │
//!                    │  (this module)              │
//!                    │                             │
//!                    │  • navigator (state machine)│
//!                    │  • timer (scheduling)       │
//!                    │  • gesture (swipe deltas)   │
//!                    │  • deck (content)           │
//!                    │  • config (settings)        │
//!                    │                             │
//!                    │  No terminal I/O. Pure.     │
//!                    └───────────┬─────────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigator`]: The `SlideNavigator` state machine — index, debounce,
//!   auto-advance
//! - [`timer`]: Schedule-once/periodic timers with cancellation by handle
//! - [`gesture`]: Horizontal drag tracking for swipe detection
//! - [`deck`]: Slide and quote content, loaded from TOML
//! - [`config`]: Layered settings resolution

pub mod config;
pub mod deck;
pub mod gesture;
pub mod navigator;
pub mod timer;
