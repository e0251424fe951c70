//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status line showing the deck title and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `Carousel`: The manually navigated slide gallery
//! - `Ticker`: The auto-advancing quote panel
//!
//! Stateful components split into a persistent `*State` struct owned by
//! `TuiState` and a transient render wrapper created each frame with
//! borrowed state. Each component file contains its state types, event
//! types, rendering, event handling, and tests.

pub mod carousel;
pub mod ticker;
pub mod title_bar;

pub use carousel::{Carousel, CarouselEvent, CarouselState};
pub use ticker::{Ticker, TickerEvent, TickerState};
pub use title_bar::TitleBar;
