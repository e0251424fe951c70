use std::time::{Duration, Instant};

use zoetrope::core::navigator::SlideNavigator;
use zoetrope::core::timer::Timers;
use zoetrope::tui::component::EventHandler;
use zoetrope::tui::components::{CarouselState, TickerState};
use zoetrope::tui::event::TuiEvent;

// ============================================================================
// Helper Functions
// ============================================================================

const DEBOUNCE: Duration = Duration::from_millis(500);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Advances simulated time past the debounce window, routing fired timers,
/// and returns the new "now".
fn settle(navigator: &mut SlideNavigator, timers: &mut Timers, now: Instant) -> Instant {
    let later = now + DEBOUNCE;
    for id in timers.poll(later) {
        navigator.on_timer(id, later, timers);
    }
    later
}

/// Walks simulated time in `step` increments for `steps` steps, routing every
/// fired timer and counting accepted moves.
fn walk(
    navigator: &mut SlideNavigator,
    timers: &mut Timers,
    start: Instant,
    step: Duration,
    steps: usize,
) -> (Instant, usize) {
    let mut now = start;
    let mut moves = 0;
    for _ in 0..steps {
        now += step;
        for id in timers.poll(now) {
            if navigator.on_timer(id, now, timers).is_some() {
                moves += 1;
            }
        }
    }
    (now, moves)
}

// ============================================================================
// Navigator Scenarios
// ============================================================================

#[test]
fn four_slide_walkthrough_wraps_back_to_start() {
    let mut navigator = SlideNavigator::new(4, DEBOUNCE, 6);
    let mut timers = Timers::new();
    let mut now = Instant::now();

    for expected in [1, 2, 3, 0] {
        assert_eq!(navigator.next(now, &mut timers), Some(expected));
        now = settle(&mut navigator, &mut timers, now);
    }
    assert_eq!(navigator.current_index(), 0);
}

#[test]
fn rapid_calls_inside_debounce_window_collapse_to_first() {
    let mut navigator = SlideNavigator::new(5, DEBOUNCE, 6);
    let mut timers = Timers::new();
    let now = Instant::now();

    assert_eq!(navigator.goto(2, now, &mut timers), Some(2));
    assert_eq!(navigator.goto(4, now + ms(100), &mut timers), None);
    assert_eq!(navigator.next(now + ms(200), &mut timers), None);
    assert_eq!(navigator.previous(now + ms(300), &mut timers), None);
    assert_eq!(navigator.current_index(), 2);

    // After the window closes, navigation works again.
    let now = settle(&mut navigator, &mut timers, now);
    assert_eq!(navigator.next(now, &mut timers), Some(3));
}

#[test]
fn swipe_threshold_matches_gesture_units() {
    // Original gesture units: 50-unit threshold.
    let mut navigator = SlideNavigator::new(4, DEBOUNCE, 50);
    let mut timers = Timers::new();
    let mut now = Instant::now();

    for delta in [-50, -10, 0, 10, 50] {
        assert_eq!(navigator.on_swipe(delta, now, &mut timers), None);
    }
    assert_eq!(navigator.current_index(), 0);

    assert_eq!(navigator.on_swipe(60, now, &mut timers), Some(1));
    now = settle(&mut navigator, &mut timers, now);
    assert_eq!(navigator.on_swipe(-60, now, &mut timers), Some(0));
}

#[test]
fn auto_advance_double_start_runs_one_timer() {
    let mut navigator = SlideNavigator::new(10, DEBOUNCE, 6);
    let mut timers = Timers::new();
    let t0 = Instant::now();

    navigator.start_auto_advance(ms(1000), t0, &mut timers);
    navigator.start_auto_advance(ms(1000), t0, &mut timers);

    // 5 simulated seconds at 1s per tick: exactly 5 moves. A leaked second
    // timer would produce more.
    let (_, moves) = walk(&mut navigator, &mut timers, t0, ms(250), 20);
    assert_eq!(moves, 5);
    assert_eq!(navigator.current_index(), 5);
}

#[test]
fn teardown_releases_every_handle() {
    let mut navigator = SlideNavigator::new(4, DEBOUNCE, 6);
    let mut timers = Timers::new();
    let t0 = Instant::now();

    navigator.next(t0, &mut timers);
    navigator.start_auto_advance(ms(1000), t0, &mut timers);
    navigator.pause_then_resume(ms(5000), t0, &mut timers);

    navigator.teardown(&mut timers);
    assert_eq!(timers.pending(), 0);
    assert!(timers.poll(t0 + ms(60000)).is_empty());
}

// ============================================================================
// Widget Independence
// ============================================================================

#[test]
fn gallery_and_ticker_are_independent() {
    let mut timers = Timers::new();
    let t0 = Instant::now();
    let mut gallery = CarouselState::new(4, DEBOUNCE, 6);
    let mut ticker = TickerState::new(3, DEBOUNCE, 6, ms(1000), ms(10000));
    ticker.start(t0, &mut timers);

    // Navigating the gallery does not disturb the ticker's rotation.
    gallery.handle_event(&TuiEvent::NextSlide, t0, &mut timers);
    assert!(ticker.navigator.auto_advance_active());
    assert_eq!(ticker.navigator.current_index(), 0);

    // The ticker's tick moves only the ticker.
    let now = t0 + ms(1000);
    for id in timers.poll(now) {
        gallery.navigator.on_timer(id, now, &mut timers);
        ticker.navigator.on_timer(id, now, &mut timers);
    }
    assert_eq!(gallery.navigator.current_index(), 1);
    assert_eq!(ticker.navigator.current_index(), 1);

    // Pausing the ticker leaves the gallery free to navigate.
    ticker.handle_event(&TuiEvent::NextSlide, now, &mut timers);
    assert!(!ticker.navigator.auto_advance_active());
    let later = now + DEBOUNCE;
    for id in timers.poll(later) {
        gallery.navigator.on_timer(id, later, &mut timers);
        ticker.navigator.on_timer(id, later, &mut timers);
    }
    assert_eq!(gallery.navigator.next(later, &mut timers), Some(2));
}

#[test]
fn widget_teardown_leaves_shared_facility_clean() {
    let mut timers = Timers::new();
    let t0 = Instant::now();
    let mut gallery = CarouselState::new(4, DEBOUNCE, 6);
    let mut ticker = TickerState::new(3, DEBOUNCE, 6, ms(1000), ms(10000));

    ticker.start(t0, &mut timers);
    gallery.handle_event(&TuiEvent::NextSlide, t0, &mut timers);
    ticker.handle_event(&TuiEvent::NextSlide, t0, &mut timers);
    assert!(timers.pending() > 0);

    gallery.teardown(&mut timers);
    ticker.teardown(&mut timers);
    assert_eq!(timers.pending(), 0);
}
