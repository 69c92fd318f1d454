//! Tour tests — booking preconditions, expiry, cooldown.

use encore_core::event::GameEvent;
use encore_core::state::GameState;
use encore_core::subsystem::{Subsystem, TickContext};
use encore_core::tours::{self, TourSubsystem};

const T0: f64 = 1_000_000.0;

fn unlocked_state() -> GameState {
    let mut state = GameState::new("Test Act");
    state.unlocked.tours = true;
    state.money = 1_000_000.0;
    state
}

fn advance(state: &mut GameState, now_ms: f64) -> Vec<GameEvent> {
    TourSubsystem
        .update(
            state,
            &TickContext {
                delta_secs: 0.1,
                now_ms,
            },
        )
        .expect("tour update")
}

/// Booking requires the unlock.
#[test]
fn locked_booking_is_rejected() {
    let mut state = unlocked_state();
    state.unlocked.tours = false;
    let before = state.clone();

    assert!(!tours::start(&mut state, "club", T0));

    assert_eq!(state, before);
}

/// A successful booking deducts the cost and schedules the end time.
#[test]
fn booking_installs_the_tour() {
    let mut state = unlocked_state();

    assert!(tours::start(&mut state, "club", T0));

    assert_eq!(state.money, 995_000.0);
    let tour = state.active_tour.as_ref().expect("tour installed");
    assert_eq!(tour.tier, "club");
    assert_eq!(tour.started_at_ms, T0);
    assert_eq!(tour.ends_at_ms, T0 + 120_000.0);
    assert_eq!(tour.revenue_multiplier, 1.5);
}

/// Only one tour at a time.
#[test]
fn concurrent_booking_is_rejected() {
    let mut state = unlocked_state();
    assert!(tours::start(&mut state, "club", T0));
    let before = state.clone();

    assert!(!tours::start(&mut state, "national", T0 + 1_000.0));

    assert_eq!(state, before);
}

/// Unknown tiers and unaffordable bookings are rejected.
#[test]
fn bad_bookings_are_rejected() {
    let mut state = unlocked_state();
    assert!(!tours::start(&mut state, "galactic", T0));

    state.money = 100.0;
    let before = state.clone();
    assert!(!tours::start(&mut state, "club", T0));
    assert_eq!(state, before);
}

/// The multiplier applies while the tour runs and reverts at its end
/// timestamp, even before the subsystem sweeps it.
#[test]
fn multiplier_window_matches_the_schedule() {
    let mut state = unlocked_state();
    assert!(tours::start(&mut state, "national", T0));

    assert_eq!(tours::revenue_multiplier(&state, T0 + 1.0), 2.5);
    assert_eq!(tours::revenue_multiplier(&state, T0 + 300_000.0), 1.0);
}

/// Expiry clears the tour, opens the cooldown window, and counts the
/// completion.
#[test]
fn expiry_opens_the_cooldown_window() {
    let mut state = unlocked_state();
    assert!(tours::start(&mut state, "club", T0));

    let events = advance(&mut state, T0 + 120_000.0);

    assert!(state.active_tour.is_none());
    assert_eq!(state.last_tour_end_ms, Some(T0 + 120_000.0));
    assert_eq!(state.tour_cooldown_secs, 180.0);
    assert_eq!(state.completed_tours, 1);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::TourCompleted { completed_tours: 1, .. })));
}

/// Rebooking is gated until the cooldown elapses.
#[test]
fn cooldown_gates_the_next_booking() {
    let mut state = unlocked_state();
    assert!(tours::start(&mut state, "club", T0));
    advance(&mut state, T0 + 120_000.0);

    // 60s into a 180s cooldown: rejected.
    assert!(!tours::start(&mut state, "club", T0 + 180_000.0));

    // Cooldown over: accepted.
    assert!(tours::start(&mut state, "club", T0 + 120_000.0 + 180_000.0));
}

/// An unexpired tour is untouched by the sweep.
#[test]
fn running_tour_is_untouched() {
    let mut state = unlocked_state();
    assert!(tours::start(&mut state, "world", T0));
    let before = state.clone();

    let events = advance(&mut state, T0 + 1_000.0);

    assert_eq!(state, before);
    assert!(events.is_empty());
}
