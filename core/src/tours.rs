//! Tours — a timed revenue multiplier with a cooldown window.
//!
//! One tour at a time. Completion clears the tour and opens the cooldown
//! that gates the next one. Income reads the active multiplier directly;
//! nothing accumulates here.

use crate::data;
use crate::error::SimResult;
use crate::event::GameEvent;
use crate::state::{GameState, Tour};
use crate::subsystem::{Subsystem, TickContext};
use crate::types::Millis;

/// Whether the cooldown from the previous tour has elapsed at `now_ms`.
pub fn off_cooldown(state: &GameState, now_ms: Millis) -> bool {
    match state.last_tour_end_ms {
        Some(last_end) => now_ms >= last_end + state.tour_cooldown_secs * 1000.0,
        None => true,
    }
}

/// Book a tour of the given tier. Requires the unlock, no active tour,
/// an elapsed cooldown, and the booking cost.
pub fn start(state: &mut GameState, tier_id: &str, now_ms: Millis) -> bool {
    if !state.unlocked.tours || state.active_tour.is_some() || !off_cooldown(state, now_ms) {
        return false;
    }
    let Some(spec) = data::tour_tier_spec(tier_id) else {
        return false;
    };
    if state.money < spec.cost {
        return false;
    }

    state.money -= spec.cost;
    state.active_tour = Some(Tour {
        tier: spec.id.to_string(),
        started_at_ms: now_ms,
        ends_at_ms: now_ms + spec.duration_secs * 1000.0,
        revenue_multiplier: spec.revenue_multiplier,
        duration_secs: spec.duration_secs,
    });
    log::info!("tour started: {} ({:.0}s)", spec.name, spec.duration_secs);
    true
}

/// The income multiplier contributed by an active, unexpired tour.
pub fn revenue_multiplier(state: &GameState, now_ms: Millis) -> f64 {
    state
        .active_tour
        .as_ref()
        .filter(|tour| now_ms < tour.ends_at_ms)
        .map_or(1.0, |tour| tour.revenue_multiplier)
}

pub struct TourSubsystem;

impl Subsystem for TourSubsystem {
    fn name(&self) -> &'static str {
        "tours"
    }

    fn update(&mut self, state: &mut GameState, ctx: &TickContext) -> SimResult<Vec<GameEvent>> {
        let mut events = Vec::new();

        let expired = state
            .active_tour
            .as_ref()
            .is_some_and(|tour| ctx.now_ms >= tour.ends_at_ms);
        if !expired {
            return Ok(events);
        }

        if let Some(tour) = state.active_tour.take() {
            let cooldown = data::tour_tier_spec(&tour.tier).map_or(0.0, |spec| spec.cooldown_secs);
            state.last_tour_end_ms = Some(ctx.now_ms);
            state.tour_cooldown_secs = cooldown;
            state.completed_tours += 1;
            log::info!(
                "tour completed: {} (total {}), cooldown {:.0}s",
                tour.tier,
                state.completed_tours,
                cooldown
            );
            events.push(GameEvent::TourCompleted {
                tier: tour.tier,
                completed_tours: state.completed_tours,
            });
        }

        Ok(events)
    }
}
