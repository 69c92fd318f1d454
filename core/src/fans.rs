//! Fan growth — the audience side of the streaming formula.
//!
//! Structurally symmetric to income: a per-second rate linear in the
//! song count, integrated over the tick delta. Legacy cross-promotion is
//! an independent additive stream, untouched by tier or experience
//! multipliers.

use crate::boosts;
use crate::data;
use crate::error::SimResult;
use crate::event::GameEvent;
use crate::state::{BoostKind, GameState};
use crate::subsystem::{Subsystem, TickContext};
use crate::types::Millis;

/// Fans gained per second by the active artist. Zero without songs.
pub fn fan_rate(state: &GameState, now_ms: Millis) -> f64 {
    if state.current_artist.total_songs == 0 {
        return 0.0;
    }
    state.current_artist.total_songs as f64
        * data::BASE_FAN_RATE
        * data::tier_spec(state.current_tech_tier).fan_multiplier
        * state.experience_multiplier
        * boosts::multiplier_product(state, now_ms, BoostKind::Fans)
}

/// Fans per second drifting over from legacy artists' audiences.
pub fn cross_promotion_rate(state: &GameState) -> f64 {
    state
        .legacy_artists
        .iter()
        .map(|legacy| legacy.fans * data::CROSS_PROMOTION_RATE)
        .sum()
}

pub struct FanSubsystem;

impl Subsystem for FanSubsystem {
    fn name(&self) -> &'static str {
        "fans"
    }

    fn update(&mut self, state: &mut GameState, ctx: &TickContext) -> SimResult<Vec<GameEvent>> {
        let rate = fan_rate(state, ctx.now_ms) + cross_promotion_rate(state);
        let artist = &mut state.current_artist;
        artist.fans += rate * ctx.delta_secs;
        artist.peak_fans = artist.peak_fans.max(artist.fans);
        Ok(Vec::new())
    }
}
