//! Income generation — streaming, legacy catalogs, platform dividends.
//!
//! The streaming rate is strictly linear in songs and fans; every bonus
//! is a multiplier on that product. Legacy and platform income are
//! independent linear contributions, summed into the same tick delta but
//! never scaled by the active artist's multipliers.

use crate::boosts;
use crate::data;
use crate::error::SimResult;
use crate::event::GameEvent;
use crate::platforms;
use crate::state::{BoostKind, GameState};
use crate::subsystem::{Subsystem, TickContext};
use crate::tours;
use crate::types::Millis;

/// Streaming rate before tour and boost multipliers:
/// songs × fans × base × platform × tier × experience.
pub fn streaming_rate(state: &GameState) -> f64 {
    state.current_artist.total_songs as f64
        * state.current_artist.fans
        * data::BASE_STREAM_RATE
        * platforms::income_multiplier(state)
        * data::tier_spec(state.current_tech_tier).income_multiplier
        * state.experience_multiplier
}

/// Instantaneous $/second from the active artist.
pub fn income_rate(state: &GameState, now_ms: Millis) -> f64 {
    streaming_rate(state)
        * tours::revenue_multiplier(state, now_ms)
        * boosts::multiplier_product(state, now_ms, BoostKind::Income)
}

/// Passive $/second from retired artists' catalogs.
pub fn legacy_income_rate(state: &GameState) -> f64 {
    state
        .legacy_artists
        .iter()
        .map(|legacy| {
            legacy.total_songs as f64
                * legacy.fans
                * data::BASE_STREAM_RATE
                * legacy.income_multiplier
        })
        .sum()
}

pub struct IncomeSubsystem;

impl Subsystem for IncomeSubsystem {
    fn name(&self) -> &'static str {
        "income"
    }

    fn update(&mut self, state: &mut GameState, ctx: &TickContext) -> SimResult<Vec<GameEvent>> {
        let rate = income_rate(state, ctx.now_ms)
            + legacy_income_rate(state)
            + platforms::passive_income_rate(state);
        state.money += rate * ctx.delta_secs;
        Ok(Vec::new())
    }
}
