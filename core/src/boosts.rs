//! Exploitation boosts — stacking temporary multipliers.
//!
//! No uniqueness constraint: the same ability may run several instances
//! at once, and their multipliers compose multiplicatively. Expiry is
//! pure filtering — an instance past its timestamp contributes nothing,
//! whether or not the sweep has removed it yet.

use crate::data;
use crate::error::SimResult;
use crate::event::GameEvent;
use crate::state::{ActiveBoost, BoostKind, GameState};
use crate::subsystem::{Subsystem, TickContext};
use crate::types::Millis;

/// Cost of the next activation of an ability, scaling with prior use.
pub fn activation_cost(state: &GameState, ability_id: &str) -> Option<f64> {
    let spec = data::boost_spec(ability_id)?;
    let uses = state.boost_activations.get(ability_id).copied().unwrap_or(0);
    Some(spec.base_cost * spec.cost_scale.powi(uses as i32))
}

/// Activate an ability. Requires the unlock and the scaled cost.
pub fn activate(state: &mut GameState, ability_id: &str, now_ms: Millis) -> bool {
    if !state.unlocked.boosts {
        return false;
    }
    let Some(spec) = data::boost_spec(ability_id) else {
        return false;
    };
    let Some(cost) = activation_cost(state, ability_id) else {
        return false;
    };
    if state.money < cost {
        return false;
    }

    state.money -= cost;
    state.active_boosts.push(ActiveBoost {
        ability_id: spec.id.to_string(),
        multiplier: spec.multiplier,
        expires_at_ms: now_ms + spec.duration_secs * 1000.0,
        kind: spec.kind,
    });
    *state
        .boost_activations
        .entry(spec.id.to_string())
        .or_insert(0) += 1;
    log::info!(
        "boost activated: {} ×{:.1} for {:.0}s (cost {cost:.2})",
        spec.name,
        spec.multiplier,
        spec.duration_secs
    );
    true
}

/// Product of all unexpired boosts of `kind` at `now_ms`.
pub fn multiplier_product(state: &GameState, now_ms: Millis, kind: BoostKind) -> f64 {
    state
        .active_boosts
        .iter()
        .filter(|boost| boost.kind == kind && now_ms < boost.expires_at_ms)
        .map(|boost| boost.multiplier)
        .product()
}

pub struct BoostSubsystem;

impl Subsystem for BoostSubsystem {
    fn name(&self) -> &'static str {
        "boosts"
    }

    fn update(&mut self, state: &mut GameState, ctx: &TickContext) -> SimResult<Vec<GameEvent>> {
        let mut events = Vec::new();
        state.active_boosts.retain(|boost| {
            if ctx.now_ms >= boost.expires_at_ms {
                events.push(GameEvent::BoostExpired {
                    ability_id: boost.ability_id.clone(),
                });
                false
            } else {
                true
            }
        });
        Ok(events)
    }
}
