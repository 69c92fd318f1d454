//! Tech upgrade progression — 7 tiers × 3 strictly-gated sub-tiers.
//!
//! Sub-tiers within a tier purchase in order; tiers themselves are
//! independent (tier N's first sub-tier never waits on tier N−1).
//! `current_tech_tier` only ever rises. Live income/fan/speed multipliers
//! come from the current tier's table entry alone — purchases gate tier
//! advancement and unlock effects, they do not stack multipliers.

use crate::data::{self, TierSpec, UpgradeEffect};
use crate::state::GameState;

/// The live tier effects for this state.
pub fn current_tier_spec(state: &GameState) -> &'static TierSpec {
    data::tier_spec(state.current_tech_tier)
}

/// Purchase an upgrade by id. Preconditions, checked before any write:
/// the upgrade exists, is not already owned, its predecessor sub-tier
/// (if any) is owned, and the cost is covered.
pub fn purchase(state: &mut GameState, id: &str) -> bool {
    let Some(spec) = data::upgrade_spec(id) else {
        return false;
    };
    if state.purchased_upgrades.contains(spec.id) {
        return false;
    }
    if spec.sub_tier > 1 {
        let predecessor = format!("t{}_{}", spec.tier, spec.sub_tier - 1);
        if !state.purchased_upgrades.contains(&predecessor) {
            return false;
        }
    }
    if state.money < spec.cost {
        return false;
    }

    state.money -= spec.cost;
    state.purchased_upgrades.insert(spec.id.to_string());

    for effect in spec.effects {
        apply_effect(state, *effect);
    }

    if spec.tier > state.current_tech_tier {
        state.current_tech_tier = spec.tier;
        log::info!(
            "reached tier {}: {}",
            spec.tier,
            data::tier_spec(spec.tier).name
        );
    }

    log::debug!("purchased upgrade {} ({})", spec.id, spec.name);
    true
}

fn apply_effect(state: &mut GameState, effect: UpgradeEffect) {
    let unlocked = &mut state.unlocked;
    match effect {
        UpgradeEffect::UnlockGpus => {
            if !unlocked.gpus {
                unlocked.gpus = true;
                log::info!("unlocked: GPU automation");
            }
        }
        UpgradeEffect::UnlockPrestige => {
            if !unlocked.prestige {
                unlocked.prestige = true;
                log::info!("unlocked: prestige");
            }
        }
        UpgradeEffect::UnlockBoosts => {
            if !unlocked.boosts {
                unlocked.boosts = true;
                log::info!("unlocked: boosts");
            }
        }
    }
}

/// Display-only aggregate of every purchased upgrade's own multiplier
/// fields, as `(income, fans)`. This intentionally disagrees with the
/// live rates, which read only the current tier's table entry — keep it
/// off the rate path.
pub fn purchased_multiplier_breakdown(state: &GameState) -> (f64, f64) {
    data::TECH_UPGRADES
        .iter()
        .filter(|u| state.purchased_upgrades.contains(u.id))
        .fold((1.0, 1.0), |(income, fans), u| {
            (income * u.income_multiplier, fans * u.fan_multiplier)
        })
}
