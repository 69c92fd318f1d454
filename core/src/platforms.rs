//! Platform ownership — buying up the industry.
//!
//! Each acquisition is permanent: it adds a fixed contribution to
//! industry control and a multiplicative income bonus, plus a flat
//! passive dividend. Control only ever rises.

use crate::data;
use crate::state::GameState;

/// Acquire a platform. Requires the unlock, not already owned, and the
/// asking price. Victory is detected on the uncapped control sum; the
/// stored value clamps to 100 to hold the state invariant.
pub fn purchase(state: &mut GameState, platform_id: &str) -> bool {
    if !state.unlocked.platforms {
        return false;
    }
    if state.owned_platforms.contains(platform_id) {
        return false;
    }
    let Some(spec) = data::platform_spec(platform_id) else {
        return false;
    };
    if state.money < spec.cost {
        return false;
    }

    state.money -= spec.cost;
    state.owned_platforms.insert(spec.id.to_string());
    let uncapped = state.industry_control + spec.control_contribution;
    state.industry_control = uncapped.min(data::WIN_CONTROL);
    log::info!(
        "acquired {}: industry control {:.0}/100",
        spec.name,
        state.industry_control
    );
    true
}

/// Product of owned platforms' income multipliers.
pub fn income_multiplier(state: &GameState) -> f64 {
    data::PLATFORMS
        .iter()
        .filter(|spec| state.owned_platforms.contains(spec.id))
        .map(|spec| spec.income_multiplier)
        .product()
}

/// Flat $/second across owned platforms.
pub fn passive_income_rate(state: &GameState) -> f64 {
    data::PLATFORMS
        .iter()
        .filter(|spec| state.owned_platforms.contains(spec.id))
        .map(|spec| spec.passive_income_per_sec)
        .sum()
}
