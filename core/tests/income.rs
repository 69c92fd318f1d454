//! Income tests — the streaming formula and every multiplier source.

use encore_core::income::{self, IncomeSubsystem};
use encore_core::state::{ActiveBoost, BoostKind, GameState, LegacyArtist, Tour};
use encore_core::subsystem::{Subsystem, TickContext};

const T0: f64 = 1_000_000.0;

fn earning_state() -> GameState {
    let mut state = GameState::new("Test Act");
    state.current_artist.total_songs = 10;
    state.current_artist.fans = 100.0;
    state
}

/// 10 songs × 100 fans × 0.001 at neutral multipliers is exactly $1/s.
#[test]
fn streaming_rate_matches_the_formula_exactly() {
    let state = earning_state();
    assert_eq!(income::streaming_rate(&state), 1.0);
}

/// The streaming rate is strictly linear in songs and in fans.
#[test]
fn streaming_rate_is_linear() {
    let mut state = earning_state();
    let base = income::streaming_rate(&state);

    state.current_artist.total_songs = 20;
    assert_eq!(income::streaming_rate(&state), base * 2.0);

    state.current_artist.fans = 300.0;
    assert_eq!(income::streaming_rate(&state), base * 6.0);
}

/// Experience and tier multipliers scale the streaming rate.
#[test]
fn tier_and_experience_multiply_in() {
    let mut state = earning_state();
    state.current_tech_tier = 2; // income ×1.5
    state.experience_multiplier = 1.2;

    assert!((income::streaming_rate(&state) - 1.0 * 1.5 * 1.2).abs() < 1e-12);
}

/// An active, unexpired tour multiplies income; an expired one reverts
/// to ×1 even before the tour subsystem sweeps it.
#[test]
fn tour_multiplier_respects_expiry() {
    let mut state = earning_state();
    state.active_tour = Some(Tour {
        tier: "club".to_string(),
        started_at_ms: T0,
        ends_at_ms: T0 + 120_000.0,
        revenue_multiplier: 1.5,
        duration_secs: 120.0,
    });

    assert_eq!(income::income_rate(&state, T0 + 1_000.0), 1.5);
    assert_eq!(income::income_rate(&state, T0 + 120_000.0), 1.0);
}

/// Income boosts compose multiplicatively, including duplicates of the
/// same ability.
#[test]
fn income_boosts_stack_multiplicatively() {
    let mut state = earning_state();
    for multiplier in [2.0, 2.0, 3.0] {
        state.active_boosts.push(ActiveBoost {
            ability_id: "payola".to_string(),
            multiplier,
            expires_at_ms: T0 + 60_000.0,
            kind: BoostKind::Income,
        });
    }

    assert_eq!(income::income_rate(&state, T0), 12.0);
}

/// A boost past its expiry timestamp contributes nothing, in the same
/// tick or any later one.
#[test]
fn expired_boost_never_contributes() {
    let mut state = earning_state();
    state.active_boosts.push(ActiveBoost {
        ability_id: "payola".to_string(),
        multiplier: 2.0,
        expires_at_ms: T0 - 1.0,
        kind: BoostKind::Income,
    });

    assert_eq!(income::income_rate(&state, T0), 1.0);
}

/// Fan-kind boosts have no effect on income.
#[test]
fn fan_boosts_do_not_leak_into_income() {
    let mut state = earning_state();
    state.active_boosts.push(ActiveBoost {
        ability_id: "bot_streams".to_string(),
        multiplier: 3.0,
        expires_at_ms: T0 + 60_000.0,
        kind: BoostKind::Fans,
    });

    assert_eq!(income::income_rate(&state, T0), 1.0);
}

/// Legacy catalogs earn independently at their reduced multiplier,
/// unscaled by the active artist's bonuses.
#[test]
fn legacy_income_is_independent() {
    let mut state = earning_state();
    state.experience_multiplier = 2.0; // must not affect the legacy term
    state.legacy_artists.push(LegacyArtist {
        name: "Old Act".to_string(),
        total_songs: 10,
        fans: 100.0,
        income_multiplier: 0.8,
        created_at_ms: T0,
    });

    assert!((income::legacy_income_rate(&state) - 0.8).abs() < 1e-12);
}

/// Owned platforms contribute a flat dividend and multiply streaming.
#[test]
fn platforms_add_passive_and_multiplier() {
    let mut state = earning_state();
    state.owned_platforms.insert("blog_network".to_string());

    assert!((income::streaming_rate(&state) - 1.2).abs() < 1e-12);

    let mut sub = IncomeSubsystem;
    sub.update(
        &mut state,
        &TickContext {
            delta_secs: 2.0,
            now_ms: T0,
        },
    )
    .expect("income update");

    // 2s × (1.2 streaming + 50 passive)
    let expected = GameState::new("Test Act").money + 2.0 * (1.2 + 50.0);
    assert!((state.money - expected).abs() < 1e-9);
}

/// Integration over delta time: money grows by rate × dt.
#[test]
fn income_integrates_over_delta_time() {
    let mut state = earning_state();
    let start_money = state.money;

    let mut sub = IncomeSubsystem;
    sub.update(
        &mut state,
        &TickContext {
            delta_secs: 7.5,
            now_ms: T0,
        },
    )
    .expect("income update");

    assert!((state.money - (start_money + 7.5)).abs() < 1e-9);
}
