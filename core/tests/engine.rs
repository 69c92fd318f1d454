//! Engine tests — lifecycle, tick integration, persistence cadence.

use encore_core::command::GameCommand;
use encore_core::engine::GameEngine;
use encore_core::state::{GameState, LegacyArtist};
use encore_core::store::SaveStore;

const T0: f64 = 1_000_000.0;

fn engine_with(state: GameState) -> GameEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    let store = SaveStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    GameEngine::new("test-run".to_string(), state, store, 1)
}

/// A state whose per-second rates are all constant: no active-artist
/// songs (so fan growth and streaming stay frozen), but legacy income,
/// cross-promotion, platform dividends, and queue progress all flowing.
fn constant_rate_state() -> GameState {
    let mut state = GameState::new("Test Act");
    state.current_artist.fans = 50.0;
    state.songs_in_queue = 1; // 30s per song at tier 1 — no completion below 30s
    state.owned_platforms.insert("blog_network".to_string());
    for i in 0..2 {
        state.legacy_artists.push(LegacyArtist {
            name: format!("Old Act {i}"),
            total_songs: 5,
            fans: 1_000.0,
            income_multiplier: 0.8,
            created_at_ms: T0,
        });
    }
    state
}

/// Advancing once by dt₁+dt₂ equals advancing by dt₁ then dt₂ — the
/// integration is linear away from song-completion boundaries.
#[test]
fn tick_integration_is_linear() {
    let mut one_step = engine_with(constant_rate_state());
    let mut two_steps = engine_with(constant_rate_state());

    one_step.start_at(T0);
    one_step.tick_at(T0 + 5_000.0).expect("tick");

    two_steps.start_at(T0);
    two_steps.tick_at(T0 + 2_000.0).expect("tick");
    two_steps.tick_at(T0 + 5_000.0).expect("tick");

    let a = one_step.state();
    let b = two_steps.state();
    assert!((a.money - b.money).abs() < 1e-9, "{} vs {}", a.money, b.money);
    assert!((a.current_artist.fans - b.current_artist.fans).abs() < 1e-9);
    assert!((a.current_song_progress - b.current_song_progress).abs() < 1e-12);
    assert!((a.total_time_played - b.total_time_played).abs() < 1e-12);
}

/// start() while running is a no-op; the original tick origin holds.
#[test]
fn start_is_idempotent() {
    let mut engine = engine_with(GameState::new("Test Act"));
    engine.start_at(T0);
    engine.start_at(T0 + 500_000.0); // ignored

    assert!(engine.is_running());
    engine.tick_at(T0 + 1_000.0).expect("tick");
    assert!((engine.state().total_time_played - 1.0).abs() < 1e-12);
}

/// stop() flushes a final snapshot and is safe to call repeatedly.
#[test]
fn stop_flushes_once_and_is_idempotent() {
    let mut engine = engine_with(GameState::new("Test Act"));
    engine.start_at(T0);
    engine.tick_at(T0 + 1_000.0).expect("tick");

    engine.stop();
    assert!(!engine.is_running());
    assert_eq!(engine.store().snapshot_count("test-run").unwrap(), 1);

    engine.stop(); // no-op
    engine.stop(); // no-op
    assert_eq!(engine.store().snapshot_count("test-run").unwrap(), 1);
}

/// Ticks on a stopped engine do nothing.
#[test]
fn ticks_require_a_running_engine() {
    let mut engine = engine_with(constant_rate_state());
    let before = engine.state().clone();

    let events = engine.tick_at(T0 + 10_000.0).expect("tick");

    assert!(events.is_empty());
    assert_eq!(engine.state(), &before);
}

/// Auto-save fires once the accumulated play time crosses the interval.
#[test]
fn auto_save_follows_the_interval() {
    let mut engine = engine_with(GameState::new("Test Act"));
    engine.start_at(T0);

    engine.tick_at(T0 + 10_000.0).expect("tick");
    assert_eq!(engine.store().snapshot_count("test-run").unwrap(), 0);

    engine.tick_at(T0 + 31_000.0).expect("tick");
    assert_eq!(engine.store().snapshot_count("test-run").unwrap(), 1);

    // The timer reset: another short tick does not save again.
    engine.tick_at(T0 + 32_000.0).expect("tick");
    assert_eq!(engine.store().snapshot_count("test-run").unwrap(), 1);
}

/// A regressing host clock clamps delta time to zero — progress never
/// reverses.
#[test]
fn clock_regression_clamps_to_zero() {
    let mut engine = engine_with(constant_rate_state());
    engine.start_at(T0);
    let before = engine.state().clone();

    engine.tick_at(T0 - 60_000.0).expect("tick");

    let after = engine.state();
    assert_eq!(after.money, before.money);
    assert_eq!(after.current_artist.fans, before.current_artist.fans);
    assert_eq!(after.total_time_played, 0.0);
}

/// Lifetime songs never decrease across ticks or prestige.
#[test]
fn lifetime_songs_are_monotonic() {
    let mut state = GameState::new("Test Act");
    state.unlocked.prestige = true;
    state.money = 100.0;
    let mut engine = engine_with(state);
    engine.start_at(T0);

    assert!(engine.execute_at(GameCommand::QueueSongs { count: 3 }, T0));

    let mut last_total = 0;
    let mut now = T0;
    for _ in 0..10 {
        now += 20_000.0;
        engine.tick_at(now).expect("tick");
        let total = engine.state().total_completed_songs;
        assert!(total >= last_total, "lifetime songs regressed");
        last_total = total;
    }
    assert_eq!(last_total, 3, "queued songs all completed");

    assert!(engine.execute_at(GameCommand::Prestige, now));
    assert_eq!(engine.state().total_completed_songs, last_total);
    assert_eq!(engine.state().current_artist.total_songs, 0);
}

/// Commands route through the engine and respect preconditions.
#[test]
fn commands_dispatch_and_reject() {
    let mut state = GameState::new("Test Act");
    state.money = 50.0;
    let mut engine = engine_with(state);
    engine.start_at(T0);

    assert!(engine.execute_at(GameCommand::QueueSongs { count: 1 }, T0));
    assert!(!engine.execute_at(GameCommand::BuyGpu, T0), "GPU feature locked");
    assert!(!engine.execute_at(GameCommand::Prestige, T0), "prestige locked");
    assert!(!engine.execute_at(
        GameCommand::StartTour {
            tier: "club".to_string()
        },
        T0
    ));
    assert!(engine.execute_at(
        GameCommand::PurchaseUpgrade {
            id: "t1_1".to_string()
        },
        T0
    ));
}

/// A full pipeline tick leaves a valid state behind.
#[test]
fn ticked_state_stays_valid() {
    let mut engine = engine_with(constant_rate_state());
    engine.start_at(T0);
    let mut now = T0;
    for _ in 0..100 {
        now += 100.0;
        engine.tick_at(now).expect("tick");
    }

    encore_core::validate::validate_state(engine.state()).expect("state stays valid");
}
