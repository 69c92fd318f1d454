//! Prestige tests — the partial reset and its scope line.

use encore_core::prestige;
use encore_core::state::{
    ActiveBoost, BoostKind, GameState, LegacyArtist, PhysicalAlbum, Tour,
};

const T0: f64 = 1_000_000.0;

/// A mid-run state with something in every short-lived system.
fn mid_run_state() -> GameState {
    let mut state = GameState::new("First Act");
    state.unlocked.prestige = true;
    state.unlocked.albums = true;
    state.unlocked.tours = true;
    state.unlocked.boosts = true;
    state.unlocked.platforms = true;
    state.money = 123_456.0;
    state.current_artist.total_songs = 40;
    state.current_artist.fans = 9_000.0;
    state.current_artist.peak_fans = 9_500.0;
    state.total_completed_songs = 40;
    state.songs_in_queue = 7;
    state.current_song_progress = 0.4;
    state.gpus = 4;
    state.industry_control = 25.0;
    state.current_tech_tier = 4;
    state.purchased_upgrades.insert("t1_1".to_string());
    state.owned_platforms.insert("blog_network".to_string());
    state.active_boosts.push(ActiveBoost {
        ability_id: "payola".to_string(),
        multiplier: 2.0,
        expires_at_ms: T0 + 60_000.0,
        kind: BoostKind::Income,
    });
    state.boost_activations.insert("payola".to_string(), 1);
    state.active_album = Some(PhysicalAlbum {
        copies_pressed: 100,
        copies_remaining: 60.0,
        price_per_copy: 10.0,
        revenue_generated: 400.0,
        pressed_at_ms: T0,
    });
    state.active_tour = Some(Tour {
        tier: "club".to_string(),
        started_at_ms: T0,
        ends_at_ms: T0 + 120_000.0,
        revenue_multiplier: 1.5,
        duration_secs: 120.0,
    });
    state
}

/// Without the unlock flag, prestige is unavailable and mutates nothing.
#[test]
fn locked_prestige_is_rejected() {
    let mut state = mid_run_state();
    state.unlocked.prestige = false;
    let before = state.clone();

    assert!(!prestige::can_prestige(&state));
    assert!(!prestige::perform(&mut state, "Next Act", T0));

    assert_eq!(state, before);
}

/// The retiring artist freezes into a legacy snapshot with the fixed
/// reduced multiplier and the creation timestamp.
#[test]
fn retiring_artist_is_snapshotted() {
    let mut state = mid_run_state();

    assert!(prestige::perform(&mut state, "Next Act", T0));

    let legacy = state.legacy_artists.last().expect("legacy appended");
    assert_eq!(legacy.name, "First Act");
    assert_eq!(legacy.total_songs, 40);
    assert_eq!(legacy.fans, 9_000.0);
    assert_eq!(legacy.income_multiplier, 0.8);
    assert_eq!(legacy.created_at_ms, T0);
}

/// Run-scoped state resets; the new artist debuts zeroed.
#[test]
fn run_scoped_state_resets() {
    let mut state = mid_run_state();

    assert!(prestige::perform(&mut state, "Next Act", T0));

    assert_eq!(state.current_artist.name, "Next Act");
    assert_eq!(state.current_artist.total_songs, 0);
    assert_eq!(state.current_artist.fans, 0.0);
    assert_eq!(state.current_artist.peak_fans, 0.0);
    assert_eq!(state.money, 0.0);
    assert_eq!(state.songs_in_queue, 0);
    assert_eq!(state.current_song_progress, 0.0);
    assert!(state.active_boosts.is_empty());
    assert!(state.boost_activations.is_empty());
    assert!(state.active_album.is_none());
    assert!(state.active_tour.is_none());
    assert_eq!(state.last_tour_end_ms, None);
    assert_eq!(state.tour_cooldown_secs, 0.0);
}

/// Account-scoped state survives: tech, unlocks, platforms, control,
/// GPUs, and the lifetime song counter.
#[test]
fn account_scoped_state_survives() {
    let mut state = mid_run_state();

    assert!(prestige::perform(&mut state, "Next Act", T0));

    assert_eq!(state.industry_control, 25.0);
    assert_eq!(state.current_tech_tier, 4);
    assert!(state.purchased_upgrades.contains("t1_1"));
    assert!(state.owned_platforms.contains("blog_network"));
    assert!(state.unlocked.prestige);
    assert!(state.unlocked.albums);
    assert_eq!(state.gpus, 4);
    assert_eq!(
        state.total_completed_songs, 40,
        "lifetime songs never decrease on prestige"
    );
}

/// The experience multiplier recomputes from the prestige count.
#[test]
fn experience_multiplier_recomputes() {
    let mut state = mid_run_state();

    assert!(prestige::perform(&mut state, "Second Act", T0));
    assert!((state.experience_multiplier - 1.1).abs() < 1e-12);

    assert!(prestige::perform(&mut state, "Third Act", T0 + 1.0));
    assert!((state.experience_multiplier - 1.2).abs() < 1e-12);
    assert_eq!(state.prestige_count, 2);
}

/// With three legacy artists already, prestige evicts the oldest (FIFO)
/// and appends the new one — the list stays at three.
#[test]
fn legacy_roster_evicts_oldest_at_cap() {
    let mut state = mid_run_state();
    for (i, name) in ["A", "B", "C"].iter().enumerate() {
        state.legacy_artists.push(LegacyArtist {
            name: name.to_string(),
            total_songs: 1,
            fans: 1.0,
            income_multiplier: 0.8,
            created_at_ms: T0 - 1_000.0 + i as f64,
        });
    }

    assert!(prestige::perform(&mut state, "Next Act", T0));

    let names: Vec<&str> = state
        .legacy_artists
        .iter()
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(names, vec!["B", "C", "First Act"], "oldest out, newest in");
}
