//! Prestige — retire the current artist for a permanent bonus.
//!
//! The partial reset splits the state along its scope line: the artist
//! and every short-lived system go; tech, unlocks, platforms, industry
//! control, and the GPU fleet stay. The retiring artist freezes into a
//! legacy snapshot that keeps earning at a reduced rate.

use crate::data;
use crate::state::{Artist, GameState, LegacyArtist};
use crate::types::Millis;

/// Prestige is available once its unlock flag is set.
pub fn can_prestige(state: &GameState) -> bool {
    state.unlocked.prestige
}

/// Retire the current artist and debut `new_name`.
pub fn perform(state: &mut GameState, new_name: &str, now_ms: Millis) -> bool {
    if !state.unlocked.prestige {
        return false;
    }

    let retiring = LegacyArtist {
        name: state.current_artist.name.clone(),
        total_songs: state.current_artist.total_songs,
        fans: state.current_artist.fans,
        income_multiplier: data::LEGACY_INCOME_MULTIPLIER,
        created_at_ms: now_ms,
    };
    state.legacy_artists.push(retiring);
    if state.legacy_artists.len() > data::MAX_LEGACY_ARTISTS {
        // Oldest out first.
        state.legacy_artists.remove(0);
    }

    state.prestige_count += 1;
    state.experience_multiplier = 1.0 + f64::from(state.prestige_count) * data::EXPERIENCE_STEP;

    let retired_name = state.current_artist.name.clone();
    state.current_artist = Artist::debut(new_name);

    // Run-scoped resets. Account-scoped state is deliberately untouched.
    state.money = 0.0;
    state.songs_in_queue = 0;
    state.current_song_progress = 0.0;
    state.active_boosts.clear();
    state.boost_activations.clear();
    state.active_album = None;
    state.active_tour = None;
    state.last_tour_end_ms = None;
    state.tour_cooldown_secs = 0.0;

    log::info!(
        "prestige #{}: {retired_name} retires, {new_name} debuts (xp ×{:.1})",
        state.prestige_count,
        state.experience_multiplier
    );
    true
}
