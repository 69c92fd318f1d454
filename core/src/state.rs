//! The game state — the single mutable root of the simulation.
//!
//! RULES:
//!   - Exactly one `GameState` exists per run, owned by the engine.
//!   - Subsystems receive `&mut GameState` from the engine; nothing is
//!     ambient or global.
//!   - Run-scoped state is reset by prestige; account-scoped state
//!     (tech, unlocks, platforms, industry control) survives it.
//!   - Every field serializes into the save snapshot; none carry serde
//!     defaults, so a snapshot missing a field is rejected on load.

use crate::types::Millis;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Root aggregate. See `validate::validate_state` for the acceptance
/// contract applied to deserialized candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    // ── Core counters ──────────────────────────────────────────
    pub money: f64,
    /// Lifetime songs completed across all artists. Never reset.
    pub total_completed_songs: u64,
    /// Win-condition meter, always within [0, 100].
    pub industry_control: f64,
    /// Permanent prestige bonus: `1 + prestige_count × 0.1`.
    pub experience_multiplier: f64,
    pub prestige_count: u32,
    /// Accumulated in-run seconds across the whole account.
    pub total_time_played: f64,
    pub current_tech_tier: u8,
    /// Latched once `industry_control` reaches 100.
    pub won: bool,

    // ── Artists ────────────────────────────────────────────────
    pub current_artist: Artist,
    /// Retired artists, oldest first. Capped at three; FIFO eviction.
    pub legacy_artists: Vec<LegacyArtist>,

    // ── Song production ────────────────────────────────────────
    pub songs_in_queue: u32,
    /// Progress through the current song, normalized to 1.0 per song.
    pub current_song_progress: f64,
    /// Owned render rigs; each keeps one queue slot topped up per tick.
    pub gpus: u32,

    // ── Progression ────────────────────────────────────────────
    pub purchased_upgrades: BTreeSet<String>,
    pub active_boosts: Vec<ActiveBoost>,
    /// Per-ability activation counts driving boost cost scaling.
    pub boost_activations: BTreeMap<String, u32>,
    pub active_album: Option<PhysicalAlbum>,
    pub active_tour: Option<Tour>,
    pub last_tour_end_ms: Option<Millis>,
    pub tour_cooldown_secs: f64,
    pub completed_tours: u32,
    pub owned_platforms: BTreeSet<String>,
    pub unlocked: UnlockedSystems,
}

/// The currently active artist. Replaced wholesale on prestige.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    /// Run-scoped song count — the `songs` term in the income and fan
    /// rate formulas. Resets with the artist on prestige.
    pub total_songs: u64,
    pub fans: f64,
    /// Monotonic high-water mark of `fans`.
    pub peak_fans: f64,
}

impl Artist {
    pub fn debut(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total_songs: 0,
            fans: 0.0,
            peak_fans: 0.0,
        }
    }
}

/// Frozen snapshot of a retired artist. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyArtist {
    pub name: String,
    pub total_songs: u64,
    pub fans: f64,
    pub income_multiplier: f64,
    pub created_at_ms: Millis,
}

/// Which rate product a boost feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostKind {
    Income,
    Fans,
    Speed,
}

/// A running temporary multiplier. Expires by filtering, not destruction:
/// an instance past `expires_at_ms` contributes nothing even before the
/// boost subsystem sweeps it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveBoost {
    pub ability_id: String,
    pub multiplier: f64,
    pub expires_at_ms: Millis,
    pub kind: BoostKind,
}

/// An active pressing run of physical copies. At most one exists;
/// re-pressing discards unsold copies without refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalAlbum {
    pub copies_pressed: u32,
    /// Fractional: sales integrate over tick deltas. Monotonic decreasing.
    pub copies_remaining: f64,
    pub price_per_copy: f64,
    pub revenue_generated: f64,
    pub pressed_at_ms: Millis,
}

/// The single active tour, if any. Cleared on expiry, which opens the
/// cooldown window gating the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub tier: String,
    pub started_at_ms: Millis,
    pub ends_at_ms: Millis,
    pub revenue_multiplier: f64,
    pub duration_secs: f64,
}

/// Feature flags. Each flips false→true exactly once, by a tech upgrade
/// effect or a milestone check. Prestige never resets these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedSystems {
    pub gpus: bool,
    pub prestige: bool,
    pub albums: bool,
    pub tours: bool,
    pub boosts: bool,
    pub platforms: bool,
}

impl GameState {
    /// A fresh account with a debut artist and starting cash.
    pub fn new(artist_name: &str) -> Self {
        Self {
            money: crate::data::STARTING_MONEY,
            total_completed_songs: 0,
            industry_control: 0.0,
            experience_multiplier: 1.0,
            prestige_count: 0,
            total_time_played: 0.0,
            current_tech_tier: 1,
            won: false,
            current_artist: Artist::debut(artist_name),
            legacy_artists: Vec::new(),
            songs_in_queue: 0,
            current_song_progress: 0.0,
            gpus: 0,
            purchased_upgrades: BTreeSet::new(),
            active_boosts: Vec::new(),
            boost_activations: BTreeMap::new(),
            active_album: None,
            active_tour: None,
            last_tour_end_ms: None,
            tour_cooldown_secs: 0.0,
            completed_tours: 0,
            owned_platforms: BTreeSet::new(),
            unlocked: UnlockedSystems::default(),
        }
    }
}
