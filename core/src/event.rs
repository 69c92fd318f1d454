//! Observable output of the tick pipeline.
//!
//! Subsystems report notable transitions as events; the engine logs them
//! and keeps a bounded recent-events buffer for hosts to render. Events
//! carry plain data — no subsystem ever reads another's events to drive
//! simulation logic.

use serde::{Deserialize, Serialize};

/// Every event emitted during simulation.
/// Variants are added over time — never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    // ── Song production ────────────────────────────
    SongCompleted {
        artist_songs: u64,
        lifetime_songs: u64,
    },

    // ── Progression ────────────────────────────────
    TierReached {
        tier: u8,
    },
    SystemUnlocked {
        system: String,
    },
    PrestigeCompleted {
        retired_artist: String,
        new_artist: String,
        experience_multiplier: f64,
    },

    // ── Timed systems ──────────────────────────────
    AlbumSoldOut {
        copies_pressed: u32,
        revenue: f64,
    },
    TourCompleted {
        tier: String,
        completed_tours: u32,
    },
    BoostExpired {
        ability_id: String,
    },

    // ── Industry control ───────────────────────────
    PlatformAcquired {
        platform_id: String,
        industry_control: f64,
    },
    VictoryAchieved {
        industry_control: f64,
        time_played_secs: f64,
    },
}
