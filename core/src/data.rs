//! Static progression tables and tuning constants.
//!
//! RULE: Everything here is read-only design data. Subsystems look values
//! up per tick rather than caching them, so a tier change mid-song
//! immediately changes the rate applied to the remaining fraction.

use crate::state::BoostKind;

// ── Economy constants ──────────────────────────────────────────────

/// Cash a fresh account starts with — enough to queue the first songs.
pub const STARTING_MONEY: f64 = 10.0;

/// Streaming income in $ per song, per fan, per second.
pub const BASE_STREAM_RATE: f64 = 0.001;

/// Fan growth per completed song, per second.
pub const BASE_FAN_RATE: f64 = 0.02;

/// Fans per second contributed by each legacy-artist fan.
pub const CROSS_PROMOTION_RATE: f64 = 0.001;

/// Income retained by a retired artist's catalog.
pub const LEGACY_INCOME_MULTIPLIER: f64 = 0.8;

/// Retired artists kept before FIFO eviction.
pub const MAX_LEGACY_ARTISTS: usize = 3;

/// Experience gained per prestige: `1 + count × step`.
pub const EXPERIENCE_STEP: f64 = 0.1;

// ── GPU automation ─────────────────────────────────────────────────

pub const GPU_BASE_COST: f64 = 500.0;
pub const GPU_COST_SCALE: f64 = 1.15;

// ── Physical albums ────────────────────────────────────────────────

pub const PRESS_COST_PER_COPY: f64 = 2.0;
/// Demand decay exponent per second of batch age.
pub const ALBUM_DEMAND_DECAY: f64 = 0.001;
/// Copies per second at full demand, before the fan-count bonus.
pub const ALBUM_BASE_SELL_RATE: f64 = 5.0;

// ── Milestone thresholds ───────────────────────────────────────────

pub const ALBUM_UNLOCK_FANS: f64 = 500.0;
pub const TOUR_UNLOCK_FANS: f64 = 2_500.0;
pub const PLATFORM_UNLOCK_MONEY: f64 = 100_000.0;

/// Industry control needed to win the run.
pub const WIN_CONTROL: f64 = 100.0;

// ── Tech tiers ─────────────────────────────────────────────────────

/// Live per-tier effects. The income/fan/speed path reads exactly one of
/// these — the current tier's entry — never a per-upgrade accumulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSpec {
    pub tier: u8,
    pub name: &'static str,
    /// Seconds to finish one song at this tier.
    pub generation_time_secs: f64,
    /// Cost to queue one song. Free from tier 2 up.
    pub song_cost: f64,
    pub income_multiplier: f64,
    pub fan_multiplier: f64,
}

pub static TECH_TIERS: [TierSpec; 7] = [
    TierSpec { tier: 1, name: "Bedroom Demos",          generation_time_secs: 30.0, song_cost: 1.0, income_multiplier: 1.0,  fan_multiplier: 1.0 },
    TierSpec { tier: 2, name: "Home Studio",            generation_time_secs: 20.0, song_cost: 0.0, income_multiplier: 1.5,  fan_multiplier: 1.2 },
    TierSpec { tier: 3, name: "Pro Session Rig",        generation_time_secs: 14.0, song_cost: 0.0, income_multiplier: 2.2,  fan_multiplier: 1.5 },
    TierSpec { tier: 4, name: "Writing Camp Pipeline",  generation_time_secs: 9.0,  song_cost: 0.0, income_multiplier: 3.5,  fan_multiplier: 2.0 },
    TierSpec { tier: 5, name: "Cloud Render Farm",      generation_time_secs: 6.0,  song_cost: 0.0, income_multiplier: 5.5,  fan_multiplier: 2.8 },
    TierSpec { tier: 6, name: "Neural Composer",        generation_time_secs: 3.5,  song_cost: 0.0, income_multiplier: 9.0,  fan_multiplier: 4.0 },
    TierSpec { tier: 7, name: "Generative Hit Machine", generation_time_secs: 2.0,  song_cost: 0.0, income_multiplier: 15.0, fan_multiplier: 6.0 },
];

/// Look up a tier's live spec. Out-of-range tiers clamp into [1, 7];
/// validated states never carry one.
pub fn tier_spec(tier: u8) -> &'static TierSpec {
    let idx = (tier.clamp(1, 7) - 1) as usize;
    &TECH_TIERS[idx]
}

/// Side effects a tech upgrade applies on purchase, iterated uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeEffect {
    UnlockGpus,
    UnlockPrestige,
    UnlockBoosts,
}

/// One purchasable upgrade. Sub-tiers within a tier are strictly
/// sequential; tiers themselves are independent of each other.
///
/// `income_multiplier`/`fan_multiplier` here are display metadata for the
/// per-purchase breakdown — live rates come from [`TierSpec`] only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeSpec {
    pub id: &'static str,
    pub tier: u8,
    pub sub_tier: u8,
    pub name: &'static str,
    pub cost: f64,
    pub income_multiplier: f64,
    pub fan_multiplier: f64,
    pub effects: &'static [UpgradeEffect],
}

pub static TECH_UPGRADES: [UpgradeSpec; 21] = [
    // Tier 1 — Bedroom Demos
    UpgradeSpec { id: "t1_1", tier: 1, sub_tier: 1, name: "Secondhand Mic",        cost: 10.0,         income_multiplier: 1.05, fan_multiplier: 1.0,  effects: &[] },
    UpgradeSpec { id: "t1_2", tier: 1, sub_tier: 2, name: "Foam Panels",           cost: 25.0,         income_multiplier: 1.05, fan_multiplier: 1.05, effects: &[] },
    UpgradeSpec { id: "t1_3", tier: 1, sub_tier: 3, name: "Cracked DAW License",   cost: 60.0,         income_multiplier: 1.1,  fan_multiplier: 1.05, effects: &[] },
    // Tier 2 — Home Studio
    UpgradeSpec { id: "t2_1", tier: 2, sub_tier: 1, name: "Audio Interface",       cost: 100.0,        income_multiplier: 1.1,  fan_multiplier: 1.05, effects: &[] },
    UpgradeSpec { id: "t2_2", tier: 2, sub_tier: 2, name: "Render Rig",            cost: 250.0,        income_multiplier: 1.1,  fan_multiplier: 1.1,  effects: &[UpgradeEffect::UnlockGpus] },
    UpgradeSpec { id: "t2_3", tier: 2, sub_tier: 3, name: "Vocal Booth",           cost: 600.0,        income_multiplier: 1.15, fan_multiplier: 1.1,  effects: &[] },
    // Tier 3 — Pro Session Rig
    UpgradeSpec { id: "t3_1", tier: 3, sub_tier: 1, name: "Session Musicians",     cost: 1_000.0,      income_multiplier: 1.15, fan_multiplier: 1.1,  effects: &[UpgradeEffect::UnlockBoosts] },
    UpgradeSpec { id: "t3_2", tier: 3, sub_tier: 2, name: "Mixing Engineer",       cost: 2_500.0,      income_multiplier: 1.15, fan_multiplier: 1.15, effects: &[] },
    UpgradeSpec { id: "t3_3", tier: 3, sub_tier: 3, name: "A&R Connections",       cost: 6_000.0,      income_multiplier: 1.2,  fan_multiplier: 1.15, effects: &[UpgradeEffect::UnlockPrestige] },
    // Tier 4 — Writing Camp Pipeline
    UpgradeSpec { id: "t4_1", tier: 4, sub_tier: 1, name: "Topline Writers",       cost: 10_000.0,     income_multiplier: 1.2,  fan_multiplier: 1.15, effects: &[] },
    UpgradeSpec { id: "t4_2", tier: 4, sub_tier: 2, name: "Hook Laboratory",       cost: 25_000.0,     income_multiplier: 1.2,  fan_multiplier: 1.2,  effects: &[] },
    UpgradeSpec { id: "t4_3", tier: 4, sub_tier: 3, name: "Release Calendar",      cost: 60_000.0,     income_multiplier: 1.25, fan_multiplier: 1.2,  effects: &[] },
    // Tier 5 — Cloud Render Farm
    UpgradeSpec { id: "t5_1", tier: 5, sub_tier: 1, name: "Compute Cluster",       cost: 100_000.0,    income_multiplier: 1.25, fan_multiplier: 1.2,  effects: &[] },
    UpgradeSpec { id: "t5_2", tier: 5, sub_tier: 2, name: "Stem Library",          cost: 250_000.0,    income_multiplier: 1.25, fan_multiplier: 1.25, effects: &[] },
    UpgradeSpec { id: "t5_3", tier: 5, sub_tier: 3, name: "Mastering Pipeline",    cost: 600_000.0,    income_multiplier: 1.3,  fan_multiplier: 1.25, effects: &[] },
    // Tier 6 — Neural Composer
    UpgradeSpec { id: "t6_1", tier: 6, sub_tier: 1, name: "Model Training Run",    cost: 1_000_000.0,  income_multiplier: 1.3,  fan_multiplier: 1.25, effects: &[] },
    UpgradeSpec { id: "t6_2", tier: 6, sub_tier: 2, name: "Taste Dataset",         cost: 2_500_000.0,  income_multiplier: 1.3,  fan_multiplier: 1.3,  effects: &[] },
    UpgradeSpec { id: "t6_3", tier: 6, sub_tier: 3, name: "Style Transfer Suite",  cost: 6_000_000.0,  income_multiplier: 1.35, fan_multiplier: 1.3,  effects: &[] },
    // Tier 7 — Generative Hit Machine
    UpgradeSpec { id: "t7_1", tier: 7, sub_tier: 1, name: "Hit Predictor",         cost: 10_000_000.0, income_multiplier: 1.35, fan_multiplier: 1.3,  effects: &[] },
    UpgradeSpec { id: "t7_2", tier: 7, sub_tier: 2, name: "Infinite Catalog",      cost: 25_000_000.0, income_multiplier: 1.35, fan_multiplier: 1.35, effects: &[] },
    UpgradeSpec { id: "t7_3", tier: 7, sub_tier: 3, name: "Zeitgeist Engine",      cost: 60_000_000.0, income_multiplier: 1.4,  fan_multiplier: 1.35, effects: &[] },
];

pub fn upgrade_spec(id: &str) -> Option<&'static UpgradeSpec> {
    TECH_UPGRADES.iter().find(|u| u.id == id)
}

// ── Platforms ──────────────────────────────────────────────────────

/// A purchasable slice of the industry. Control contributions across the
/// full table sum to exactly 100 — owning everything wins the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: f64,
    pub income_multiplier: f64,
    pub control_contribution: f64,
    /// Flat $ per second once owned.
    pub passive_income_per_sec: f64,
}

pub static PLATFORMS: [PlatformSpec; 5] = [
    PlatformSpec { id: "blog_network",    name: "Indie Blog Network",     cost: 250_000.0,     income_multiplier: 1.2, control_contribution: 10.0, passive_income_per_sec: 50.0 },
    PlatformSpec { id: "playlist_desk",   name: "Playlist Curation Desk", cost: 1_000_000.0,   income_multiplier: 1.5, control_contribution: 15.0, passive_income_per_sec: 200.0 },
    PlatformSpec { id: "radio_group",     name: "Radio Conglomerate",     cost: 5_000_000.0,   income_multiplier: 2.0, control_contribution: 20.0, passive_income_per_sec: 1_000.0 },
    PlatformSpec { id: "streaming_co",    name: "Streaming Service",      cost: 25_000_000.0,  income_multiplier: 3.0, control_contribution: 25.0, passive_income_per_sec: 5_000.0 },
    PlatformSpec { id: "rights_group",    name: "Global Rights Group",    cost: 100_000_000.0, income_multiplier: 5.0, control_contribution: 30.0, passive_income_per_sec: 20_000.0 },
];

pub fn platform_spec(id: &str) -> Option<&'static PlatformSpec> {
    PLATFORMS.iter().find(|p| p.id == id)
}

// ── Tours ──────────────────────────────────────────────────────────

/// All tour timing is in seconds — cost, duration, and cooldown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourTierSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: f64,
    pub duration_secs: f64,
    pub revenue_multiplier: f64,
    pub cooldown_secs: f64,
}

pub static TOUR_TIERS: [TourTierSpec; 3] = [
    TourTierSpec { id: "club",     name: "Club Circuit",   cost: 5_000.0,   duration_secs: 120.0, revenue_multiplier: 1.5, cooldown_secs: 180.0 },
    TourTierSpec { id: "national", name: "National Tour",  cost: 50_000.0,  duration_secs: 300.0, revenue_multiplier: 2.5, cooldown_secs: 600.0 },
    TourTierSpec { id: "world",    name: "World Tour",     cost: 500_000.0, duration_secs: 600.0, revenue_multiplier: 4.0, cooldown_secs: 1_200.0 },
];

pub fn tour_tier_spec(id: &str) -> Option<&'static TourTierSpec> {
    TOUR_TIERS.iter().find(|t| t.id == id)
}

// ── Boosts ─────────────────────────────────────────────────────────

/// A temporary multiplier for hire. Repeat activations of the same
/// ability cost `base_cost × cost_scale^n` and stack multiplicatively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub base_cost: f64,
    pub cost_scale: f64,
    pub duration_secs: f64,
    pub multiplier: f64,
    pub kind: BoostKind,
}

pub static BOOSTS: [BoostSpec; 4] = [
    BoostSpec { id: "payola",        name: "Payola Push",      base_cost: 2_500.0, cost_scale: 1.5, duration_secs: 60.0, multiplier: 2.0, kind: BoostKind::Income },
    BoostSpec { id: "bot_streams",   name: "Botted Streams",   base_cost: 4_000.0, cost_scale: 1.5, duration_secs: 45.0, multiplier: 3.0, kind: BoostKind::Fans },
    BoostSpec { id: "crunch",        name: "Studio Crunch",    base_cost: 1_500.0, cost_scale: 1.4, duration_secs: 30.0, multiplier: 2.5, kind: BoostKind::Speed },
    BoostSpec { id: "ghost_writers", name: "Ghost Writers",    base_cost: 6_000.0, cost_scale: 1.6, duration_secs: 90.0, multiplier: 1.8, kind: BoostKind::Speed },
];

pub fn boost_spec(id: &str) -> Option<&'static BoostSpec> {
    BOOSTS.iter().find(|b| b.id == id)
}
