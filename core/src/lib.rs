//! Encore — a tick-driven music-industry incremental simulation.
//!
//! A single mutable [`state::GameState`] advances through a fixed-rate
//! tick loop. Each tick the [`engine::GameEngine`] runs every subsystem
//! in a fixed, documented order (see `engine.rs`), integrating per-second
//! rates over the wall-clock delta: songs complete, money and fans
//! accumulate, timed systems expire. Player commands are synchronous
//! precondition-checked mutations between ticks. The run is won when
//! industry control reaches 100.
//!
//! Layering, leaf-first:
//!   - `mathx`, `types`, `data` — pure helpers and static design tables
//!   - `state`, `validate` — the state model and its acceptance contract
//!   - resource subsystems: `songs`, `income`, `fans`
//!   - progression subsystems: `tech`, `prestige`, `albums`, `tours`,
//!     `boosts`, `platforms`, `milestones`
//!   - `engine`, `store`, `clock` — the loop, persistence, and pacing

pub mod albums;
pub mod boosts;
pub mod clock;
pub mod command;
pub mod data;
pub mod engine;
pub mod error;
pub mod event;
pub mod fans;
pub mod income;
pub mod mathx;
pub mod milestones;
pub mod namegen;
pub mod platforms;
pub mod prestige;
pub mod songs;
pub mod state;
pub mod store;
pub mod subsystem;
pub mod tech;
pub mod tours;
pub mod types;
pub mod validate;
