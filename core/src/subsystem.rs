//! Subsystem trait and per-tick context.
//!
//! RULE: Every per-tick update implements [`Subsystem`]. The engine calls
//! `update()` on each registered subsystem in registration order, every
//! tick. The order is fixed and documented in `engine.rs` — subsystems
//! must not depend on being called any other way.

use crate::error::SimResult;
use crate::event::GameEvent;
use crate::state::GameState;
use crate::types::{Millis, Seconds};

/// Timing for one tick, shared by the whole pipeline.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Wall-clock seconds since the previous tick, clamped to ≥ 0.
    pub delta_secs: Seconds,
    /// Absolute timestamp of this tick.
    pub now_ms: Millis,
}

/// The contract every per-tick subsystem fulfills.
pub trait Subsystem: Send {
    /// Unique stable name, used in logs.
    fn name(&self) -> &'static str;

    /// Called once per tick by the engine, in pipeline order.
    /// Returns the events this subsystem emitted this tick.
    fn update(&mut self, state: &mut GameState, ctx: &TickContext) -> SimResult<Vec<GameEvent>>;
}
