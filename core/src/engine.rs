//! The tick engine — the heart of Encore.
//!
//! UPDATE ORDER (fixed, documented, never reordered):
//!   1. Songs      — queue progress, completions, GPU auto-queue
//!   2. Income     — streaming + legacy + platform dividends
//!   3. Fans       — audience growth + cross-promotion
//!   4. Albums     — demand decay, sales, sell-out
//!   5. Tours      — expiry and cooldown bookkeeping
//!   6. Boosts     — expired-instance sweep
//!   7. Milestones — unlock flips and the victory latch
//!
//! RULES:
//!   - Subsystems execute in registration order, every tick.
//!   - The engine is the sole owner of the `GameState` for the run.
//!   - Player commands are synchronous mutations between ticks.
//!   - A persistence failure is logged and never aborts the loop.

use std::collections::VecDeque;

use crate::albums::{self, AlbumSubsystem};
use crate::boosts::{self, BoostSubsystem};
use crate::clock::{self, AUTO_SAVE_INTERVAL_SECS};
use crate::command::GameCommand;
use crate::error::SimResult;
use crate::event::GameEvent;
use crate::fans::FanSubsystem;
use crate::income::IncomeSubsystem;
use crate::milestones::MilestoneSubsystem;
use crate::namegen::StageNames;
use crate::platforms;
use crate::prestige;
use crate::songs::{self, SongSubsystem};
use crate::state::GameState;
use crate::store::SaveStore;
use crate::subsystem::{Subsystem, TickContext};
use crate::tech;
use crate::tours::{self, TourSubsystem};
use crate::types::{Millis, RunId};

/// Recent events kept for hosts to render.
const RECENT_EVENT_CAP: usize = 256;

/// Generate a fresh run identifier.
pub fn generate_run_id() -> RunId {
    format!("run-{}", uuid::Uuid::new_v4())
}

pub struct GameEngine {
    run_id: RunId,
    state: GameState,
    subsystems: Vec<Box<dyn Subsystem>>,
    store: SaveStore,
    names: StageNames,
    running: bool,
    last_tick_ms: Millis,
    save_accum_secs: f64,
    recent_events: VecDeque<GameEvent>,
}

impl GameEngine {
    /// Build a fully wired engine over a state the caller has validated.
    pub fn new(run_id: RunId, state: GameState, store: SaveStore, name_seed: u64) -> Self {
        // UPDATE ORDER — fixed, documented, never reordered.
        let subsystems: Vec<Box<dyn Subsystem>> = vec![
            Box::new(SongSubsystem),
            Box::new(IncomeSubsystem),
            Box::new(FanSubsystem),
            Box::new(AlbumSubsystem),
            Box::new(TourSubsystem),
            Box::new(BoostSubsystem),
            Box::new(MilestoneSubsystem),
        ];
        Self {
            run_id,
            state,
            subsystems,
            store,
            names: StageNames::new(name_seed),
            running: false,
            last_tick_ms: 0.0,
            save_accum_secs: 0.0,
            recent_events: VecDeque::new(),
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn recent_events(&self) -> &VecDeque<GameEvent> {
        &self.recent_events
    }

    // ── Lifecycle ──────────────────────────────────────────────

    /// Begin ticking from `now_ms`. A second call while running is a
    /// logged no-op.
    pub fn start_at(&mut self, now_ms: Millis) {
        if self.running {
            log::info!("start() while already running — ignored");
            return;
        }
        self.running = true;
        self.last_tick_ms = now_ms;
        self.save_accum_secs = 0.0;
        log::info!("engine started (run {})", self.run_id);
    }

    /// Begin ticking from the wall clock.
    pub fn start(&mut self) {
        self.start_at(clock::now_ms());
    }

    /// Halt the loop and flush a final snapshot. Idempotent — calling
    /// again when stopped does nothing.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.flush_save();
        log::info!("engine stopped (run {})", self.run_id);
    }

    // ── Tick ───────────────────────────────────────────────────

    /// Advance one tick stamped with the wall clock.
    pub fn tick(&mut self) -> SimResult<Vec<GameEvent>> {
        self.tick_at(clock::now_ms())
    }

    /// Advance one tick at an explicit timestamp. The entry point for
    /// tests and fast-forward drivers.
    pub fn tick_at(&mut self, now_ms: Millis) -> SimResult<Vec<GameEvent>> {
        if !self.running {
            log::debug!("tick on stopped engine — ignored");
            return Ok(Vec::new());
        }

        // A regressing host clock clamps to zero, never reverses progress.
        let delta_secs = ((now_ms - self.last_tick_ms) / 1000.0).max(0.0);
        self.last_tick_ms = now_ms;

        let ctx = TickContext { delta_secs, now_ms };
        let mut events = Vec::new();
        for subsystem in &mut self.subsystems {
            events.extend(subsystem.update(&mut self.state, &ctx)?);
        }

        self.state.total_time_played += delta_secs;

        self.save_accum_secs += delta_secs;
        if self.save_accum_secs >= AUTO_SAVE_INTERVAL_SECS {
            self.flush_save();
        }

        for event in &events {
            log::debug!("event: {event:?}");
        }
        self.remember(events.iter().cloned());

        Ok(events)
    }

    // ── Player commands ────────────────────────────────────────

    /// Dispatch a player command stamped with the wall clock.
    pub fn execute(&mut self, command: GameCommand) -> bool {
        self.execute_at(command, clock::now_ms())
    }

    /// Dispatch a player command at an explicit timestamp. Returns the
    /// action's success flag; failures mutate nothing.
    pub fn execute_at(&mut self, command: GameCommand, now_ms: Millis) -> bool {
        match command {
            GameCommand::QueueSongs { count } => songs::queue_songs(&mut self.state, count),
            GameCommand::BuyGpu => songs::buy_gpu(&mut self.state),
            GameCommand::PurchaseUpgrade { id } => {
                let tier_before = self.state.current_tech_tier;
                let ok = tech::purchase(&mut self.state, &id);
                if ok && self.state.current_tech_tier > tier_before {
                    self.remember([GameEvent::TierReached {
                        tier: self.state.current_tech_tier,
                    }]);
                }
                ok
            }
            GameCommand::Prestige => {
                let retiring = self.state.current_artist.name.clone();
                let debut = self.names.next_name();
                let ok = prestige::perform(&mut self.state, &debut, now_ms);
                if ok {
                    self.remember([GameEvent::PrestigeCompleted {
                        retired_artist: retiring,
                        new_artist: debut,
                        experience_multiplier: self.state.experience_multiplier,
                    }]);
                }
                ok
            }
            GameCommand::PressAlbum {
                copies,
                price_per_copy,
            } => albums::press(&mut self.state, copies, price_per_copy, now_ms),
            GameCommand::StartTour { tier } => tours::start(&mut self.state, &tier, now_ms),
            GameCommand::ActivateBoost { ability_id } => {
                boosts::activate(&mut self.state, &ability_id, now_ms)
            }
            GameCommand::BuyPlatform { id } => {
                let ok = platforms::purchase(&mut self.state, &id);
                if ok {
                    self.remember([GameEvent::PlatformAcquired {
                        platform_id: id,
                        industry_control: self.state.industry_control,
                    }]);
                }
                ok
            }
        }
    }

    // ── Persistence ────────────────────────────────────────────

    /// Fire-and-forget snapshot. Failure must never reach the tick loop.
    fn flush_save(&mut self) {
        match self.store.save_snapshot(&self.run_id, &self.state) {
            Ok(()) => log::debug!("snapshot saved (run {})", self.run_id),
            Err(err) => log::warn!("snapshot save failed: {err}"),
        }
        self.save_accum_secs = 0.0;
    }

    /// Direct read access to the store, for hosts and tests.
    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    fn remember<I: IntoIterator<Item = GameEvent>>(&mut self, events: I) {
        for event in events {
            if self.recent_events.len() == RECENT_EVENT_CAP {
                self.recent_events.pop_front();
            }
            self.recent_events.push_back(event);
        }
    }
}
