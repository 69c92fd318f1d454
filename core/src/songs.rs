//! Song queue — production progress, completions, and GPU automation.
//!
//! Generation time is looked up from the tech-tier table every tick, so a
//! tier upgrade mid-song immediately changes the rate applied to the
//! remaining fraction. No per-song snapshot of the tier is kept.

use crate::boosts;
use crate::data;
use crate::error::SimResult;
use crate::event::GameEvent;
use crate::state::{BoostKind, GameState};
use crate::subsystem::{Subsystem, TickContext};

/// Cost of queueing one song at the state's current tier.
pub fn song_cost(state: &GameState) -> f64 {
    data::tier_spec(state.current_tech_tier).song_cost
}

/// Queue `count` songs for production. Fails without mutation if the
/// total cost exceeds the current balance.
pub fn queue_songs(state: &mut GameState, count: u32) -> bool {
    if count == 0 {
        return false;
    }
    let cost = song_cost(state) * f64::from(count);
    if state.money < cost {
        return false;
    }
    state.money -= cost;
    state.songs_in_queue += count;
    log::debug!("queued {count} songs for {cost:.2}, queue={}", state.songs_in_queue);
    true
}

/// Buy one render rig. Each rig keeps one queue slot topped up per tick.
/// Cost follows the standard idle curve `base × scale^owned`.
pub fn buy_gpu(state: &mut GameState) -> bool {
    if !state.unlocked.gpus {
        return false;
    }
    let cost = data::GPU_BASE_COST * data::GPU_COST_SCALE.powi(state.gpus as i32);
    if state.money < cost {
        return false;
    }
    state.money -= cost;
    state.gpus += 1;
    log::info!("bought GPU #{} for {cost:.2}", state.gpus);
    true
}

pub struct SongSubsystem;

impl SongSubsystem {
    /// Top the queue back up to one pending song per owned GPU, paying
    /// the normal per-song cost. Partial fills are fine — automation
    /// never outspends the balance.
    fn auto_queue(state: &mut GameState) {
        if !state.unlocked.gpus || state.gpus == 0 {
            return;
        }
        let deficit = state.gpus.saturating_sub(state.songs_in_queue);
        if deficit == 0 {
            return;
        }
        let unit = song_cost(state);
        let affordable = if unit <= 0.0 {
            deficit
        } else {
            ((state.money / unit).floor() as u32).min(deficit)
        };
        if affordable == 0 {
            return;
        }
        state.money -= unit * f64::from(affordable);
        state.songs_in_queue += affordable;
    }
}

impl Subsystem for SongSubsystem {
    fn name(&self) -> &'static str {
        "songs"
    }

    fn update(&mut self, state: &mut GameState, ctx: &TickContext) -> SimResult<Vec<GameEvent>> {
        let mut events = Vec::new();

        Self::auto_queue(state);

        if state.songs_in_queue == 0 {
            return Ok(events);
        }

        let generation_time = data::tier_spec(state.current_tech_tier).generation_time_secs;
        let speed = boosts::multiplier_product(state, ctx.now_ms, BoostKind::Speed);
        state.current_song_progress += ctx.delta_secs * speed / generation_time;

        // Excess progress carries over into the next queued song.
        while state.current_song_progress >= 1.0 && state.songs_in_queue > 0 {
            state.current_song_progress -= 1.0;
            state.songs_in_queue -= 1;
            state.total_completed_songs += 1;
            state.current_artist.total_songs += 1;
            events.push(GameEvent::SongCompleted {
                artist_songs: state.current_artist.total_songs,
                lifetime_songs: state.total_completed_songs,
            });
        }

        // No fractional carry-over into an empty queue.
        if state.songs_in_queue == 0 {
            state.current_song_progress = 0.0;
        }

        Ok(events)
    }
}
