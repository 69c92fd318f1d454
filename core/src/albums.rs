//! Physical albums — press a batch, sell it down an exponential demand
//! curve.
//!
//! Demand decays with batch age; the sell rate also scales gently with
//! the audience (log10 of fans). One batch at a time: re-pressing
//! discards unsold copies without refund.

use crate::data;
use crate::error::SimResult;
use crate::event::GameEvent;
use crate::state::{GameState, PhysicalAlbum};
use crate::subsystem::{Subsystem, TickContext};
use crate::types::Millis;

/// Press a new batch at a chosen price point. Replaces any active batch.
pub fn press(state: &mut GameState, copies: u32, price_per_copy: f64, now_ms: Millis) -> bool {
    if !state.unlocked.albums || copies == 0 {
        return false;
    }
    if !price_per_copy.is_finite() || price_per_copy < 0.0 {
        return false;
    }
    let cost = f64::from(copies) * data::PRESS_COST_PER_COPY;
    if state.money < cost {
        return false;
    }

    state.money -= cost;
    if let Some(old) = &state.active_album {
        log::debug!(
            "discarding {:.0} unsold copies of the previous batch",
            old.copies_remaining
        );
    }
    state.active_album = Some(PhysicalAlbum {
        copies_pressed: copies,
        copies_remaining: f64::from(copies),
        price_per_copy,
        revenue_generated: 0.0,
        pressed_at_ms: now_ms,
    });
    log::info!("pressed {copies} copies at {price_per_copy:.2} each");
    true
}

/// Copies per second the active batch sells at `now_ms`.
pub fn sell_rate(album: &PhysicalAlbum, fans: f64, now_ms: Millis) -> f64 {
    let age_secs = ((now_ms - album.pressed_at_ms) / 1000.0).max(0.0);
    let demand = (-data::ALBUM_DEMAND_DECAY * age_secs).exp().clamp(0.0, 1.0);
    data::ALBUM_BASE_SELL_RATE * demand * (1.0 + fans.max(1.0).log10() * 0.1)
}

pub struct AlbumSubsystem;

impl Subsystem for AlbumSubsystem {
    fn name(&self) -> &'static str {
        "albums"
    }

    fn update(&mut self, state: &mut GameState, ctx: &TickContext) -> SimResult<Vec<GameEvent>> {
        let mut events = Vec::new();
        let fans = state.current_artist.fans;

        let Some(album) = state.active_album.as_mut() else {
            return Ok(events);
        };

        let rate = sell_rate(album, fans, ctx.now_ms);
        let sold = (rate * ctx.delta_secs).min(album.copies_remaining);
        let revenue = sold * album.price_per_copy;

        album.copies_remaining -= sold;
        album.revenue_generated += revenue;
        state.money += revenue;

        if album.copies_remaining <= 0.0 {
            events.push(GameEvent::AlbumSoldOut {
                copies_pressed: album.copies_pressed,
                revenue: album.revenue_generated,
            });
            log::info!(
                "album batch sold out: {} copies, {:.2} revenue",
                album.copies_pressed,
                album.revenue_generated
            );
            state.active_album = None;
        }

        Ok(events)
    }
}
