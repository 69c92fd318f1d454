//! State acceptance checks.
//!
//! A deserialized snapshot is untrusted until it passes
//! [`validate_state`]. Structural shape (field presence, types) is already
//! enforced by serde — no state field carries a default — so this module
//! covers what the type system cannot: finiteness and ranges. NaN and
//! infinity are rejected here, at the boundary, never coerced mid-run.

use crate::data;
use crate::state::GameState;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("non-finite value in `{0}`")]
    NonFinite(&'static str),

    #[error("negative value in `{0}`")]
    Negative(&'static str),

    #[error("industry control {0} outside [0, 100]")]
    ControlOutOfRange(f64),

    #[error("tech tier {0} outside [1, 7]")]
    TierOutOfRange(u8),

    #[error("artist name is empty")]
    EmptyArtistName,

    #[error("legacy roster holds {0} artists, limit is {1}")]
    LegacyOverflow(usize, usize),
}

fn finite_non_negative(value: f64, field: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite(field));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(())
}

/// Full acceptance contract for a candidate state. Call before handing a
/// loaded snapshot to the engine.
pub fn validate_state(state: &GameState) -> Result<(), ValidationError> {
    finite_non_negative(state.money, "money")?;
    finite_non_negative(state.experience_multiplier, "experience_multiplier")?;
    finite_non_negative(state.total_time_played, "total_time_played")?;
    finite_non_negative(state.current_song_progress, "current_song_progress")?;
    finite_non_negative(state.tour_cooldown_secs, "tour_cooldown_secs")?;

    if !state.industry_control.is_finite() {
        return Err(ValidationError::NonFinite("industry_control"));
    }
    if !(0.0..=100.0).contains(&state.industry_control) {
        return Err(ValidationError::ControlOutOfRange(state.industry_control));
    }

    if !(1..=7).contains(&state.current_tech_tier) {
        return Err(ValidationError::TierOutOfRange(state.current_tech_tier));
    }

    if state.current_artist.name.trim().is_empty() {
        return Err(ValidationError::EmptyArtistName);
    }
    finite_non_negative(state.current_artist.fans, "current_artist.fans")?;
    finite_non_negative(state.current_artist.peak_fans, "current_artist.peak_fans")?;

    if state.legacy_artists.len() > data::MAX_LEGACY_ARTISTS {
        return Err(ValidationError::LegacyOverflow(
            state.legacy_artists.len(),
            data::MAX_LEGACY_ARTISTS,
        ));
    }
    for legacy in &state.legacy_artists {
        finite_non_negative(legacy.fans, "legacy_artists.fans")?;
        finite_non_negative(legacy.income_multiplier, "legacy_artists.income_multiplier")?;
        if !legacy.created_at_ms.is_finite() {
            return Err(ValidationError::NonFinite("legacy_artists.created_at_ms"));
        }
    }

    for boost in &state.active_boosts {
        finite_non_negative(boost.multiplier, "active_boosts.multiplier")?;
        if !boost.expires_at_ms.is_finite() {
            return Err(ValidationError::NonFinite("active_boosts.expires_at_ms"));
        }
    }

    if let Some(album) = &state.active_album {
        finite_non_negative(album.copies_remaining, "active_album.copies_remaining")?;
        finite_non_negative(album.price_per_copy, "active_album.price_per_copy")?;
        finite_non_negative(album.revenue_generated, "active_album.revenue_generated")?;
    }

    if let Some(tour) = &state.active_tour {
        finite_non_negative(tour.revenue_multiplier, "active_tour.revenue_multiplier")?;
        if !tour.ends_at_ms.is_finite() {
            return Err(ValidationError::NonFinite("active_tour.ends_at_ms"));
        }
    }

    Ok(())
}
