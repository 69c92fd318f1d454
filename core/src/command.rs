//! Player-issued commands.
//!
//! Commands are synchronous point-in-time mutations dispatched by the
//! engine between ticks. Every one maps to a precondition-checked action
//! that returns `bool` and leaves the state untouched on failure.

use serde::{Deserialize, Serialize};

/// All player actions. Variants are added over time — never removed or
/// reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum GameCommand {
    QueueSongs { count: u32 },
    BuyGpu,
    PurchaseUpgrade { id: String },
    Prestige,
    PressAlbum { copies: u32, price_per_copy: f64 },
    StartTour { tier: String },
    ActivateBoost { ability_id: String },
    BuyPlatform { id: String },
}
