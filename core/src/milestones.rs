//! Milestone checks — unlock flags not tied to tech purchases, and the
//! win condition.
//!
//! Runs last in the pipeline so it sees the tick's settled totals. Every
//! flag flips exactly once; the victory latch fires its event exactly
//! once.

use crate::data;
use crate::error::SimResult;
use crate::event::GameEvent;
use crate::state::GameState;
use crate::subsystem::{Subsystem, TickContext};

pub struct MilestoneSubsystem;

impl Subsystem for MilestoneSubsystem {
    fn name(&self) -> &'static str {
        "milestones"
    }

    fn update(&mut self, state: &mut GameState, _ctx: &TickContext) -> SimResult<Vec<GameEvent>> {
        let mut events = Vec::new();

        if !state.unlocked.albums && state.current_artist.fans >= data::ALBUM_UNLOCK_FANS {
            state.unlocked.albums = true;
            log::info!("unlocked: physical albums");
            events.push(GameEvent::SystemUnlocked {
                system: "albums".to_string(),
            });
        }

        if !state.unlocked.tours && state.current_artist.fans >= data::TOUR_UNLOCK_FANS {
            state.unlocked.tours = true;
            log::info!("unlocked: tours");
            events.push(GameEvent::SystemUnlocked {
                system: "tours".to_string(),
            });
        }

        if !state.unlocked.platforms && state.money >= data::PLATFORM_UNLOCK_MONEY {
            state.unlocked.platforms = true;
            log::info!("unlocked: platform acquisition");
            events.push(GameEvent::SystemUnlocked {
                system: "platforms".to_string(),
            });
        }

        if !state.won && state.industry_control >= data::WIN_CONTROL {
            state.won = true;
            log::info!(
                "victory: industry control {:.0}/100 after {:.0}s played",
                state.industry_control,
                state.total_time_played
            );
            events.push(GameEvent::VictoryAchieved {
                industry_control: state.industry_control,
                time_played_secs: state.total_time_played,
            });
        }

        Ok(events)
    }
}
