//! encore-runner: headless runner for the Encore simulation.
//!
//! Usage:
//!   encore-runner --ticks 36000 --seed 42 --db run.db
//!   encore-runner --realtime --ticks 600
//!   encore-runner --db run.db --load <RUN_ID>
//!
//! By default the runner fast-forwards: each iteration advances the
//! simulated clock by exactly one tick period, no sleeping. With
//! `--realtime` it paces ticks against the wall clock instead. A small
//! autoplay policy exercises every progression system so a long run
//! demonstrates the full arc through the victory condition.

use anyhow::{bail, Result};
use encore_core::{
    clock::TICK_INTERVAL_MS,
    command::GameCommand,
    data,
    engine::{generate_run_id, GameEngine},
    mathx::{format_duration, format_money},
    state::GameState,
    store::SaveStore,
    validate::validate_state,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 36_000u64);
    let realtime = args.iter().any(|a| a == "--realtime");
    let dump_state = args.iter().any(|a| a == "--dump-state");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let load_run = args
        .windows(2)
        .find(|w| w[0] == "--load")
        .map(|w| w[1].to_string());
    let artist = args
        .windows(2)
        .find(|w| w[0] == "--artist")
        .map(|w| w[1].as_str())
        .unwrap_or("The Garage Act");

    let store = if db == ":memory:" {
        SaveStore::in_memory()?
    } else {
        SaveStore::open(db)?
    };
    store.migrate()?;

    // Either resume a persisted run (validated before the engine sees
    // it) or register a fresh one.
    let (run_id, state) = match load_run {
        Some(existing) => {
            let Some(candidate) = store.load_latest_snapshot(&existing)? else {
                bail!("no snapshot found for run {existing}");
            };
            if let Err(err) = validate_state(&candidate) {
                bail!("snapshot for run {existing} rejected: {err}");
            }
            log::info!("resuming run {existing} from latest snapshot");
            (existing, candidate)
        }
        None => {
            let run_id = generate_run_id();
            store.insert_run(&run_id, artist, env!("CARGO_PKG_VERSION"))?;
            (run_id, GameState::new(artist))
        }
    };

    println!("Encore — headless runner");
    println!("  run_id: {run_id}");
    println!("  seed:   {seed}");
    println!("  ticks:  {ticks}");
    println!("  mode:   {}", if realtime { "realtime" } else { "fast-forward" });
    println!();

    let mut engine = GameEngine::new(run_id, state, store, seed);

    let mut now_ms = encore_core::clock::now_ms();
    engine.start_at(now_ms);

    for tick_no in 0..ticks {
        if realtime {
            std::thread::sleep(std::time::Duration::from_millis(TICK_INTERVAL_MS as u64));
            engine.tick()?;
            now_ms = encore_core::clock::now_ms();
        } else {
            now_ms += TICK_INTERVAL_MS;
            engine.tick_at(now_ms)?;
        }

        autoplay(&mut engine, now_ms);

        if engine.state().won {
            println!("victory on tick {tick_no}");
            break;
        }
    }

    engine.stop();
    print_summary(&engine);

    if dump_state {
        println!("{}", serde_json::to_string_pretty(engine.state())?);
    }
    Ok(())
}

/// A deliberately naive policy that pushes every progression lever as it
/// becomes available. Not a solver — just enough play to drive a run.
fn autoplay(engine: &mut GameEngine, now_ms: f64) {
    let state = engine.state();

    // Keep a handful of songs in flight before automation takes over.
    if state.songs_in_queue < 5 && state.gpus == 0 {
        engine.execute_at(GameCommand::QueueSongs { count: 1 }, now_ms);
    }

    // March down the upgrade table in order; failures are cheap.
    let next_upgrade = data::TECH_UPGRADES
        .iter()
        .find(|u| !engine.state().purchased_upgrades.contains(u.id))
        .map(|u| u.id.to_string());
    if let Some(id) = next_upgrade {
        engine.execute_at(GameCommand::PurchaseUpgrade { id }, now_ms);
    }

    let state = engine.state();
    if state.unlocked.gpus && state.gpus < 10 && state.money > data::GPU_BASE_COST * 4.0 {
        engine.execute_at(GameCommand::BuyGpu, now_ms);
    }

    let state = engine.state();
    if state.unlocked.albums && state.active_album.is_none() && state.money > 5_000.0 {
        engine.execute_at(
            GameCommand::PressAlbum {
                copies: 1_000,
                price_per_copy: 12.0,
            },
            now_ms,
        );
    }

    let state = engine.state();
    if state.unlocked.tours && state.active_tour.is_none() {
        let affordable = data::TOUR_TIERS
            .iter()
            .rev()
            .find(|t| state.money > t.cost * 2.0)
            .map(|t| t.id.to_string());
        if let Some(tier) = affordable {
            engine.execute_at(GameCommand::StartTour { tier }, now_ms);
        }
    }

    let state = engine.state();
    if state.unlocked.boosts && state.money > 50_000.0 && state.active_boosts.is_empty() {
        engine.execute_at(
            GameCommand::ActivateBoost {
                ability_id: "payola".to_string(),
            },
            now_ms,
        );
    }

    let state = engine.state();
    if state.unlocked.platforms {
        let next_platform = data::PLATFORMS
            .iter()
            .find(|p| !state.owned_platforms.contains(p.id) && state.money > p.cost)
            .map(|p| p.id.to_string());
        if let Some(id) = next_platform {
            engine.execute_at(GameCommand::BuyPlatform { id }, now_ms);
        }
    }

    // Retire once the audience dwarfs what the last artist drew.
    let state = engine.state();
    if state.unlocked.prestige && state.current_artist.fans >= 20_000.0 {
        engine.execute_at(GameCommand::Prestige, now_ms);
    }
}

fn print_summary(engine: &GameEngine) {
    let state = engine.state();
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  run_id:          {}", engine.run_id());
    println!("  artist:          {}", state.current_artist.name);
    println!("  money:           {}", format_money(state.money));
    println!("  fans:            {:.0}", state.current_artist.fans);
    println!("  songs (artist):  {}", state.current_artist.total_songs);
    println!("  songs (total):   {}", state.total_completed_songs);
    println!("  tech tier:       {}", state.current_tech_tier);
    println!("  prestiges:       {}", state.prestige_count);
    println!("  tours done:      {}", state.completed_tours);
    println!("  platforms:       {}", state.owned_platforms.len());
    println!("  control:         {:.0}/100", state.industry_control);
    println!("  time played:     {}", format_duration(state.total_time_played));
    println!("  won:             {}", state.won);
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
