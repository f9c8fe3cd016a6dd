//! WildWest Headless Runner
//!
//! Loads (or builds) an arena, drives it with scripted input at a fixed
//! rate, logs what happens and checks that a replay lands on the same
//! state hash.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wildwest::{
    game::events::GameEventData,
    replay, Assets, GameConfig, InputFrame, MapLayout, Phase, World, TICK_RATE, VERSION,
};

/// Default run length: one minute of play.
const DEFAULT_FRAMES: u32 = 60 * TICK_RATE;

#[derive(Parser)]
#[command(name = "wildwest-sim")]
#[command(about = "Run a scripted WildWest session and verify it replays")]
struct Cli {
    /// Map layout (JSON). Defaults to the built-in demo arena
    #[arg(long)]
    map: Option<PathBuf>,

    /// Game tuning (JSON). Defaults to the built-in values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames to simulate at the fixed tick rate
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u32,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set tracing subscriber")?;

    let cli = Cli::parse();

    info!("WildWest simulation v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);

    let config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let layout = match &cli.map {
        Some(path) => MapLayout::from_json_file(path)
            .with_context(|| format!("loading map {}", path.display()))?,
        None => MapLayout::demo(),
    };

    let world = World::from_layout(&layout, Assets::headless(), config).context("building world")?;
    run(world, cli.frames)
}

/// Scripted input: walk a square, stopping to shoot after each leg.
fn scripted_input(frame: u32) -> InputFrame {
    let legs = [
        InputFrame::FLAG_RIGHT,
        InputFrame::FLAG_DOWN,
        InputFrame::FLAG_LEFT,
        InputFrame::FLAG_UP,
    ];
    let leg = legs[((frame / 80) % 4) as usize];
    if frame % 80 < 50 {
        InputFrame::new().with(leg)
    } else {
        InputFrame::new().with(leg).with(InputFrame::FLAG_ATTACK)
    }
}

fn run(world: World, frames: u32) -> Result<()> {
    info!("=== Starting Session ===");
    let initial = world.clone();
    let mut world = world;
    let dt = 1.0 / TICK_RATE as f32;

    let inputs: Vec<InputFrame> = (0..frames).map(scripted_input).collect();
    let mut total_events = 0;

    for (frame, input) in inputs.iter().enumerate() {
        let result = world.step(dt, input);
        total_events += result.events.len();

        for event in &result.events {
            match &event.data {
                GameEventData::PlayerHit { health } => {
                    info!("Tick {}: player hit, health {}", event.tick, health);
                }
                GameEventData::MonsterHit { monster, health } => {
                    info!("Tick {}: monster {} hit, health {}", event.tick, monster, health);
                }
                GameEventData::EntityDestroyed { actor } => {
                    info!("Tick {}: {} destroyed", event.tick, actor);
                }
                GameEventData::SessionEnded { outcome, duration_ticks } => {
                    info!("Session over: {:?} after {} ticks", outcome, duration_ticks);
                }
                other => debug!("Tick {}: {:?}", event.tick, other),
            }
        }

        if frame % (10 * TICK_RATE as usize) == 0 {
            info!(
                "Tick {}: health {}, {} monsters, {} projectiles",
                world.tick(),
                world.player_health(),
                world.monster_count(),
                world.projectiles().len()
            );
        }

        if result.ended {
            break;
        }
    }

    info!("=== Session Results ===");
    match world.phase() {
        Phase::Won => info!("YOU WIN"),
        Phase::Lost => info!("GAME OVER"),
        Phase::Playing => info!("Still playing after {} ticks", world.tick()),
    }
    let hash = world.compute_hash();
    info!("Final State Hash: {}", hex::encode(hash));
    info!("Total events: {}", total_events);

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let (replayed, replay_events) = replay(initial, &inputs, dt);
    let replay_hash = replayed.compute_hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash == replay_hash && replay_events.len() == total_events {
        info!("DETERMINISM VERIFIED: Hashes match!");
        Ok(())
    } else {
        warn!("DETERMINISM FAILURE: Hashes differ!");
        bail!("replay diverged from the recorded run")
    }
}
