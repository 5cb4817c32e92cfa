// Accessors kept for tests and debugging are not all used by the loop
#![allow(dead_code)]

mod assets;
mod clock;
mod difficulty;
mod display;
mod entities;
mod game;
mod geometry;
mod spawn;
mod texture;

use std::path::PathBuf;

use assets::Assets;
use clock::FrameClock;
use display::{Display, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use game::{GameState, GameStatus};

const TITLE: &str = "Depth Charge";

/// Settings taken from the command line
struct LaunchOptions {
    asset_dir: PathBuf,
    seed: Option<u64>,
    vsync: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            seed: None,
            vsync: true,
        }
    }
}

fn print_help() {
    println!("Usage: depthcharge [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --assets DIR, -a DIR  Directory holding the .bmp images (default: .)");
    println!("  --seed N              Fixed random seed for a reproducible round");
    println!("  --no-vsync            Disable VSync (the game then runs as fast as it can)");
    println!("  --help                Show this help message");
    println!();
    println!("Controls:");
    println!("  1-4          - Pick difficulty on the menu");
    println!("  Left/Right   - Steer the battleship");
    println!("  Down         - Drop a bomb");
    println!("  Escape       - Quit");
}

/// Parse command line arguments
fn parse_args() -> LaunchOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = LaunchOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => options.vsync = false,
            "--assets" | "-a" => {
                if i + 1 < args.len() {
                    options.asset_dir = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            },
            "--seed" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u64>() {
                        Ok(seed) => options.seed = Some(seed),
                        Err(_) => log::warn!("Ignoring invalid seed {:?}", args[i + 1]),
                    }
                    i += 1;
                }
            },
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            },
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
        i += 1;
    }

    options
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = parse_args();
    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!("{} starting (seed {})", TITLE, seed);

    let (mut display, texture_creator) =
        Display::with_options(TITLE, DEFAULT_WIDTH, DEFAULT_HEIGHT, options.vsync).map_err(|e| {
            log::error!("Failed to initialize: {}", e);
            e
        })?;
    let assets = Assets::load(&texture_creator, &options.asset_dir);

    let mut state = GameState::new(seed);
    let mut clock = FrameClock::new(60);
    let mut round_logged = false;

    loop {
        clock.tick();
        let now = clock.ticks_ms();

        for event in display.poll_events() {
            state.handle_event(&event, now);
        }

        state.update(now);

        state.draw(&mut display, &assets);
        display.present();

        if state.status().is_terminal() && !round_logged {
            let outcome = if state.status() == GameStatus::Win {
                "won"
            } else {
                "lost"
            };
            log::info!(
                "Round {} after {:.1}s ({:.0} fps avg)",
                outcome,
                now as f32 / 1000.0,
                clock.avg_fps()
            );
            round_logged = true;
        }

        if state.quit_requested() {
            break;
        }
    }

    log::info!("Shutting down");
    Ok(())
}
