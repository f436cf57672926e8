//! Save Bridge demo entry point
//!
//! Native: a small CLI that drives the save manager against a file.
//! Web: loads the save on start and reports it to the console.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let manager = save_bridge::SaveManager::new();
    match manager.load_as::<save_bridge::GameSnapshot>() {
        Some(snapshot) => log::info!("Game data loaded! score={}", snapshot.score),
        None => log::info!("No save data found. Start new game."),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};
    use save_bridge::{GameSnapshot, LoadOutcome, SaveConfig, SaveManager};

    #[derive(Parser)]
    #[command(name = "save-bridge", about = "Save/load demo over the desktop backend")]
    pub struct Cli {
        /// Directory holding the save file (defaults to the executable's directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Show the current save
        Load,
        /// Write a fresh game save
        Save,
        /// Add points to the saved score
        AddScore {
            #[arg(default_value = "10")]
            points: u64,
        },
        /// Move the saved player position
        Move {
            #[arg(allow_hyphen_values = true)]
            dx: i32,
            #[arg(allow_hyphen_values = true)]
            dy: i32,
        },
        /// Delete the save
        Clear,
    }

    pub fn run(cli: Cli) -> std::process::ExitCode {
        let mut config = SaveConfig::default();
        if let Some(dir) = cli.dir {
            config = config.with_base_dir(dir);
        }
        let mut manager = SaveManager::with_config(config);

        let result = match cli.command {
            Command::Load => {
                match manager.load_detailed() {
                    LoadOutcome::Loaded(doc) => match GameSnapshot::from_document(&doc) {
                        Some(snapshot) => print_snapshot("Game data loaded!", &snapshot),
                        None => println!("Save data has an unexpected shape."),
                    },
                    LoadOutcome::Absent => println!("No save data found. Start new game."),
                    LoadOutcome::Corrupt(e) => println!("No save data found ({e})."),
                    LoadOutcome::ReadFailed(e) => println!("No save data found ({e})."),
                }
                Ok(())
            }
            Command::Save => save(&mut manager, &GameSnapshot::new_game()),
            Command::AddScore { points } => {
                let mut snapshot = current(&manager);
                snapshot.add_score(points);
                save(&mut manager, &snapshot)
            }
            Command::Move { dx, dy } => {
                let mut snapshot = current(&manager);
                snapshot.move_by(dx, dy);
                save(&mut manager, &snapshot)
            }
            Command::Clear => manager
                .clear()
                .map(|()| println!("Save data cleared."))
                .map_err(|e| format!("Clear failed: {e}")),
        };

        match result {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(message) => {
                eprintln!("{message}");
                std::process::ExitCode::FAILURE
            }
        }
    }

    fn current(manager: &SaveManager) -> GameSnapshot {
        manager
            .load_as::<GameSnapshot>()
            .unwrap_or_else(GameSnapshot::new_game)
    }

    fn save(manager: &mut SaveManager, snapshot: &GameSnapshot) -> Result<(), String> {
        match manager.save_as(snapshot) {
            Ok(()) => {
                print_snapshot("Game saved!", snapshot);
                Ok(())
            }
            Err(e) => Err(format!("Save failed: {e}")),
        }
    }

    fn print_snapshot(headline: &str, snapshot: &GameSnapshot) {
        println!("{headline}");
        println!("Score: {}", snapshot.score);
        println!(
            "Pos: ({}, {})",
            snapshot.player_position.x, snapshot.player_position.y
        );
        println!("Items: {}", snapshot.items.join(", "));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::init();
    log::info!("Save Bridge (native) starting...");
    cli::run(cli::Cli::parse())
}
