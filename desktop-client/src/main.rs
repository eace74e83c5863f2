mod broadcaster;
mod colors;
mod config;
mod game_task;
mod state;
mod ui;

use clap::Parser;
use common::config::ConfigManager;
use common::{log, log_warn, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::get_config_manager;
use game_task::game_task;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_arcade")]
struct Args {
    /// Path to a YAML config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = config_manager.get_config()?;
    log!(
        "Starting with a {}x{} grid, {} ms per tick",
        config.game.grid_size,
        config.game.grid_size,
        config.game.tick_interval_ms
    );

    let shared_state = SharedState::new(config.last_player_name.clone());
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let cell_size = config.game.cell_size;
    let board_pixels = config.game.board_pixels();
    let shared_state_clone = shared_state.clone();

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log_warn!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(game_task(config, config_manager, shared_state_clone, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_pixels + 560.0, (board_pixels + 220.0).max(720.0)])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Snake Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Game",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(shared_state, command_tx, cell_size)))),
    )?;

    log!("Window closed");
    Ok(())
}
