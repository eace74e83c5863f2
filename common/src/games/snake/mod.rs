mod controller;
mod food;
mod game_state;
mod grid;
mod input;
mod settings;
mod snake;
mod types;

pub use controller::SnakeController;
pub use food::place_food;
pub use game_state::{GameOverSummary, GameSnapshot, SnakeGameState, StepOutcome};
pub use grid::{Cell, occupies, wrap};
pub use input::{Input, InputCommand, map_input};
pub use settings::{DEFAULT_CELL_SIZE, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS, SnakeSettings};
pub use snake::Snake;
pub use types::{Direction, EndReason, Lifecycle};
