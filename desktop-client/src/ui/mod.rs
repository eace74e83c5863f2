mod app;
mod board;
mod instructions;
mod leaderboard_panel;
mod name_prompt;

pub use app::SnakeApp;
