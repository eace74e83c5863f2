use std::time::Duration;

use common::games::snake::{Direction, GameSnapshot, Input, Lifecycle};
use eframe::egui;
use tokio::sync::mpsc;

use super::board::render_board;
use super::instructions::render_instructions;
use super::leaderboard_panel::render_leaderboard;
use super::name_prompt::NamePrompt;
use crate::state::{ClientCommand, SharedState};

const REPAINT_INTERVAL: Duration = Duration::from_millis(16);
const ARROW_BUTTON_SIZE: f32 = 44.0;

fn start_button_label(lifecycle: Lifecycle) -> &'static str {
    match lifecycle {
        Lifecycle::Running | Lifecycle::Paused => "Restart",
        Lifecycle::NotStarted | Lifecycle::Ended => "Start Game",
    }
}

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    cell_size: f32,
    name_prompt: NamePrompt,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        cell_size: u32,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            cell_size: cell_size as f32,
            name_prompt: NamePrompt::new(),
        }
    }

    fn send(&self, command: ClientCommand) {
        let _ = self.command_tx.send(command);
    }

    fn handle_keyboard(&self, ctx: &egui::Context) {
        let input = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) {
                Some(Input::Turn(Direction::Up))
            } else if i.key_pressed(egui::Key::ArrowDown) {
                Some(Input::Turn(Direction::Down))
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(Input::Turn(Direction::Left))
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(Input::Turn(Direction::Right))
            } else if i.key_pressed(egui::Key::Space) {
                Some(Input::PauseToggle)
            } else {
                None
            }
        });

        if let Some(input) = input {
            self.send(ClientCommand::Input(input));
        }
    }

    fn render_header(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", snapshot.score));
            ui.add_space(20.0);

            match snapshot.lifecycle {
                Lifecycle::Running => {
                    if ui.button("⏸ Pause").clicked() {
                        self.send(ClientCommand::Input(Input::PauseToggle));
                    }
                }
                Lifecycle::Paused => {
                    if ui.button("▶ Resume").clicked() {
                        self.send(ClientCommand::Input(Input::PauseToggle));
                    }
                }
                Lifecycle::NotStarted | Lifecycle::Ended => {}
            }

            if ui.button(start_button_label(snapshot.lifecycle)).clicked() {
                self.send(ClientCommand::Start);
            }
        });
    }

    fn render_arrow_buttons(&self, ui: &mut egui::Ui, lifecycle: Lifecycle) {
        let enabled = lifecycle != Lifecycle::Paused && lifecycle != Lifecycle::Ended;
        let size = egui::vec2(ARROW_BUTTON_SIZE, ARROW_BUTTON_SIZE);
        let mut pressed = None;

        ui.vertical_centered(|ui| {
            if ui.add_enabled(enabled, egui::Button::new("↑").min_size(size)).clicked() {
                pressed = Some(Direction::Up);
            }
            ui.horizontal(|ui| {
                // Centre the three-button row under the single up arrow.
                let row_width = ARROW_BUTTON_SIZE * 3.0 + ui.spacing().item_spacing.x * 2.0;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                if ui.add_enabled(enabled, egui::Button::new("←").min_size(size)).clicked() {
                    pressed = Some(Direction::Left);
                }
                if ui.add_enabled(enabled, egui::Button::new("↓").min_size(size)).clicked() {
                    pressed = Some(Direction::Down);
                }
                if ui.add_enabled(enabled, egui::Button::new("→").min_size(size)).clicked() {
                    pressed = Some(Direction::Right);
                }
            });
        });

        if let Some(direction) = pressed {
            self.send(ClientCommand::Input(Input::Turn(direction)));
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.shared_state.get_snapshot();
        let pending_score = self.shared_state.get_pending_score();

        if pending_score.is_none() && !self.name_prompt.is_open() {
            self.handle_keyboard(ctx);
        }

        egui::SidePanel::left("instructions_panel")
            .resizable(false)
            .min_width(200.0)
            .show(ctx, |ui| {
                render_instructions(ui);
            });

        egui::SidePanel::right("leaderboard_panel")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                render_leaderboard(ui, &self.shared_state.get_high_scores());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("🐍 Snake Game");
                ui.add_space(8.0);

                match &snapshot {
                    Some(snapshot) => {
                        self.render_header(ui, snapshot);
                        ui.add_space(8.0);
                        render_board(ui, snapshot, self.cell_size);
                        ui.add_space(12.0);
                        self.render_arrow_buttons(ui, snapshot.lifecycle);
                    }
                    None => {
                        ui.spinner();
                    }
                }
            });
        });

        self.name_prompt.show(
            ctx,
            pending_score,
            self.shared_state.get_last_player_name(),
            &self.command_tx,
        );

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}

impl Drop for SnakeApp {
    fn drop(&mut self) {
        let _ = self.command_tx.send(ClientCommand::Shutdown);
    }
}
