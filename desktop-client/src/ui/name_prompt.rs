use eframe::egui;
use tokio::sync::mpsc;

use crate::state::ClientCommand;

/// "Game Over" window that collects a name for the leaderboard.
pub struct NamePrompt {
    name: String,
    open: bool,
    answered: bool,
    focus_requested: bool,
}

impl NamePrompt {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            open: false,
            answered: false,
            focus_requested: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the window while `pending_score` is set. The name field starts
    /// from `last_player_name` each time the window opens.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        pending_score: Option<u32>,
        last_player_name: Option<String>,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) {
        let Some(score) = pending_score else {
            self.open = false;
            self.answered = false;
            return;
        };

        // Stays hidden until the game task clears the answered score.
        if self.answered {
            return;
        }

        if !self.open {
            self.open = true;
            self.focus_requested = false;
            self.name = last_player_name.unwrap_or_default();
        }

        let mut command = None;

        egui::Window::new("Game Over!")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("Your score: {}", score));
                    ui.add_space(10.0);
                    ui.label("Enter your name for the leaderboard:");

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.name)
                            .hint_text("Your name")
                            .char_limit(24)
                            .desired_width(200.0),
                    );

                    if !self.focus_requested {
                        response.request_focus();
                        self.focus_requested = true;
                    }

                    let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Submit").clicked() || enter_pressed {
                            command = Some(ClientCommand::SubmitScore {
                                name: self.name.clone(),
                            });
                        }
                        if ui.button("Skip").clicked() {
                            command = Some(ClientCommand::SkipScore);
                        }
                    });
                });
            });

        if let Some(command) = command {
            self.answered = true;
            let _ = command_tx.send(command);
        }
    }
}
