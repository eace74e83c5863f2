use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::SessionRng;
use common::games::snake::{GameOverSummary, SnakeController};
use common::leaderboard::{Leaderboard, ScoreReporter, ScoreStore, YamlFileScoreStore};
use common::{log, log_warn};
use tokio::sync::mpsc;

use crate::broadcaster::LocalBroadcaster;
use crate::config::{Config, resolve_beside_executable};
use crate::state::{ClientCommand, SharedState};

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

/// Game-side half of the client: the controller, the pending score and the
/// saved player name.
pub struct GameSession<S: ScoreStore> {
    controller: SnakeController<LocalBroadcaster>,
    reporter: ScoreReporter<S>,
    shared_state: SharedState,
    config_manager: ClientConfigManager,
}

impl<S: ScoreStore> GameSession<S> {
    pub fn new(
        controller: SnakeController<LocalBroadcaster>,
        leaderboard: Leaderboard<S>,
        shared_state: SharedState,
        config_manager: ClientConfigManager,
    ) -> Self {
        Self {
            controller,
            reporter: ScoreReporter::new(leaderboard),
            shared_state,
            config_manager,
        }
    }

    pub async fn publish_snapshot(&self) {
        self.shared_state.set_snapshot(self.controller.snapshot().await);
    }

    /// Opens the name prompt for the session that just ended. A summary from a
    /// session the player already restarted away from is dropped.
    pub async fn on_game_over(&mut self, summary: GameOverSummary) {
        let current_session = self.controller.snapshot().await.session_id;
        if summary.session_id != current_session {
            log!(
                "Dropping score {} of session {}: session {} is running",
                summary.score,
                summary.session_id,
                current_session
            );
            return;
        }

        if self.reporter.arm(summary) {
            self.shared_state.set_pending_score(Some(summary.score));
        }
    }

    /// Returns `false` once the task should stop.
    pub async fn handle_command(&mut self, command: ClientCommand) -> bool {
        match command {
            ClientCommand::Start => {
                self.reporter.discard();
                self.shared_state.set_pending_score(None);
                self.controller.start().await;
            }
            ClientCommand::Input(input) => {
                self.controller.handle_input(input).await;
            }
            ClientCommand::SubmitScore { name } => {
                self.shared_state.set_pending_score(None);
                if let Some(used_name) = self.reporter.submit(&name) {
                    self.shared_state.set_last_player_name(used_name.clone());
                    self.remember_player_name(used_name);
                }
            }
            ClientCommand::SkipScore => {
                self.reporter.discard();
                self.shared_state.set_pending_score(None);
            }
            ClientCommand::Shutdown => return false,
        }
        true
    }

    pub async fn shutdown(mut self) {
        self.controller.shutdown().await;
    }

    fn remember_player_name(&self, name: String) {
        let result = self.config_manager.get_config().and_then(|mut config| {
            config.last_player_name = Some(name);
            self.config_manager.set_config(&config)
        });

        if let Err(e) = result {
            log_warn!("Failed to save player name: {}", e);
        }
    }
}

/// Runs on the background runtime for the lifetime of the window.
pub async fn game_task(
    config: Config,
    config_manager: ClientConfigManager,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let score_file = resolve_beside_executable(&config.leaderboard.file);
    log!("Leaderboard file: {}", score_file.display());

    let leaderboard = Leaderboard::new(YamlFileScoreStore::new(score_file));
    let state_for_scores = shared_state.clone();
    let _subscription = leaderboard.subscribe_top_scores(config.leaderboard.top_limit, move |entries| {
        state_for_scores.set_high_scores(entries);
    });

    let (game_over_tx, mut game_over_rx) = mpsc::unbounded_channel();
    let broadcaster = LocalBroadcaster::new(shared_state.clone(), game_over_tx);
    let controller = SnakeController::new(&config.game, SessionRng::from_random(), broadcaster);
    let mut session = GameSession::new(controller, leaderboard, shared_state, config_manager);
    session.publish_snapshot().await;

    loop {
        tokio::select! {
            Some(summary) = game_over_rx.recv() => {
                session.on_game_over(summary).await;
            }
            command = command_rx.recv() => {
                let keep_running = match command {
                    Some(command) => session.handle_command(command).await,
                    None => false,
                };
                if !keep_running {
                    break;
                }
            }
        }
    }

    session.shutdown().await;
    log!("Game task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::{EndReason, SnakeSettings};
    use common::leaderboard::MemoryScoreStore;
    use std::time::Duration;

    fn get_temp_file_path() -> String {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("temp_snake_arcade_session_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    struct Fixture {
        session: GameSession<MemoryScoreStore>,
        leaderboard: Leaderboard<MemoryScoreStore>,
        shared_state: SharedState,
        config_path: String,
    }

    fn create_session() -> Fixture {
        let shared_state = SharedState::new(None);
        let (game_over_tx, _game_over_rx) = mpsc::unbounded_channel();
        let broadcaster = LocalBroadcaster::new(shared_state.clone(), game_over_tx);
        let controller = SnakeController::new(&SnakeSettings::default(), SessionRng::new(9), broadcaster);
        let leaderboard = Leaderboard::new(MemoryScoreStore::new());
        let config_path = get_temp_file_path();
        let config_manager = ConfigManager::from_yaml_file(&config_path);

        Fixture {
            session: GameSession::new(controller, leaderboard.clone(), shared_state.clone(), config_manager),
            leaderboard,
            shared_state,
            config_path,
        }
    }

    fn summary(session_id: u64, score: u32) -> GameOverSummary {
        GameOverSummary {
            session_id,
            score,
            reason: EndReason::SelfCollision,
        }
    }

    async fn wait_for_scores(leaderboard: &Leaderboard<MemoryScoreStore>, count: usize) {
        for _ in 0..100 {
            if leaderboard.top_scores(10).len() >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_game_over_prompts_and_submit_records_score() {
        let mut fixture = create_session();
        assert!(fixture.session.handle_command(ClientCommand::Start).await);

        fixture.session.on_game_over(summary(1, 7)).await;
        assert_eq!(fixture.shared_state.get_pending_score(), Some(7));

        // A repeated summary for the same session is ignored.
        fixture.session.on_game_over(summary(1, 7)).await;
        assert!(fixture.session.handle_command(ClientCommand::SubmitScore { name: " ada ".to_string() }).await);
        assert_eq!(fixture.shared_state.get_pending_score(), None);
        assert_eq!(fixture.shared_state.get_last_player_name(), Some("ada".to_string()));

        wait_for_scores(&fixture.leaderboard, 1).await;
        let top = fixture.leaderboard.top_scores(10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "ada");
        assert_eq!(top[0].score, 7);

        let saved_manager: ClientConfigManager = ConfigManager::from_yaml_file(&fixture.config_path);
        let saved = saved_manager.get_config().unwrap();
        assert_eq!(saved.last_player_name, Some("ada".to_string()));

        fixture.session.shutdown().await;
        let _ = std::fs::remove_file(&fixture.config_path);
    }

    #[tokio::test]
    async fn test_skip_clears_prompt_without_submitting() {
        let mut fixture = create_session();
        fixture.session.handle_command(ClientCommand::Start).await;
        fixture.session.on_game_over(summary(1, 4)).await;

        fixture.session.handle_command(ClientCommand::SkipScore).await;
        assert_eq!(fixture.shared_state.get_pending_score(), None);

        fixture.session.handle_command(ClientCommand::SubmitScore { name: "ada".to_string() }).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(fixture.leaderboard.top_scores(10).is_empty());
        fixture.session.shutdown().await;
    }

    #[tokio::test]
    async fn test_start_discards_pending_score() {
        let mut fixture = create_session();
        fixture.session.handle_command(ClientCommand::Start).await;
        fixture.session.on_game_over(summary(1, 5)).await;
        assert_eq!(fixture.shared_state.get_pending_score(), Some(5));

        fixture.session.handle_command(ClientCommand::Start).await;
        assert_eq!(fixture.shared_state.get_pending_score(), None);

        fixture.session.handle_command(ClientCommand::SubmitScore { name: "ada".to_string() }).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(fixture.leaderboard.top_scores(10).is_empty());
        fixture.session.shutdown().await;
    }

    #[tokio::test]
    async fn test_summary_arriving_after_restart_does_not_reopen_prompt() {
        let mut fixture = create_session();
        fixture.session.handle_command(ClientCommand::Start).await;
        fixture.session.handle_command(ClientCommand::Start).await;

        fixture.session.on_game_over(summary(1, 5)).await;
        assert_eq!(fixture.shared_state.get_pending_score(), None);

        fixture.session.on_game_over(summary(2, 3)).await;
        assert_eq!(fixture.shared_state.get_pending_score(), Some(3));
        fixture.session.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_loop() {
        let mut fixture = create_session();
        assert!(!fixture.session.handle_command(ClientCommand::Shutdown).await);
        fixture.session.shutdown().await;
    }
}
