use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::log;
use crate::games::{GameBroadcaster, SessionRng};
use super::game_state::{GameSnapshot, SnakeGameState, StepOutcome};
use super::input::{Input, InputCommand, map_input};
use super::settings::SnakeSettings;
use super::types::{Direction, Lifecycle};

/// Owns one session, its tick task and the broadcaster it reports to.
///
/// At most one tick task exists at a time. Every transition that replaces or
/// stops it aborts the old task and waits for it to finish before going on, so
/// two `step` calls never overlap.
pub struct SnakeController<B: GameBroadcaster> {
    game_state: Arc<Mutex<SnakeGameState>>,
    tick_interval: Duration,
    broadcaster: B,
    ticker: Option<JoinHandle<()>>,
}

impl<B: GameBroadcaster> SnakeController<B> {
    pub fn new(settings: &SnakeSettings, rng: SessionRng, broadcaster: B) -> Self {
        Self {
            game_state: Arc::new(Mutex::new(SnakeGameState::new(settings.grid_size, rng))),
            tick_interval: settings.tick_interval(),
            broadcaster,
            ticker: None,
        }
    }

    #[cfg(test)]
    fn from_state(game_state: SnakeGameState, tick_interval: Duration, broadcaster: B) -> Self {
        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            tick_interval,
            broadcaster,
            ticker: None,
        }
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.game_state.lock().await.snapshot()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub async fn start(&mut self) {
        self.start_session(None).await;
    }

    async fn start_session(&mut self, direction: Option<Direction>) {
        self.stop_ticker().await;

        let snapshot = {
            let mut game_state = self.game_state.lock().await;
            match direction {
                Some(direction) => game_state.start_with_direction(direction),
                None => game_state.start(),
            }
            game_state.snapshot()
        };

        self.broadcaster.broadcast_state(snapshot).await;
        self.spawn_ticker().await;
    }

    pub async fn pause(&mut self) -> bool {
        let snapshot = {
            let mut game_state = self.game_state.lock().await;
            if !game_state.pause() {
                return false;
            }
            game_state.snapshot()
        };

        self.stop_ticker().await;
        log!("Session {} paused", snapshot.session_id);
        self.broadcaster.broadcast_state(snapshot).await;
        true
    }

    pub async fn resume(&mut self) -> bool {
        let snapshot = {
            let mut game_state = self.game_state.lock().await;
            if !game_state.resume() {
                return false;
            }
            game_state.snapshot()
        };

        self.stop_ticker().await;
        log!("Session {} resumed", snapshot.session_id);
        self.broadcaster.broadcast_state(snapshot).await;
        self.spawn_ticker().await;
        true
    }

    pub async fn toggle_pause(&mut self) -> bool {
        let lifecycle = self.game_state.lock().await.lifecycle();
        match lifecycle {
            Lifecycle::Running => self.pause().await,
            Lifecycle::Paused => self.resume().await,
            Lifecycle::NotStarted | Lifecycle::Ended => false,
        }
    }

    pub async fn handle_input(&mut self, input: Input) -> InputCommand {
        let command = {
            let game_state = self.game_state.lock().await;
            map_input(game_state.lifecycle(), game_state.direction(), input)
        };

        match command {
            InputCommand::Ignore => {}
            InputCommand::Turn(direction) => {
                self.game_state.lock().await.queue_direction(direction);
            }
            InputCommand::Pause => {
                self.pause().await;
            }
            InputCommand::Resume => {
                self.resume().await;
            }
            InputCommand::StartWithDirection(direction) => {
                self.start_session(Some(direction)).await;
            }
        }

        command
    }

    pub async fn shutdown(&mut self) {
        self.stop_ticker().await;
    }

    async fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            let _ = handle.await;
        }
    }

    async fn spawn_ticker(&mut self) {
        let session_id = self.game_state.lock().await.session_id();
        let game_state = self.game_state.clone();
        let broadcaster = self.broadcaster.clone();
        let period = self.tick_interval;

        self.ticker = Some(tokio::spawn(async move {
            run_ticker(game_state, broadcaster, period, session_id).await;
        }));
    }
}

impl<B: GameBroadcaster> Drop for SnakeController<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

async fn run_ticker<B: GameBroadcaster>(
    game_state: Arc<Mutex<SnakeGameState>>,
    broadcaster: B,
    period: Duration,
    session_id: u64,
) {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        timer.tick().await;

        let (outcome, snapshot, report) = {
            let mut game_state = game_state.lock().await;
            if game_state.session_id() != session_id
                || game_state.lifecycle() != Lifecycle::Running
            {
                break;
            }
            let outcome = game_state.step();
            (outcome, game_state.snapshot(), game_state.take_game_over_report())
        };

        // `stop_ticker` may abort this task at any await past this point.
        let game_over = report.is_some();
        if let Some(summary) = report {
            let broadcaster = broadcaster.clone();
            tokio::spawn(async move {
                broadcaster.broadcast_game_over(summary).await;
            });
        }

        if outcome != StepOutcome::Idle {
            broadcaster.broadcast_state(snapshot).await;
        }

        if game_over {
            break;
        }
    }
}
