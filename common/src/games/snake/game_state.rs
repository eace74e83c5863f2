use crate::log;
use crate::games::SessionRng;
use super::food::place_food;
use super::grid::Cell;
use super::snake::Snake;
use super::types::{Direction, EndReason, Lifecycle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Idle,
    Moved,
    Ate { score: u32 },
    GameOver { score: u32, reason: EndReason },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub session_id: u64,
    pub score: u32,
    pub reason: EndReason,
}

/// Everything a renderer needs; detached from the live session.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub session_id: u64,
    pub tick: u64,
    pub grid_size: usize,
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub lifecycle: Lifecycle,
    pub end_reason: Option<EndReason>,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid_size: usize,
    snake: Snake,
    food: Cell,
    direction: Option<Direction>,
    pending_direction: Option<Direction>,
    score: u32,
    lifecycle: Lifecycle,
    end_reason: Option<EndReason>,
    tick: u64,
    session_id: u64,
    game_over_reported: bool,
    rng: SessionRng,
}

impl SnakeGameState {
    pub fn new(grid_size: usize, rng: SessionRng) -> Self {
        let start = Self::start_cell(grid_size);
        let mut state = Self {
            grid_size,
            snake: Snake::new(start),
            food: start,
            direction: None,
            pending_direction: None,
            score: 0,
            lifecycle: Lifecycle::NotStarted,
            end_reason: None,
            tick: 0,
            session_id: 0,
            game_over_reported: false,
            rng,
        };
        state.food = state.next_food().unwrap_or(start);
        state
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        grid_size: usize,
        body: &[Cell],
        direction: Option<Direction>,
        food: Cell,
        seed: u64,
    ) -> Self {
        let mut state = Self::new(grid_size, SessionRng::new(seed));
        state.snake = Snake::from_cells(body.iter().copied());
        state.direction = direction;
        state.food = food;
        state.lifecycle = Lifecycle::Running;
        state.session_id = 1;
        state
    }

    fn start_cell(grid_size: usize) -> Cell {
        Cell::new(grid_size / 2, grid_size / 2)
    }

    fn next_food(&mut self) -> Option<Cell> {
        place_food(self.grid_size, self.snake.occupied(), &mut self.rng)
    }

    /// Discards the current session and begins a new one in `Running`.
    pub fn start(&mut self) {
        let start = Self::start_cell(self.grid_size);
        self.snake = Snake::new(start);
        self.direction = None;
        self.pending_direction = None;
        self.score = 0;
        self.end_reason = None;
        self.tick = 0;
        self.session_id += 1;
        self.game_over_reported = false;
        self.food = self.next_food().unwrap_or(start);
        self.lifecycle = Lifecycle::Running;

        log!("Session {} started", self.session_id);
    }

    pub fn start_with_direction(&mut self, direction: Direction) {
        self.start();
        self.direction = Some(direction);
    }

    pub fn pause(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Running {
            return false;
        }
        self.lifecycle = Lifecycle::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Paused {
            return false;
        }
        self.lifecycle = Lifecycle::Running;
        true
    }

    /// Stores `direction` for the next tick unless it reverses the committed one.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if self.lifecycle != Lifecycle::Running {
            return false;
        }
        if let Some(current) = self.direction
            && direction.is_opposite(&current)
        {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn step(&mut self) -> StepOutcome {
        if self.lifecycle != Lifecycle::Running {
            return StepOutcome::Idle;
        }

        if let Some(next) = self.pending_direction.take() {
            self.direction = Some(next);
        }
        let Some(direction) = self.direction else {
            return StepOutcome::Idle;
        };

        self.tick += 1;
        let next_head = self.snake.head().neighbour(direction, self.grid_size);

        // The tail is still part of the body here, so moving into it is fatal.
        if self.snake.contains(&next_head) {
            return self.end(EndReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if next_head != self.food {
            self.snake.pop_tail();
            return StepOutcome::Moved;
        }

        self.score += 1;
        log!(
            "Session {} ate food at ({}, {}). Score: {}",
            self.session_id,
            next_head.x,
            next_head.y,
            self.score
        );

        match self.next_food() {
            Some(food) => {
                self.food = food;
                StepOutcome::Ate { score: self.score }
            }
            None => self.end(EndReason::BoardFilled),
        }
    }

    fn end(&mut self, reason: EndReason) -> StepOutcome {
        self.lifecycle = Lifecycle::Ended;
        self.end_reason = Some(reason);
        log!(
            "Session {} ended ({:?}) with score {}",
            self.session_id,
            reason,
            self.score
        );
        StepOutcome::GameOver {
            score: self.score,
            reason,
        }
    }

    /// Hands out the game-over summary once per session.
    pub fn take_game_over_report(&mut self) -> Option<GameOverSummary> {
        if self.lifecycle != Lifecycle::Ended || self.game_over_reported {
            return None;
        }
        let reason = self.end_reason?;
        self.game_over_reported = true;
        Some(GameOverSummary {
            session_id: self.session_id,
            score: self.score,
            reason,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            session_id: self.session_id,
            tick: self.tick,
            grid_size: self.grid_size,
            snake: self.snake.cells().copied().collect(),
            food: self.food,
            score: self.score,
            lifecycle: self.lifecycle,
            end_reason: self.end_reason,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(cells: &[(usize, usize)]) -> Vec<Cell> {
        cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_new_state_waits_in_not_started() {
        let state = SnakeGameState::new(25, SessionRng::new(1));
        assert_eq!(state.lifecycle(), Lifecycle::NotStarted);
        assert_eq!(state.snake().head(), Cell::new(12, 12));
        assert_ne!(state.food(), Cell::new(12, 12));
    }

    #[test]
    fn test_step_is_noop_until_direction_set() {
        let mut state = SnakeGameState::new(25, SessionRng::new(1));
        state.start();
        assert_eq!(state.step(), StepOutcome::Idle);
        assert_eq!(state.snake().head(), Cell::new(12, 12));
    }

    #[test]
    fn test_step_is_noop_while_paused() {
        let mut state = SnakeGameState::from_parts(25, &body(&[(3, 3)]), Some(Direction::Right), Cell::new(20, 20), 1);
        assert!(state.pause());
        assert_eq!(state.step(), StepOutcome::Idle);
        assert_eq!(state.snake().head(), Cell::new(3, 3));
        assert!(state.resume());
        assert_eq!(state.step(), StepOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(4, 3));
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut state = SnakeGameState::from_parts(25, &body(&[(12, 12)]), Some(Direction::Up), Cell::new(12, 11), 9);

        assert_eq!(state.step(), StepOutcome::Ate { score: 1 });
        assert_eq!(state.score(), 1);
        let cells: Vec<Cell> = state.snake().cells().copied().collect();
        assert_eq!(cells, body(&[(12, 11), (12, 12)]));
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_moving_left_from_origin_wraps() {
        let mut state = SnakeGameState::from_parts(25, &body(&[(0, 0)]), Some(Direction::Left), Cell::new(10, 10), 2);
        assert_eq!(state.step(), StepOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(24, 0));
        assert_eq!(state.snake().len(), 1);
    }

    #[test]
    fn test_collision_ends_game_and_keeps_body() {
        let original = body(&[(5, 5), (5, 6), (5, 7)]);
        let mut state = SnakeGameState::from_parts(25, &original, Some(Direction::Down), Cell::new(0, 0), 4);

        assert_eq!(
            state.step(),
            StepOutcome::GameOver {
                score: 0,
                reason: EndReason::SelfCollision
            }
        );
        assert_eq!(state.lifecycle(), Lifecycle::Ended);
        let cells: Vec<Cell> = state.snake().cells().copied().collect();
        assert_eq!(cells, original);
    }

    #[test]
    fn test_moving_into_current_tail_is_fatal() {
        // A 2x2 loop: the head's next cell is the tail that would be vacated.
        let original = body(&[(5, 5), (6, 5), (6, 6), (5, 6)]);
        let mut state = SnakeGameState::from_parts(25, &original, Some(Direction::Down), Cell::new(0, 0), 4);

        assert!(matches!(state.step(), StepOutcome::GameOver { .. }));
        let cells: Vec<Cell> = state.snake().cells().copied().collect();
        assert_eq!(cells, original);
    }

    #[test]
    fn test_length_and_score_invariants_over_many_steps() {
        let mut state = SnakeGameState::new(10, SessionRng::new(21));
        state.start();
        let mut rng = SessionRng::new(99);
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

        for _ in 0..500 {
            if state.lifecycle() != Lifecycle::Running {
                break;
            }
            state.queue_direction(turns[rng.random_below(turns.len())]);

            let len_before = state.snake().len();
            let score_before = state.score();
            let body_before: Vec<Cell> = state.snake().cells().copied().collect();

            match state.step() {
                StepOutcome::Moved => {
                    assert_eq!(state.snake().len(), len_before);
                    assert_eq!(state.score(), score_before);
                }
                StepOutcome::Ate { score } => {
                    assert_eq!(state.snake().len(), len_before + 1);
                    assert_eq!(score, score_before + 1);
                    assert!(!state.snake().contains(&state.food()));
                }
                StepOutcome::GameOver { .. } => {
                    let body_after: Vec<Cell> = state.snake().cells().copied().collect();
                    assert_eq!(body_after, body_before);
                    assert_eq!(state.score(), score_before);
                }
                StepOutcome::Idle => panic!("running state with a direction must move"),
            }
            assert!(state.score() >= score_before);
        }
    }

    #[test]
    fn test_reverse_direction_is_rejected() {
        let mut state = SnakeGameState::from_parts(25, &body(&[(3, 3), (2, 3)]), Some(Direction::Right), Cell::new(20, 20), 1);

        assert!(!state.queue_direction(Direction::Left));
        assert_eq!(state.pending_direction(), None);
        assert_eq!(state.direction(), Some(Direction::Right));

        assert!(state.queue_direction(Direction::Up));
        assert!(state.queue_direction(Direction::Down));
        assert_eq!(state.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_two_quick_turns_cannot_reverse() {
        let mut state = SnakeGameState::from_parts(25, &body(&[(3, 3), (2, 3)]), Some(Direction::Right), Cell::new(20, 20), 1);
        assert!(state.queue_direction(Direction::Up));
        // Still compared against the committed Right, not the pending Up.
        assert!(!state.queue_direction(Direction::Left));
        state.step();
        assert_eq!(state.snake().head(), Cell::new(3, 2));
    }

    #[test]
    fn test_game_over_report_is_one_shot() {
        let mut state = SnakeGameState::from_parts(25, &body(&[(5, 5), (5, 6), (5, 7)]), Some(Direction::Down), Cell::new(0, 0), 4);
        assert_eq!(state.take_game_over_report(), None);

        state.step();
        let report = state.take_game_over_report().unwrap();
        assert_eq!(report.score, 0);
        assert_eq!(report.reason, EndReason::SelfCollision);
        assert_eq!(state.take_game_over_report(), None);

        state.step();
        assert_eq!(state.take_game_over_report(), None);
    }

    #[test]
    fn test_start_resets_session() {
        let mut state = SnakeGameState::from_parts(25, &body(&[(12, 12)]), Some(Direction::Up), Cell::new(12, 11), 9);
        state.step();
        let first_session = state.session_id();

        state.start();
        assert_eq!(state.session_id(), first_session + 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.direction(), None);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.snake().head(), Cell::new(12, 12));
        assert_eq!(state.lifecycle(), Lifecycle::Running);
        assert!(!state.snake().contains(&state.food()));
    }

    #[test]
    fn test_filling_the_board_ends_the_game() {
        // 5x5 board with every cell but the food covered by the snake.
        let mut cells = Vec::new();
        for y in 0..5 {
            let row: Vec<usize> = if y % 2 == 0 { (0..5).collect() } else { (0..5).rev().collect() };
            for x in row {
                cells.push(Cell::new(x, y));
            }
        }
        let food = cells.remove(0);
        // Head is (1, 0), food at (0, 0) to its left.
        let mut state = SnakeGameState::from_parts(5, &cells, Some(Direction::Left), food, 8);

        assert_eq!(
            state.step(),
            StepOutcome::GameOver {
                score: 1,
                reason: EndReason::BoardFilled
            }
        );
        assert_eq!(state.snake().len(), 25);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = SnakeGameState::from_parts(25, &body(&[(4, 4), (4, 5)]), Some(Direction::Up), Cell::new(1, 1), 1);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.snake, body(&[(4, 4), (4, 5)]));
        assert_eq!(snapshot.food, Cell::new(1, 1));
        assert_eq!(snapshot.grid_size, 25);
        assert_eq!(snapshot.lifecycle, Lifecycle::Running);
    }
}
