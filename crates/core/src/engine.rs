//! Game engine - owns the complete simulation state
//!
//! This module ties together the snake, food placement, RNG and scoring.
//! It handles the run state machine, direction buffering and the per-tick
//! movement/collision rules. It never touches clocks or I/O: a scheduler calls
//! [`GameEngine::tick`] and renderers read [`GameEngine::snapshot`].

use arrayvec::ArrayVec;

use crate::config::{ConfigError, GameConfig};
use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Command, Direction, GameEvent, RoundSummary, RunState};

/// Pending events kept between drains; the oldest is dropped on overflow.
pub const EVENT_QUEUE_LEN: usize = 16;

/// What a single call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Idle,
    /// Snake advanced one cell
    Moved,
    /// Snake advanced onto the food and grew
    Ate,
    /// Hit a wall or itself; the board has been reset
    GameOver,
    /// Filled the board; the board has been reset
    Won,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    snake: Snake,
    food: Option<Cell>,
    direction: Direction,
    /// Latest accepted turn, committed at the start of the next tick.
    pending_direction: Direction,
    score: u32,
    run_state: RunState,
    rng: SimpleRng,
    sound_enabled: bool,
    last_round: Option<RoundSummary>,
    /// Monotonic round counter (game overs and wins).
    rounds_played: u32,
    /// Ticks advanced in the current round.
    ticks: u64,
    events: ArrayVec<GameEvent, EVENT_QUEUE_LEN>,
}

impl GameEngine {
    /// Create an engine and initialize the first round.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            snake: Snake::new(config.start, config.width, config.height),
            food: None,
            direction: config.initial_direction,
            pending_direction: config.initial_direction,
            score: 0,
            run_state: RunState::Idle,
            rng: SimpleRng::new(config.seed),
            sound_enabled: config.sound_enabled,
            last_round: None,
            rounds_played: 0,
            ticks: 0,
            events: ArrayVec::new(),
            config,
        };
        engine.initialize();
        Ok(engine)
    }

    /// Reset the board for a fresh round.
    ///
    /// The RNG, sound flag, round history and undrained events carry over.
    pub fn initialize(&mut self) {
        self.snake = Snake::new(self.config.start, self.config.width, self.config.height);
        self.direction = self.config.initial_direction;
        self.pending_direction = self.config.initial_direction;
        self.score = 0;
        self.ticks = 0;
        self.run_state = RunState::Idle;
        self.place_food();
    }

    pub fn start(&mut self) {
        if self.run_state != RunState::Running {
            log::debug!("run state {:?} -> running", self.run_state);
            self.run_state = RunState::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            log::debug!("paused at score {}", self.score);
            self.run_state = RunState::Paused;
        }
    }

    /// Pause when running, start otherwise.
    pub fn toggle_run(&mut self) {
        if self.run_state == RunState::Running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Flip the sound flag and return the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Abandon the current round and start a new one.
    pub fn restart(&mut self) {
        self.initialize();
        self.start();
    }

    /// Request a turn for the next tick.
    ///
    /// Ignored unless running, and ignored if it would reverse the direction the
    /// snake is currently travelling. The most recent accepted request wins.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.run_state != RunState::Running || direction.is_opposite(self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Apply a command, returning whether it was accepted.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => command
                .direction()
                .map(|d| self.set_direction(d))
                .unwrap_or(false),
            Command::TogglePause => {
                self.toggle_run();
                true
            }
            Command::ToggleSound => {
                self.toggle_sound();
                true
            }
            Command::Start => {
                let was_running = self.is_running();
                self.start();
                !was_running
            }
            Command::Pause => {
                let was_running = self.is_running();
                self.pause();
                was_running
            }
            Command::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.run_state != RunState::Running {
            return TickOutcome::Idle;
        }

        self.direction = self.pending_direction;
        self.ticks += 1;

        // Collision checks use the prospective head before the body changes.
        let head = self.snake.head().step(self.direction);
        if !self.snake.board().in_bounds(head) {
            log::debug!("wall collision at ({}, {})", head.x, head.y);
            self.finish_round(false);
            return TickOutcome::GameOver;
        }
        if self.snake.contains(head) {
            log::debug!("self collision at ({}, {})", head.x, head.y);
            self.finish_round(false);
            return TickOutcome::GameOver;
        }

        let pushed = self.snake.push_head(head);
        debug_assert!(pushed, "head cell was checked free");

        // Growth and tail trim are mutually exclusive.
        if self.food == Some(head) {
            self.score = self.score.saturating_add(self.config.score_per_food);
            self.push_event(GameEvent::FoodEaten);
            if !self.place_food() {
                self.finish_round(true);
                return TickOutcome::Won;
            }
            return TickOutcome::Ate;
        }

        self.snake.pop_tail();
        TickOutcome::Moved
    }

    /// Put food on a random free cell. Returns false when the board is full.
    pub fn place_food(&mut self) -> bool {
        self.food = place_food(self.snake.board(), &mut self.rng);
        self.food.is_some()
    }

    /// Move the food to a specific cell (scenario setup).
    ///
    /// Rejected if the cell is off the board or under the snake.
    pub fn set_food(&mut self, cell: Cell) -> bool {
        if !self.snake.board().is_free(cell) {
            return false;
        }
        self.food = Some(cell);
        true
    }

    /// Replace the snake body and heading (scenario setup).
    ///
    /// Rejected if the body is empty, leaves the board or overlaps itself.
    /// Food under the new body is re-placed.
    pub fn set_snake(&mut self, cells: &[Cell], direction: Direction) -> bool {
        let Some(snake) = Snake::from_cells(cells, self.config.width, self.config.height) else {
            return false;
        };
        self.snake = snake;
        self.direction = direction;
        self.pending_direction = direction;
        if self.food.map_or(true, |f| self.snake.contains(f)) {
            self.place_food();
        }
        true
    }

    /// Drain queued events, oldest first.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_QUEUE_LEN> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    fn finish_round(&mut self, won: bool) {
        let summary = RoundSummary {
            score: self.score,
            length: self.snake.len() as u32,
            won,
        };

        if won {
            self.run_state = RunState::Won;
            self.push_event(GameEvent::BoardFull {
                final_score: self.score,
            });
            log::info!("board full, score {}", self.score);
        } else {
            self.run_state = RunState::GameOver;
            self.push_event(GameEvent::GameOver {
                final_score: self.score,
            });
            log::info!(
                "game over, score {} length {}",
                self.score,
                self.snake.len()
            );
        }

        self.last_round = Some(summary);
        self.rounds_played = self.rounds_played.wrapping_add(1);

        self.initialize();
        if self.config.auto_restart {
            self.start();
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn last_round(&self) -> Option<RoundSummary> {
        self.last_round
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.config.width;
        out.height = self.config.height;
        out.snake.clear();
        out.snake.extend(self.snake.cells());
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.run_state = self.run_state;
        out.sound_enabled = self.sound_enabled;
        out.last_round = self.last_round;
        out.rounds_played = self.rounds_played;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig::with_seed(12345)).unwrap()
    }

    fn running() -> GameEngine {
        let mut e = engine();
        e.start();
        e
    }

    #[test]
    fn test_new_engine() {
        let e = engine();
        assert_eq!(e.run_state(), RunState::Idle);
        assert_eq!(e.head(), Cell::new(10, 10));
        assert_eq!(e.snake().len(), 1);
        assert_eq!(e.direction(), Direction::Right);
        assert_eq!(e.score(), 0);
        assert!(e.food().is_some());
        assert_ne!(e.food(), Some(e.head()));
        assert!(e.last_round().is_none());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig::with_board(5, 5, Cell::new(7, 7));
        assert!(GameEngine::new(config).is_err());
    }

    #[test]
    fn test_tick_does_nothing_when_idle() {
        let mut e = engine();
        assert_eq!(e.tick(), TickOutcome::Idle);
        assert_eq!(e.head(), Cell::new(10, 10));
        assert_eq!(e.ticks(), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut e = engine();
        e.start();
        e.start();
        assert_eq!(e.run_state(), RunState::Running);
    }

    #[test]
    fn test_pause_only_from_running() {
        let mut e = engine();
        e.pause();
        assert_eq!(e.run_state(), RunState::Idle);

        e.start();
        e.pause();
        assert_eq!(e.run_state(), RunState::Paused);
        assert_eq!(e.tick(), TickOutcome::Idle);

        e.toggle_run();
        assert_eq!(e.run_state(), RunState::Running);
        e.toggle_run();
        assert_eq!(e.run_state(), RunState::Paused);
    }

    #[test]
    fn test_tick_moves_head() {
        let mut e = running();
        e.set_food(Cell::new(0, 0));
        assert_eq!(e.tick(), TickOutcome::Moved);
        assert_eq!(e.head(), Cell::new(11, 10));
        assert_eq!(e.snake().len(), 1);
        assert_eq!(e.ticks(), 1);
    }

    #[test]
    fn test_set_direction_ignored_when_not_running() {
        let mut e = engine();
        assert!(!e.set_direction(Direction::Up));
        assert_eq!(e.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_reverse_is_ignored() {
        let mut e = running();
        e.set_food(Cell::new(0, 0));
        assert!(!e.set_direction(Direction::Left));
        e.tick();
        assert_eq!(e.direction(), Direction::Right);
    }

    #[test]
    fn test_latest_turn_wins() {
        let mut e = running();
        e.set_food(Cell::new(0, 0));
        assert!(e.set_direction(Direction::Up));
        assert!(e.set_direction(Direction::Down));
        e.tick();
        assert_eq!(e.direction(), Direction::Down);
        assert_eq!(e.head(), Cell::new(10, 11));
    }

    #[test]
    fn test_quick_double_turn_cannot_reverse() {
        // Up is buffered, but Left is still the reverse of the committed Right.
        let mut e = running();
        e.set_food(Cell::new(0, 0));
        assert!(e.set_direction(Direction::Up));
        assert!(!e.set_direction(Direction::Left));
        e.tick();
        assert_eq!(e.head(), Cell::new(10, 9));
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut e = running();
        assert!(e.set_food(Cell::new(11, 10)));
        assert_eq!(e.tick(), TickOutcome::Ate);
        assert_eq!(e.snake().len(), 2);
        assert_eq!(e.score(), 10);
        assert_eq!(e.take_events().as_slice(), &[GameEvent::FoodEaten]);
        let food = e.food().unwrap();
        assert!(!e.snake().contains(food));
    }

    #[test]
    fn test_wall_collision_resets_to_idle() {
        let mut e = running();
        assert!(e.set_snake(&[Cell::new(19, 5)], Direction::Right));
        e.set_food(Cell::new(0, 0));
        assert_eq!(e.tick(), TickOutcome::GameOver);
        assert_eq!(e.run_state(), RunState::Idle);
        assert_eq!(e.head(), Cell::new(10, 10));
        assert_eq!(
            e.take_events().as_slice(),
            &[GameEvent::GameOver { final_score: 0 }]
        );
        assert_eq!(e.rounds_played(), 1);
    }

    #[test]
    fn test_game_over_records_last_round() {
        let mut e = running();
        e.set_food(Cell::new(11, 10));
        e.tick();
        e.set_snake(&[Cell::new(19, 0), Cell::new(18, 0)], Direction::Right);
        e.set_food(Cell::new(0, 19));
        e.tick();
        assert_eq!(
            e.last_round(),
            Some(RoundSummary {
                score: 10,
                length: 2,
                won: false
            })
        );
        assert_eq!(e.score(), 0);
    }

    #[test]
    fn test_auto_restart_keeps_running() {
        let config = GameConfig {
            auto_restart: true,
            ..GameConfig::with_seed(3)
        };
        let mut e = GameEngine::new(config).unwrap();
        e.start();
        e.set_snake(&[Cell::new(0, 0)], Direction::Up);
        assert_eq!(e.tick(), TickOutcome::GameOver);
        assert_eq!(e.run_state(), RunState::Running);
        assert_eq!(e.head(), Cell::new(10, 10));
    }

    #[test]
    fn test_board_full_is_a_win() {
        let config = GameConfig::with_board(2, 1, Cell::new(0, 0));
        let mut e = GameEngine::new(config).unwrap();
        assert_eq!(e.food(), Some(Cell::new(1, 0)));
        e.start();
        assert_eq!(e.tick(), TickOutcome::Won);
        assert_eq!(
            e.take_events().as_slice(),
            &[
                GameEvent::FoodEaten,
                GameEvent::BoardFull { final_score: 10 }
            ]
        );
        assert_eq!(
            e.last_round(),
            Some(RoundSummary {
                score: 10,
                length: 2,
                won: true
            })
        );
        assert_eq!(e.run_state(), RunState::Idle);
    }

    #[test]
    fn test_toggle_sound() {
        let mut e = engine();
        assert!(e.sound_enabled());
        assert!(!e.toggle_sound());
        assert!(e.apply_command(Command::ToggleSound));
        assert!(e.sound_enabled());
    }

    #[test]
    fn test_restart_starts_fresh_round() {
        let mut e = running();
        e.set_food(Cell::new(11, 10));
        e.tick();
        assert!(e.apply_command(Command::Restart));
        assert_eq!(e.score(), 0);
        assert_eq!(e.snake().len(), 1);
        assert!(e.is_running());
        assert_eq!(e.rounds_played(), 0);
    }

    #[test]
    fn test_apply_command_moves() {
        let mut e = running();
        assert!(e.apply_command(Command::MoveUp));
        assert!(!e.apply_command(Command::MoveLeft));
        assert!(!e.apply_command(Command::Start));
        assert!(e.apply_command(Command::Pause));
        assert!(!e.apply_command(Command::MoveDown));
    }

    #[test]
    fn test_set_snake_moves_covered_food() {
        let mut e = engine();
        let food = e.food().unwrap();
        let other = if food.x > 0 {
            Cell::new(food.x - 1, food.y)
        } else {
            Cell::new(food.x + 1, food.y)
        };
        assert!(e.set_snake(&[food, other], Direction::Up));
        assert!(!e.snake().contains(e.food().unwrap()));
    }

    #[test]
    fn test_set_food_rejects_snake_and_walls() {
        let mut e = engine();
        assert!(!e.set_food(Cell::new(10, 10)));
        assert!(!e.set_food(Cell::new(20, 0)));
        assert!(e.set_food(Cell::new(15, 15)));
    }

    #[test]
    fn test_event_queue_drops_oldest_on_overflow() {
        let mut e = engine();
        for _ in 0..EVENT_QUEUE_LEN {
            e.push_event(GameEvent::FoodEaten);
        }
        e.push_event(GameEvent::GameOver { final_score: 1 });
        let events = e.take_events();
        assert_eq!(events.len(), EVENT_QUEUE_LEN);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { final_score: 1 }));
        assert!(e.take_events().is_empty());
    }

    #[test]
    fn test_snapshot_mirrors_engine() {
        let mut e = running();
        e.set_food(Cell::new(11, 10));
        e.tick();
        let snap = e.snapshot();
        assert_eq!(snap.snake, vec![Cell::new(11, 10), Cell::new(10, 10)]);
        assert_eq!(snap.score, 10);
        assert_eq!(snap.run_state, RunState::Running);
        assert_eq!(snap.width, 20);
        assert_eq!(snap.food, e.food());
        assert_eq!(snap.head(), Some(Cell::new(11, 10)));
    }
}
