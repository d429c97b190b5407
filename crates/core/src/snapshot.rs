use crate::types::{
    Cell, Direction, RoundSummary, RunState, BOARD_HEIGHT, BOARD_WIDTH, START_CELL,
};

/// Read-only view of the engine for renderers.
///
/// Callers that render every frame should keep one snapshot around and refill
/// it with [`GameEngine::snapshot_into`](crate::GameEngine::snapshot_into) so
/// the snake buffer is reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Snake cells, head first
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    pub run_state: RunState,
    pub sound_enabled: bool,
    pub last_round: Option<RoundSummary>,
    pub rounds_played: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    /// Nothing changes between ticks in this state.
    pub fn is_static(&self) -> bool {
        self.run_state != RunState::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            snake: vec![START_CELL],
            food: None,
            direction: Direction::Right,
            score: 0,
            run_state: RunState::Idle,
            sound_enabled: true,
            last_round: None,
            rounds_played: 0,
            ticks: 0,
        }
    }
}
