use super::board::{Board, BoardError};
use super::types::{GameStatus, Mark};
use super::win_detector::evaluate;

#[derive(Debug)]
pub enum MoveError {
    GameOver,
    Board(BoardError),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::Board(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(e: BoardError) -> Self {
        MoveError::Board(e)
    }
}

// One running game. X is always the human and always moves first; the
// status together with the current mark tells whose turn it is, and any
// terminal status carries the final outcome.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.place(index, self.current_mark)?;
        self.last_move = Some(index);
        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
