mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, BoardError, CELL_COUNT};
pub use bot_controller::{BotError, calculate_move};
pub use game_state::{GameState, MoveError};
pub use types::{GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
