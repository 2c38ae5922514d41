use super::board::{Board, BoardError};
use super::types::{GameStatus, Mark};
use super::win_detector::evaluate;
use crate::games::session_rng::SessionRng;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

#[derive(Debug)]
pub enum BotError {
    NoMoveAvailable,
    Board(BoardError),
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::NoMoveAvailable => write!(f, "No empty cell left to play"),
            BotError::Board(e) => write!(f, "Board error during move search: {}", e),
        }
    }
}

impl std::error::Error for BotError {}

impl From<BoardError> for BotError {
    fn from(e: BoardError) -> Self {
        BotError::Board(e)
    }
}

// Fixed priority: win, block, center, random corner, random remainder.
pub fn calculate_move(board: &Board, rng: &mut SessionRng) -> Result<usize, BotError> {
    let available = board.empty_cells();
    if available.is_empty() {
        return Err(BotError::NoMoveAvailable);
    }

    if let Some(index) = find_completing_move(board, Mark::O)? {
        return Ok(index);
    }

    if let Some(index) = find_completing_move(board, Mark::X)? {
        return Ok(index);
    }

    if board.is_empty(CENTER)? {
        return Ok(CENTER);
    }

    let open_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|corner| available.contains(corner))
        .collect();
    if let Some(index) = rng.choose(&open_corners) {
        return Ok(index);
    }

    rng.choose(&available).ok_or(BotError::NoMoveAvailable)
}

// Scans empty cells in ascending order, probing each on a scratch copy so
// the caller's board stays untouched. Every probe is cleared before the
// next candidate is tested.
fn find_completing_move(board: &Board, mark: Mark) -> Result<Option<usize>, BoardError> {
    let goal = match mark {
        Mark::X => GameStatus::XWon,
        Mark::O => GameStatus::OWon,
        Mark::Empty => return Ok(None),
    };

    let mut probe = *board;
    for index in board.empty_cells() {
        probe.place(index, mark)?;
        let status = evaluate(&probe);
        probe.clear(index)?;

        if status == goal {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Empty as E, O, X};

    fn rng() -> SessionRng {
        SessionRng::new(12345)
    }

    #[test]
    fn test_takes_immediate_win() {
        // O completes 3,4,5 at index 5; X also threatens 0,1,2 at index 2,
        // but winning outranks blocking.
        let board = Board::from_marks([X, X, E, O, O, E, E, E, E]);
        assert_eq!(calculate_move(&board, &mut rng()).unwrap(), 5);
    }

    #[test]
    fn test_blocks_opponent_win() {
        // X threatens 2,5,8 at index 8; O has no completable line.
        let board = Board::from_marks([E, E, X, O, O, X, E, E, E]);
        assert_eq!(calculate_move(&board, &mut rng()).unwrap(), 8);
    }

    #[test]
    fn test_prefers_center_without_threats() {
        let board = Board::from_marks([X, E, E, E, E, E, E, E, E]);
        assert_eq!(calculate_move(&board, &mut rng()).unwrap(), 4);
    }

    #[test]
    fn test_corner_choice_is_drawn_from_open_corners() {
        // Center taken, no threats: the move must land on an empty corner,
        // whatever the seed.
        let board = Board::from_marks([X, E, E, E, O, E, E, E, E]);
        for seed in 0..32 {
            let mut rng = SessionRng::new(seed);
            let index = calculate_move(&board, &mut rng).unwrap();
            assert!([2, 6, 8].contains(&index), "unexpected move {}", index);
        }
    }

    #[test]
    fn test_fallback_is_drawn_from_remaining_cells() {
        // X _ O          (indices 1 and 7 empty)
        // O X X   center and every corner taken, no completable line
        // X _ O   for either side, so only the edge fallback remains.
        let board = Board::from_marks([X, E, O, O, X, X, X, E, O]);
        assert_eq!(evaluate(&board), GameStatus::InProgress);
        for seed in 0..32 {
            let mut rng = SessionRng::new(seed);
            let index = calculate_move(&board, &mut rng).unwrap();
            assert!([1, 7].contains(&index), "unexpected move {}", index);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert!(matches!(
            calculate_move(&board, &mut rng()),
            Err(BotError::NoMoveAvailable)
        ));
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let board = Board::from_marks([X, X, E, O, O, E, E, E, E]);
        let snapshot = board;
        calculate_move(&board, &mut rng()).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_win_search_scans_ascending() {
        // O can complete both 0,1,2 (at 2) and 6,7,8 (at 6); ascending scan
        // settles on index 2.
        let board = Board::from_marks([O, O, E, X, X, E, E, O, O]);
        assert_eq!(calculate_move(&board, &mut rng()).unwrap(), 2);
    }
}
