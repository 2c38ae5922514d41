use common::games::SessionRng;
use common::games::tictactoe::{
    GameState, GameStatus, Mark, calculate_move, check_win_with_line,
};
use common::log;
use std::io::BufRead;
use std::time::Duration;

use crate::display;
use crate::input;

// Plays one game to completion and reports the result. The human is X and
// opens; the computer answers as O until the status turns terminal.
pub fn run_game(
    reader: &mut impl BufRead,
    rng: &mut SessionRng,
    computer_delay: Duration,
) -> Result<GameStatus, Box<dyn std::error::Error>> {
    let mut state = GameState::new();

    loop {
        display::print_board(&state.board);

        let index = if state.current_mark == Mark::X {
            input::read_human_move(reader, &state.board)?
        } else {
            println!("\nComputer is thinking...");
            if !computer_delay.is_zero() {
                std::thread::sleep(computer_delay);
            }
            let index = calculate_move(&state.board, rng)?;
            println!("Computer picked position {}", index + 1);
            index
        };

        state.place_mark(index)?;

        if state.status.is_terminal() {
            display::print_board(&state.board);
            announce_result(&state);
            return Ok(state.status);
        }
    }
}

fn announce_result(state: &GameState) {
    match state.status {
        GameStatus::XWon | GameStatus::OWon => {
            let who = if state.status == GameStatus::XWon {
                "You"
            } else {
                "Computer"
            };
            if let Some(line) = check_win_with_line(&state.board) {
                println!(
                    "\n{} won! (winning line: {}, {}, {})",
                    who,
                    line.cells[0] + 1,
                    line.cells[1] + 1,
                    line.cells[2] + 1
                );
            } else {
                println!("\n{} won!", who);
            }
        }
        GameStatus::Draw => println!("\nGame ended in a draw!"),
        GameStatus::InProgress => {}
    }
    log!("Game finished: {:?}", state.status);
}
