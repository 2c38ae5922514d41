use common::games::tictactoe::{Board, CELL_COUNT};
use std::io::{self, BufRead, Write};

// Prompts until the reader yields a 1-9 selection of an empty cell.
// Malformed input re-prompts; a closed stream is an environmental failure
// and surfaces as an error.
pub fn read_human_move(reader: &mut impl BufRead, board: &Board) -> io::Result<usize> {
    loop {
        print!("Select position (1-9): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }

        let Ok(selection) = line.trim().parse::<usize>() else {
            println!("Please input a number from 1 to 9.");
            continue;
        };

        let Some(index) = selection.checked_sub(1).filter(|index| *index < CELL_COUNT) else {
            println!("Invalid selection. Try again.");
            continue;
        };

        match board.is_empty(index) {
            Ok(true) => return Ok(index),
            _ => {
                println!("Invalid selection. Try again.");
            }
        }
    }
}

// Anything but a case-insensitive "y" (including a closed stream) declines.
pub fn confirm_replay(reader: &mut impl BufRead) -> io::Result<bool> {
    print!("\nPlay another game? (y/n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
