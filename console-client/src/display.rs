use common::games::tictactoe::Board;

const ROW_SEPARATOR: &str = "-----------";

pub fn render_board(board: &Board) -> String {
    let cells = board.cells();
    let mut output = String::new();
    for row in 0..3 {
        output.push_str(&format!(
            " {} | {} | {} \n",
            cells[row * 3].to_char(),
            cells[row * 3 + 1].to_char(),
            cells[row * 3 + 2].to_char()
        ));
        if row < 2 {
            output.push_str(ROW_SEPARATOR);
            output.push('\n');
        }
    }
    output
}

pub fn print_board(board: &Board) {
    print!("{}", render_board(board));
}

// The 1-9 reference grid shown once at startup.
pub fn print_position_reference() {
    for row in 0..3 {
        println!(" {} | {} | {} ", row * 3 + 1, row * 3 + 2, row * 3 + 3);
        if row < 2 {
            println!("{}", ROW_SEPARATOR);
        }
    }
}
