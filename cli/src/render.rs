use std::io::{self, Write};

use twenty48_core::Grid;

const TITLE: &str = "2048 - Join the numbers and get to the 2048 tile!";
const LEGEND: &str = "w: Up \t\ta: Left \ns: Down \td: Right \nr: Restart \tq: Quit";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Board rows, each cell right-aligned in four columns and `-` for empty.
pub fn board(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for &tile in row.iter() {
            let cell = match tile {
                0 => format!("{:>4}", "-"),
                tile => format!("{tile:>4}"),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

const fn prompt_text(game_over: bool) -> &'static str {
    if game_over {
        "Restart or quit game (r/q): "
    } else {
        "Enter a key: "
    }
}

/// Whole screen: title, board, key legend and the prompt.
pub fn screen(grid: &Grid, game_over: bool) -> String {
    format!(
        "{TITLE}\n\n{}\n{LEGEND}\n\n{}",
        board(grid),
        prompt_text(game_over)
    )
}

pub fn draw(out: &mut impl Write, grid: &Grid, game_over: bool) -> io::Result<()> {
    write!(out, "{CLEAR_SCREEN}{}", screen(grid, game_over))?;
    out.flush()
}

/// Asks again without redrawing, for input that changed nothing.
pub fn prompt(out: &mut impl Write, game_over: bool) -> io::Result<()> {
    write!(out, "{}", prompt_text(game_over))?;
    out.flush()
}
