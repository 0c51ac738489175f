//! Terminal drawing of the board and reserves.

use crossterm::style::Stylize;
use tak_core::{Board, Color, GameState, Pawn, PieceKind};

/// Visible columns per cell
const CELL_WIDTH: usize = 11;

fn symbol(pawn: &Pawn) -> char {
    match pawn.kind {
        PieceKind::Road => '|',
        PieceKind::Wall => '-',
        PieceKind::Capstone => '>',
    }
}

fn paint(pawn: &Pawn, colorize: bool) -> String {
    let c = symbol(pawn);
    if !colorize {
        return c.to_string();
    }
    match pawn.owner {
        Color::First => c.red().to_string(),
        Color::Second => c.blue().to_string(),
    }
}

/// Draw the board, one row of cells per line, stacks listed bottom to top
pub fn render_board(board: &Board, colorize: bool) -> String {
    let size = board.size();
    let rule = format!("   +{}\n", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(size));

    let mut out = String::new();
    out.push_str("    ");
    for col in 0..size {
        out.push_str(&format!("{:<width$}", col, width = CELL_WIDTH + 1));
    }
    out.push('\n');
    out.push_str(&rule);

    for (pos, stack) in board.iter() {
        if pos.col == 0 {
            out.push_str(&format!("{:>2} |", pos.row));
        }
        let cell: String = stack.pawns().iter().map(|p| paint(p, colorize)).collect();
        out.push_str(&cell);
        out.push_str(&" ".repeat(CELL_WIDTH.saturating_sub(stack.len())));
        out.push('|');
        if pos.col as usize == size - 1 {
            out.push('\n');
            out.push_str(&rule);
        }
    }

    out
}

/// One line per player with their remaining pieces
pub fn render_inventory(state: &GameState) -> String {
    Color::ALL
        .iter()
        .map(|&color| {
            let inv = state.inventory(color);
            format!(
                "{} has {} capstones and {} wall / road pieces\n",
                color, inv.capstones_remaining, inv.road_or_wall_remaining
            )
        })
        .collect()
}
