use core::fmt;
use mineclear_core::{Snapshot, Tile};

fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Hidden => '#',
        Tile::Flagged => 'F',
        Tile::Open(0) => '.',
        Tile::Open(count) => char::from(b'0' + count),
        Tile::Mine => '*',
        Tile::TriggeredMine => 'X',
        Tile::WrongFlag => '!',
    }
}

/// Board with column indices on top and row indices on the left, followed by a status line.
pub struct BoardView<'a>(pub &'a Snapshot);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let (_, cols) = snapshot.size;

        f.write_str("    ")?;
        for col in 0..cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in snapshot.rows().enumerate() {
            write!(f, "{:>3} ", row)?;
            for cell in cells {
                write!(f, "{:>3}", glyph(cell.tile))?;
            }
            writeln!(f)?;
        }

        f.write_str(&status(snapshot))
    }
}

fn status(snapshot: &Snapshot) -> String {
    let outcome = match (snapshot.game_over, snapshot.won) {
        (false, _) => "playing",
        (true, true) => "you won!",
        (true, false) => "boom, game over",
    };
    format!(
        "mines left: {}  time: {}s  {}",
        snapshot.mines_left, snapshot.elapsed_secs, outcome
    )
}
