use anyhow::{Context, Result, bail};
use mineclear_core::{CellCount, Coord, Coord2, GameConfig};

/// A line of player input, already mapped to a session intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    /// `None` keeps the current board settings
    NewGame(Option<GameConfig>),
    Tick,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  r ROW COL            reveal a cell
  f ROW COL            toggle a flag
  n [ROWS COLS MINES]  start a new game
  t                    advance the timer by one second
  ?                    show this help
  q                    quit";

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb, args.as_slice()) {
            ("r" | "reveal", [row, col]) => Self::Reveal(parse_pos(row, col)?),
            ("f" | "flag", [row, col]) => Self::Flag(parse_pos(row, col)?),
            ("n" | "new", []) => Self::NewGame(None),
            ("n" | "new", [rows, cols, mines]) => {
                let size = parse_pos(rows, cols)?;
                let mines: CellCount = mines
                    .parse()
                    .with_context(|| format!("invalid mine count {mines:?}"))?;
                Self::NewGame(Some(GameConfig::new(size, mines)?))
            }
            ("t" | "tick", []) => Self::Tick,
            ("?" | "h" | "help", _) => Self::Help,
            ("q" | "quit", _) => Self::Quit,
            _ => bail!("unrecognized command {line:?}, type ? for help"),
        };
        Ok(Some(command))
    }
}

fn parse_pos(row: &str, col: &str) -> Result<Coord2> {
    let row: Coord = row.parse().with_context(|| format!("invalid row {row:?}"))?;
    let col: Coord = col.parse().with_context(|| format!("invalid column {col:?}"))?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_intents() {
        assert_eq!(Command::parse("r 3 4").unwrap(), Some(Command::Reveal((3, 4))));
        assert_eq!(Command::parse("  flag 0 8 ").unwrap(), Some(Command::Flag((0, 8))));
        assert_eq!(Command::parse("t").unwrap(), Some(Command::Tick));
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn new_game_with_and_without_config() {
        assert_eq!(Command::parse("n").unwrap(), Some(Command::NewGame(None)));
        assert_eq!(
            Command::parse("n 16 16 40").unwrap(),
            Some(Command::NewGame(Some(GameConfig::new((16, 16), 40).unwrap())))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse("r 1").is_err());
        assert!(Command::parse("r -1 2").is_err());
        assert!(Command::parse("n 2 2 5").is_err());
        assert!(Command::parse("n 0 4 0").is_err());
        assert!(Command::parse("dig 1 1").is_err());
    }
}
