use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player may see of one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// `None` while the cell is hidden and the game is still running
    pub mine: Option<bool>,
    pub revealed: bool,
    pub flagged: bool,
    pub adjacent_mines: u8,
    pub tile: Tile,
}

/// Read-only copy of a session, taken after each intent by the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub mines_left: isize,
    pub elapsed_secs: u32,
    pub game_over: bool,
    pub won: bool,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        let state = session.state();
        let triggered = session.triggered_mine();
        let mut cells = Array2::default(board.size().to_nd_index());

        for (pos, cell) in board.iter() {
            cells[pos.to_nd_index()] = CellView {
                mine: (cell.is_revealed() || state.is_finished()).then_some(cell.is_mine()),
                revealed: cell.is_revealed(),
                flagged: cell.is_flagged(),
                adjacent_mines: cell.adjacent_mines(),
                tile: tile_for(cell, state, triggered == Some(pos)),
            };
        }

        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            mines_left: session.mines_left(),
            elapsed_secs: session.elapsed_secs(),
            game_over: state.is_finished(),
            won: matches!(state, SessionState::Won),
            triggered_mine: triggered,
            cells,
        }
    }

    pub fn cell(&self, pos: Coord2) -> Option<&CellView> {
        self.cells.get(pos.to_nd_index())
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &CellView>> {
        self.cells.rows().into_iter().map(|row| row.into_iter())
    }
}

fn tile_for(cell: Cell, state: SessionState, triggered: bool) -> Tile {
    let lost = matches!(state, SessionState::Lost);
    match (cell.is_flagged(), cell.is_mine(), cell.is_revealed()) {
        (true, false, _) if lost => Tile::WrongFlag,
        (true, _, _) => Tile::Flagged,
        (false, true, true) if triggered => Tile::TriggeredMine,
        (false, true, true) => Tile::Mine,
        (false, false, true) => Tile::Open(cell.adjacent_mines()),
        (false, _, false) => Tile::Hidden,
    }
}

impl GameSession {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }
}
