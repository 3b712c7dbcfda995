use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The grid of cells for one game. The mine set is fixed once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a board from a mine mask, precomputing every cell's neighbour count.
    ///
    /// Fails when either dimension is zero or does not fit a [`Coord`].
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size: Coord2 = (
            rows.try_into().map_err(|_| GameError::InvalidBoardShape)?,
            cols.try_into().map_err(|_| GameError::InvalidBoardShape)?,
        );
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            let pos = (row as Coord, col as Coord);
            let adjacent = Neighbors::new(pos, size)
                .filter(|&neighbor| mine_mask[neighbor.to_nd_index()])
                .count() as u8;
            Cell::new(mine_mask[pos.to_nd_index()], adjacent)
        });
        Ok(Self { cells, mine_count })
    }

    /// Builds a board of `size` with mines at exactly the given positions, duplicates collapse.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[pos.to_nd_index()] = true;
        }

        Self::from_mine_mask(&mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.cells)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, pos: Coord2) -> bool {
        let (rows, cols) = self.size();
        pos.0 < rows && pos.1 < cols
    }

    pub fn validate_coords(&self, pos: Coord2) -> Result<Coord2> {
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows(), self.cols())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn get(&self, pos: Coord2) -> Option<Cell> {
        self.contains(pos).then(|| self[pos])
    }

    pub fn neighbors(&self, pos: Coord2) -> Neighbors {
        Neighbors::new(pos, self.size())
    }

    /// All cells with their positions, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// True when every non-mine cell has been revealed. Flags play no part.
    pub fn is_cleared(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine() || cell.is_revealed())
    }

    /// Flood-fill reveal starting at `start`, returning how many cells were newly revealed.
    ///
    /// Out-of-bounds, revealed and flagged cells are skipped. Expansion only continues from cells with no
    /// adjacent mines, and mines are never revealed here; callers handle a mine at `start` first.
    pub fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened: CellCount = 0;
        let mut pending = vec![start];

        while let Some(pos) = pending.pop() {
            let Some(cell) = self.get(pos) else {
                continue;
            };
            if cell.is_revealed() || cell.is_flagged() || cell.is_mine() {
                continue;
            }

            self[pos].set_revealed();
            opened += 1;
            log::trace!("Opened {:?}, adjacent mines: {}", pos, cell.adjacent_mines());

            if cell.adjacent_mines() == 0 {
                pending.extend(
                    self.neighbors(pos)
                        .filter(|&next| self[next].is_hidden_unflagged()),
                );
            }
        }

        opened
    }

    /// Reveals every cell, used for the loss screen.
    pub fn reveal_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_revealed();
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, pos: Coord2) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, pos: Coord2) -> &mut Self::Output {
        &mut self.cells[pos.to_nd_index()]
    }
}
