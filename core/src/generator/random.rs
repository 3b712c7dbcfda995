use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform mine placement by rejection sampling, reproducible for a given seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        log::debug!("Generated board seed: {}", seed);
        Self::new(seed)
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let config = GameConfig::new(config.size, config.mines)?;
        let GameConfig {
            size: (rows, cols),
            mines,
        } = config;
        let total_cells = config.total_cells();

        // optimize for full boards
        if mines == total_cells {
            return Board::from_mine_mask(&Array2::from_elem(config.size.to_nd_index(), true));
        }

        if u32::from(mines) * 4 > u32::from(total_cells) * 3 {
            log::warn!(
                "Dense board ({} mines in {} cells), rejection sampling will be slow",
                mines,
                total_cells
            );
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut placed: CellCount = 0;
        while placed < mines {
            let pos: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
            let slot = &mut mine_mask[pos.to_nd_index()];
            if !*slot {
                *slot = true;
                placed += 1;
            }
        }

        let board = Board::from_mine_mask(&mine_mask)?;
        debug_assert_eq!(board.mine_count(), mines);
        Ok(board)
    }
}
