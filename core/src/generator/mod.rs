use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    /// Builds a board with exactly `config.mines` mines, or fails if the config is invalid.
    fn generate(self, config: GameConfig) -> Result<Board>;
}
