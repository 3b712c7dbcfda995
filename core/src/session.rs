use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Active,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Active
    }
}

/// One playthrough from new game to game over.
///
/// The caller owns the session and replaces it wholesale to start a new game. Time only advances through
/// [`GameSession::tick`], so the scheduling of ticks is entirely up to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    state: SessionState,
    flagged_count: CellCount,
    elapsed_secs: u32,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        log::debug!(
            "New game: {:?} with {} mines",
            board.size(),
            board.mine_count()
        );
        Self {
            board,
            state: Default::default(),
            flagged_count: 0,
            elapsed_secs: 0,
            triggered_mine: None,
        }
    }

    /// Starts a game on a generated board. Invalid configurations fail here, before any session exists.
    pub fn new_game(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        Ok(Self::new(generator.generate(config)?))
    }

    /// Starts a game on a freshly seeded random board.
    pub fn new_random(config: GameConfig) -> Result<Self> {
        Self::new_game(config, RandomBoardGenerator::from_entropy())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    /// Only meaningful once the game is over.
    pub fn is_won(&self) -> bool {
        matches!(self.state, SessionState::Won)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines not yet accounted for by flags, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, pos: Coord2) -> Option<Cell> {
        self.board.get(pos)
    }

    /// Reveal a cell, treating out-of-bounds and post-game intents as no-ops.
    pub fn reveal_cell(&mut self, pos: Coord2) -> RevealOutcome {
        self.try_reveal(pos).unwrap_or_else(|err| {
            log::debug!("Ignored reveal at {:?}: {}", pos, err);
            RevealOutcome::NoChange
        })
    }

    /// Toggle a flag, treating out-of-bounds and post-game intents as no-ops.
    pub fn toggle_flag(&mut self, pos: Coord2) -> MarkOutcome {
        self.try_toggle_flag(pos).unwrap_or_else(|err| {
            log::debug!("Ignored flag at {:?}: {}", pos, err);
            MarkOutcome::NoChange
        })
    }

    pub fn try_reveal(&mut self, pos: Coord2) -> Result<RevealOutcome> {
        let pos = self.board.validate_coords(pos)?;
        self.check_active()?;

        let cell = self.board[pos];
        if cell.is_flagged() || cell.is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }

        if cell.is_mine() {
            self.triggered_mine = Some(pos);
            self.board.reveal_all();
            self.end_game(false);
            return Ok(RevealOutcome::HitMine);
        }

        let opened = self.board.flood_reveal(pos);
        log::debug!("Reveal at {:?} opened {} cells", pos, opened);

        Ok(if self.board.is_cleared() {
            self.end_game(true);
            RevealOutcome::Won
        } else if opened > 0 {
            RevealOutcome::Revealed
        } else {
            RevealOutcome::NoChange
        })
    }

    pub fn try_toggle_flag(&mut self, pos: Coord2) -> Result<MarkOutcome> {
        let pos = self.board.validate_coords(pos)?;
        self.check_active()?;

        let cell = &mut self.board[pos];
        Ok(match (cell.is_revealed(), cell.is_flagged()) {
            (true, _) => MarkOutcome::NoChange,
            (false, false) => {
                cell.set_flagged(true);
                self.flagged_count += 1;
                MarkOutcome::Flagged
            }
            (false, true) => {
                cell.set_flagged(false);
                self.flagged_count -= 1;
                MarkOutcome::Unflagged
            }
        })
    }

    /// Advance the timer by one second, returning the new elapsed time. Does nothing once the game is over.
    pub fn tick(&mut self) -> u32 {
        if !self.is_game_over() {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
        self.elapsed_secs
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
        log::debug!(
            "Game over ({:?}) after {} seconds",
            self.state,
            self.elapsed_secs
        );
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
