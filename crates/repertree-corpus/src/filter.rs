use repertree_core::Side;

use crate::{CorpusError, EloRange, GameRecord, RepertoireConfig};

/// Accepts games whose players both fall inside their rating bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingFilter {
    white: EloRange,
    black: EloRange,
}

impl RatingFilter {
    pub fn new(white: EloRange, black: EloRange) -> Self {
        RatingFilter { white, black }
    }

    pub fn from_config(config: &RepertoireConfig) -> Self {
        Self::new(config.white_elo, config.black_elo)
    }

    /// Whether the game is played at the wanted level.
    /// A missing or unreadable rating is an error, not a rejection.
    pub fn accepts(&self, game: &GameRecord) -> Result<bool, CorpusError> {
        let white = game.rating(Side::White)?;
        let black = game.rating(Side::Black)?;
        Ok(self.white.contains(white) && self.black.contains(black))
    }
}
