//! Bounded brand value score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScoreError;

/// A score in the inclusive range `[0, 1000]`.
///
/// Scores above [`Score::MAX`] can't be constructed; every caller that accepts a
/// raw integer goes through [`Score::new`] before touching state.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u64", into = "u16")]
pub struct Score(u16);

impl Score {
    pub const MAX: u16 = 1000;
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u64) -> Result<Self, ScoreError> {
        if raw > u64::from(Self::MAX) {
            return Err(ScoreError::OutOfRange {
                score: raw,
                max: Self::MAX,
            });
        }
        Ok(Self(raw as u16))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u64> for Score {
    type Error = ScoreError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Score> for u16 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
