//! Band classifier: maps a bounded score to one of ten fixed labels.

use hushh_types::Score;
use serde::Serialize;

use crate::error::ProofError;

/// One row of the band table: the inclusive range `[lower, upper]` and its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreBand {
    pub lower: u16,
    pub upper: u16,
    pub label: &'static str,
    /// Range as it appears in statements, e.g. `"800-899"` or `"900+"`.
    pub range: &'static str,
}

impl ScoreBand {
    const fn new(lower: u16, upper: u16, label: &'static str, range: &'static str) -> Self {
        Self {
            lower,
            upper,
            label,
            range,
        }
    }

    pub fn contains(&self, score: u16) -> bool {
        (self.lower..=self.upper).contains(&score)
    }

    /// The statement text recorded on a proof in this band.
    pub fn statement(&self) -> String {
        format!("Brand value score: {} ({})", self.label, self.range)
    }
}

/// The band table, ordered by ascending lower bound.
///
/// Every band covers `[lower, lower + 99]` except the top band, which also
/// includes 1000.
pub static BANDS: [ScoreBand; 10] = [
    ScoreBand::new(0, 99, "Unrated", "0-99"),
    ScoreBand::new(100, 199, "Minimal", "100-199"),
    ScoreBand::new(200, 299, "Very Low", "200-299"),
    ScoreBand::new(300, 399, "Low", "300-399"),
    ScoreBand::new(400, 499, "Below Average", "400-499"),
    ScoreBand::new(500, 599, "Average", "500-599"),
    ScoreBand::new(600, 699, "Above Average", "600-699"),
    ScoreBand::new(700, 799, "Good", "700-799"),
    ScoreBand::new(800, 899, "Very Good", "800-899"),
    ScoreBand::new(900, Score::MAX, "Excellent", "900+"),
];

/// Classify a raw score.
///
/// Scores above 1000 are rejected before any lookup. Otherwise the band with
/// the highest lower bound not exceeding the score wins.
pub fn classify(score: u64) -> Result<&'static ScoreBand, ProofError> {
    let score = Score::new(score).map_err(|_| ProofError::OutOfRange { score })?;
    let value = score.value();
    // BANDS[0].lower is 0, so some band always matches a valid score.
    Ok(BANDS
        .iter()
        .rev()
        .find(|band| band.lower <= value)
        .unwrap_or(&BANDS[0]))
}
