//! Population min-max rescaling of raw scores onto `0..=1000`.
//!
//! Two passes: [`ScoreBounds::of`] reads every raw score to find the range,
//! then [`ScoreBounds::rescale`] maps each score. The map is monotonic
//! non-decreasing, sends the minimum to 0 and the maximum to 1000, and
//! truncates toward zero.

use lendscore_core::constants::{DEGENERATE_FINAL_SCORE, FINAL_SCORE_MAX, FINAL_SCORE_MIN};
use serde::{Deserialize, Serialize};

/// Observed raw-score range of one population.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScoreBounds {
    pub min: f64,
    pub max: f64,
}

impl ScoreBounds {
    /// Range of a population's raw scores. `None` for an empty population.
    ///
    /// NaN scores are ignored.
    pub fn of(raw_scores: &[f64]) -> Option<Self> {
        raw_scores
            .iter()
            .copied()
            .filter(|score| !score.is_nan())
            .fold(None, |bounds: Option<Self>, score| match bounds {
                None => Some(Self { min: score, max: score }),
                Some(b) => Some(Self {
                    min: b.min.min(score),
                    max: b.max.max(score),
                }),
            })
    }

    /// True when the range has zero width and min-max scaling is undefined.
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }

    /// Map a raw score from this population onto `0..=1000`.
    ///
    /// A degenerate range maps every score to
    /// [`DEGENERATE_FINAL_SCORE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lendscore_score::ScoreBounds;
    ///
    /// let bounds = ScoreBounds { min: 200.0, max: 600.0 };
    /// assert_eq!(bounds.rescale(200.0), 0);
    /// assert_eq!(bounds.rescale(400.0), 500);
    /// assert_eq!(bounds.rescale(600.0), 1000);
    /// assert_eq!(bounds.rescale(200.3), 0); // 0.75 truncated
    ///
    /// let single = ScoreBounds { min: 512.0, max: 512.0 };
    /// assert_eq!(single.rescale(512.0), 0);
    /// ```
    pub fn rescale(&self, raw: f64) -> u16 {
        if self.is_degenerate() {
            return DEGENERATE_FINAL_SCORE;
        }

        let span = self.max - self.min;
        let fraction = if span.is_finite() {
            (raw - self.min) / span
        } else {
            // Halve first so a range wider than f64::MAX stays finite.
            (raw / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        };

        let scaled = fraction * f64::from(FINAL_SCORE_MAX);
        if scaled.is_nan() {
            return FINAL_SCORE_MIN;
        }
        scaled.clamp(f64::from(FINAL_SCORE_MIN), f64::from(FINAL_SCORE_MAX)) as u16
    }
}

/// Rescale a whole population of raw scores, keeping order.
///
/// # Examples
///
/// ```
/// use lendscore_score::rescale;
///
/// assert_eq!(rescale(&[10.0, 30.0, 20.0]), vec![0, 1000, 500]);
/// assert_eq!(rescale(&[42.0]), vec![0]);
/// assert!(rescale(&[]).is_empty());
/// ```
pub fn rescale(raw_scores: &[f64]) -> Vec<u16> {
    match ScoreBounds::of(raw_scores) {
        Some(bounds) => raw_scores.iter().map(|raw| bounds.rescale(*raw)).collect(),
        None => Vec::new(),
    }
}
