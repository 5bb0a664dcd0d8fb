//! Scoring module - line clear points
//!
//! One lock awards `LINE_CLEAR_BASE_SCORE * 2^(rows - 1)`: the bonus doubles
//! with every additional row cleared by the same piece. Nothing else scores.

use crate::types::LINE_CLEAR_BASE_SCORE;

/// Points for clearing `rows` rows with a single lock.
///
/// ```
/// use blockfall_core::scoring::line_clear_score;
///
/// assert_eq!(line_clear_score(0), 0);
/// assert_eq!(line_clear_score(4), 80);
/// ```
pub fn line_clear_score(rows: usize) -> u32 {
    if rows == 0 {
        return 0;
    }
    let shift = (rows - 1).min(31) as u32;
    LINE_CLEAR_BASE_SCORE.saturating_mul(1u32 << shift)
}
