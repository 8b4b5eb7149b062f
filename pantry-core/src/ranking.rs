//! Candidate ranking.
//!
//! The weights below are an unexplained heuristic carried over as-is.

use crate::types::RecipeCandidate;

const USED_WEIGHT: f64 = 3.0;
const MISSED_WEIGHT: f64 = 2.0;
const LIKES_DIVISOR: f64 = 50.0;
const LIKES_CAP: f64 = 10.0;

/// `used*3 - missed*2 + min(likes/50, 10)`.
pub fn score(used: u32, missed: u32, likes: u32) -> f64 {
    f64::from(used) * USED_WEIGHT - f64::from(missed) * MISSED_WEIGHT
        + (f64::from(likes) / LIKES_DIVISOR).min(LIKES_CAP)
}

/// Score a candidate from its reported counts.
pub fn score_candidate(candidate: &RecipeCandidate) -> f64 {
    score(
        candidate.used_ingredient_count,
        candidate.missed_ingredient_count,
        candidate.likes,
    )
}

/// Fill in every candidate's score and sort descending.
///
/// The sort is stable, so equal scores keep their incoming order.
pub fn rank(candidates: &mut [RecipeCandidate]) {
    for candidate in candidates.iter_mut() {
        candidate.score = score_candidate(candidate);
    }
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
