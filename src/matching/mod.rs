pub mod normalize;
pub mod selector;
pub mod similarity;

pub use normalize::normalize_title;
pub use selector::{
    select_best_match, select_best_match_scored, select_best_match_with, take_best_match,
    BestMatch, MatchScore,
};
pub use similarity::{edit_distance, lcs_length};

/// LCS a candidate must exceed to be accepted at all.
///
/// Short common subsequences such as "the" are noise. The value is fixed,
/// not scaled with the query length.
pub const DEFAULT_LCS_FLOOR: usize = 3;

/// Best-match selection options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub lcs_floor: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            lcs_floor: DEFAULT_LCS_FLOOR,
        }
    }
}
