use crate::matching::normalize::normalize_title;
use crate::matching::similarity::{edit_distance, lcs_length};
use crate::matching::MatchOptions;

/// Scores of a candidate relative to the query, both on normalized titles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    /// Longest common subsequence length (bigger is better)
    pub lcs: usize,
    /// Levenshtein distance (smaller is better)
    pub edit_distance: usize,
}

/// Winning candidate with its position in the input and its scores
#[derive(Debug, Clone, Copy)]
pub struct BestMatch<'a, C> {
    pub candidate: &'a C,
    pub index: usize,
    pub score: MatchScore,
}

/// Pick the search result that best matches `query`, using the default floor.
///
/// Candidates are ranked by LCS against the query first and by edit distance
/// second; both are computed on [`normalize_title`] forms. A candidate is
/// only eligible once its LCS is above [`DEFAULT_LCS_FLOOR`]. Among equal
/// scores the earliest candidate wins.
///
/// `name_of` is called once per candidate. Returns `None` for an empty
/// slice or when nothing clears the floor.
///
/// ```
/// use game_score_aggregator::select_best_match;
///
/// let results = ["DOOM Eternal", "DOOM (2016)", "Quake"];
/// let best = select_best_match("Doom", &results, |name| *name);
/// assert_eq!(best, Some(&"DOOM (2016)"));
/// ```
///
/// [`DEFAULT_LCS_FLOOR`]: crate::matching::DEFAULT_LCS_FLOOR
pub fn select_best_match<'a, C, S, F>(query: &str, candidates: &'a [C], name_of: F) -> Option<&'a C>
where
    F: FnMut(&'a C) -> S,
    S: AsRef<str>,
{
    select_best_match_with(query, candidates, name_of, &MatchOptions::default())
}

/// Same as [`select_best_match`] with an explicit floor
pub fn select_best_match_with<'a, C, S, F>(
    query: &str,
    candidates: &'a [C],
    name_of: F,
    options: &MatchOptions,
) -> Option<&'a C>
where
    F: FnMut(&'a C) -> S,
    S: AsRef<str>,
{
    select_best_match_scored(query, candidates, name_of, options).map(|best| best.candidate)
}

/// Run the selection and report the winner's index and scores
pub fn select_best_match_scored<'a, C, S, F>(
    query: &str,
    candidates: &'a [C],
    mut name_of: F,
    options: &MatchOptions,
) -> Option<BestMatch<'a, C>>
where
    F: FnMut(&'a C) -> S,
    S: AsRef<str>,
{
    if candidates.is_empty() {
        return None;
    }

    let query = normalize_title(query);

    let mut best: Option<BestMatch<'a, C>> = None;
    // Only candidates strictly above this are eligible
    let mut best_lcs = options.lcs_floor;

    for (index, candidate) in candidates.iter().enumerate() {
        let name = normalize_title(name_of(candidate).as_ref());
        let lcs = lcs_length(&query, &name);

        tracing::trace!(index, name = %name, lcs, "scoring candidate");

        if lcs > best_lcs {
            best_lcs = lcs;
            best = Some(BestMatch {
                candidate,
                index,
                score: MatchScore {
                    lcs,
                    edit_distance: edit_distance(&query, &name),
                },
            });
        } else if lcs == best_lcs {
            // Tie-break only between eligible candidates
            if let Some(current) = best.as_mut() {
                let distance = edit_distance(&query, &name);
                if distance < current.score.edit_distance {
                    *current = BestMatch {
                        candidate,
                        index,
                        score: MatchScore {
                            lcs,
                            edit_distance: distance,
                        },
                    };
                }
            }
        }
    }

    match &best {
        Some(found) => tracing::debug!(
            query = %query,
            index = found.index,
            lcs = found.score.lcs,
            edit_distance = found.score.edit_distance,
            "best match selected"
        ),
        None => tracing::debug!(
            query = %query,
            candidates = candidates.len(),
            floor = options.lcs_floor,
            "no candidate above floor"
        ),
    }

    best
}

/// Move the best match out of `candidates`, dropping the others
pub fn take_best_match<C, F>(query: &str, candidates: Vec<C>, name_of: F) -> Option<C>
where
    F: for<'c> FnMut(&'c C) -> &'c str,
{
    let index = select_best_match_scored(query, &candidates, name_of, &MatchOptions::default())?.index;
    candidates.into_iter().nth(index)
}
