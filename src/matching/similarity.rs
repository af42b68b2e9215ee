//! Character-level similarity metrics used to rank search results.
//!
//! Both metrics work on Unicode scalar values and keep a single DP row,
//! sized by the shorter input.

/// Length of the longest common subsequence of `a` and `b`.
///
/// Bigger is better. `lcs_length(a, a) == a.chars().count()`.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let (long, short) = by_length(a, b);
    if short.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; short.len() + 1];

    for &cl in &long {
        // value of row[j] from the previous outer iteration
        let mut diagonal = 0;
        for (j, &cs) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if cl == cs {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Levenshtein distance between `a` and `b`.
///
/// Counts single-character insertions, deletions and substitutions.
/// Smaller is better, zero only for equal strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (long, short) = by_length(a, b);
    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &cl) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &cs) in short.iter().enumerate() {
            let cost = if cl == cs { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Split into (longer, shorter) char vectors so the DP row stays small.
fn by_length(a: &str, b: &str) -> (Vec<char>, Vec<char>) {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() >= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapidfuzz::distance::{lcs_seq, levenshtein};

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "doom",
        "doom(2016)",
        "doometernal",
        "halflife2",
        "halflife",
        "portal2",
        "kitten",
        "sitting",
        "thewitcher3wildhunt",
        "witcher3",
        "pokémon",
        "aaaa",
    ];

    #[test]
    fn test_lcs_known_values() {
        assert_eq!(lcs_length("doom", "doometernal"), 4);
        assert_eq!(lcs_length("doom", "doom(2016)"), 4);
        assert_eq!(lcs_length("halflife2", "halflife2"), 9);
        assert_eq!(lcs_length("halflife2", "halflife"), 8);
        assert_eq!(lcs_length("xyz", "xyzgame"), 3);
        assert_eq!(lcs_length("abc", "def"), 0);
        assert_eq!(lcs_length("", "anything"), 0);
    }

    #[test]
    fn test_lcs_is_not_contiguous() {
        assert_eq!(lcs_length("ace", "abcde"), 3);
        assert_eq!(lcs_length("gta5", "grandtheftauto5"), 4);
    }

    #[test]
    fn test_edit_distance_known_values() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("doom", "doom(2016)"), 6);
        assert_eq!(edit_distance("doom", "doometernal"), 7);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_edit_distance_zero_only_when_equal() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(edit_distance(a, b) == 0, a == b, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_metrics_are_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(lcs_length(a, b), lcs_length(b, a), "lcs {a:?} {b:?}");
                assert_eq!(edit_distance(a, b), edit_distance(b, a), "ed {a:?} {b:?}");
            }
        }
    }

    #[test]
    fn test_lcs_of_self_is_length() {
        for a in SAMPLES {
            assert_eq!(lcs_length(a, a), a.chars().count());
        }
    }

    #[test]
    fn test_matches_rapidfuzz() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(
                    lcs_length(a, b),
                    lcs_seq::similarity(a.chars(), b.chars()),
                    "lcs {a:?} {b:?}"
                );
                assert_eq!(
                    edit_distance(a, b),
                    levenshtein::distance(a.chars(), b.chars()),
                    "levenshtein {a:?} {b:?}"
                );
            }
        }
    }
}
