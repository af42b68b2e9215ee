use serde::{Deserialize, Serialize};

/// Steam user review summary for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamResult {
    pub name: String,
    pub url: String,
    /// % positive over the recent window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_score: Option<u8>,
    /// % positive over all time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_time_score: Option<u8>,
}

impl SteamResult {
    /// Build from the review summary rows of a store page, in page order.
    ///
    /// Each row is the row's tooltip text, or `None` when the row carries
    /// no tooltip. A released game with a single row only has all-time
    /// reviews, which then also count as recent.
    pub fn from_review_rows(name: impl Into<String>, url: impl Into<String>, rows: &[Option<&str>]) -> Self {
        let percent = |row: Option<&Option<&str>>| row.copied().flatten().and_then(parse_review_percent);

        let (recent_score, all_time_score) = match rows.len() {
            0 => (None, None),
            1 => {
                let only = percent(rows.first());
                (only, only)
            }
            _ => (percent(rows.first()), percent(rows.get(1))),
        };

        Self {
            name: name.into(),
            url: url.into(),
            recent_score,
            all_time_score,
        }
    }
}

/// Extract the leading percentage of a review tooltip,
/// e.g. `"94% of the 12,345 user reviews..."` gives 94.
pub fn parse_review_percent(tooltip: &str) -> Option<u8> {
    let digits: String = tooltip
        .chars()
        .take(3)
        .filter(|c| c.is_ascii_digit())
        .collect();

    digits.parse::<u8>().ok().filter(|&p| p <= 100)
}
