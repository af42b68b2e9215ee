use serde::{Deserialize, Serialize};

/// GOG store rating for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GogResult {
    pub name: String,
    pub url: String,
    /// Star rating out of 5, absent when too few users rated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl GogResult {
    pub fn new(name: impl Into<String>, url: impl Into<String>, rating_text: &str) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            score: parse_rating(rating_text),
        }
    }

    /// Score scaled to 0-100
    pub fn score_out_of_100(&self) -> Option<f64> {
        self.score.map(|s| s * 20.0)
    }
}

/// Parse a product-card rating such as `"4.5/5"`
pub fn parse_rating(text: &str) -> Option<f64> {
    let stars = text.split('/').next()?.trim();
    stars.parse::<f64>().ok().filter(|s| s.is_finite())
}
