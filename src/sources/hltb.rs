use serde::{Deserialize, Serialize};

/// How Long to Beat completion estimates for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HowLongToBeatResult {
    pub name: String,
    pub url: String,
    pub times: CompletionTimes,
}

/// Completion estimates in hours
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionTimes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_story: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_plus_extra: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completionist: Option<f64>,
}

impl CompletionTimes {
    /// The site reports 0 when it has no data for a category
    pub fn from_raw(main_story: f64, main_plus_extra: f64, completionist: f64) -> Self {
        Self {
            main_story: known_time(main_story),
            main_plus_extra: known_time(main_plus_extra),
            completionist: known_time(completionist),
        }
    }

    /// Parse the three displayed labels, e.g. `"12½ Hours"`
    pub fn from_labels(main_story: &str, main_plus_extra: &str, completionist: &str) -> Self {
        Self {
            main_story: parse_hours(main_story),
            main_plus_extra: parse_hours(main_plus_extra),
            completionist: parse_hours(completionist),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.main_story.is_none() && self.main_plus_extra.is_none() && self.completionist.is_none()
    }
}

fn known_time(hours: f64) -> Option<f64> {
    (hours.is_finite() && hours > 0.0).then_some(hours)
}

/// Parse a displayed duration such as `"12½ Hours"` or `"40 Hours"`.
///
/// Only the leading number is read; `½` counts as `.5`. Labels like
/// `"--"` give `None`.
pub fn parse_hours(label: &str) -> Option<f64> {
    let label = label.trim().replace('½', ".5");
    let end = label
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(label.len());

    label[..end].parse::<f64>().ok().and_then(known_time)
}
