use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sources::{GogResult, HowLongToBeatResult, MetacriticResult, SourceData, SteamResult};

/// Everything known about one requested game, across all sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Title as requested by the user
    pub game: String,

    /// Mean of all available scores on a 0-100 scale, one decimal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hltb: Option<HowLongToBeatResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gog: Option<GogResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metacritic: Option<MetacriticResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam: Option<SteamResult>,

    /// When the sources were queried
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

impl GameRecord {
    /// Empty record for a requested title
    pub fn new(game: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            aggregate_score: None,
            hltb: None,
            gog: None,
            metacritic: None,
            steam: None,
            fetched_at: Utc::now(),
        }
    }

    /// Store a source's data in its slot, replacing what was there
    pub fn merge(&mut self, data: SourceData) {
        match data {
            SourceData::Steam(r) => self.steam = Some(r),
            SourceData::Gog(r) => self.gog = Some(r),
            SourceData::Metacritic(r) => self.metacritic = Some(r),
            SourceData::HowLongToBeat(r) => self.hltb = Some(r),
        }
    }

    /// Recompute `aggregate_score` from the current slots
    pub fn refresh_aggregate(&mut self) {
        self.aggregate_score = self.compute_aggregate();
    }

    /// Average of every score scaled to 0-100, rounded to one decimal.
    ///
    /// GOG stars count x20, Metacritic user score x10, metascore and both
    /// Steam percentages as-is. Completion times never count.
    pub fn compute_aggregate(&self) -> Option<f64> {
        let gog = self.gog.as_ref().and_then(GogResult::score_out_of_100);
        let metascore = self.metacritic.as_ref().and_then(|m| m.metascore).map(f64::from);
        let userscore = self.metacritic.as_ref().and_then(|m| m.userscore).map(|s| s * 10.0);
        let steam_all_time = self.steam.as_ref().and_then(|s| s.all_time_score).map(f64::from);
        let steam_recent = self.steam.as_ref().and_then(|s| s.recent_score).map(f64::from);

        let scores: Vec<f64> = [gog, metascore, userscore, steam_all_time, steam_recent]
            .into_iter()
            .flatten()
            .collect();

        if scores.is_empty() {
            return None;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    }

    /// Whether any source found the game
    pub fn is_empty(&self) -> bool {
        self.hltb.is_none() && self.gog.is_none() && self.metacritic.is_none() && self.steam.is_none()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
