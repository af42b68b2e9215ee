pub mod gog;
pub mod hltb;
pub mod metacritic;
pub mod steam;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::SearchCandidate;
use crate::error::Result;

pub use gog::GogResult;
pub use hltb::{CompletionTimes, HowLongToBeatResult};
pub use metacritic::{MetacriticResult, PlatformScore};
pub use steam::SteamResult;

/// Sites a game record can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Steam,
    Gog,
    Metacritic,
    #[serde(rename = "hltb")]
    HowLongToBeat,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Steam => "steam",
            SourceKind::Gog => "gog",
            SourceKind::Metacritic => "metacritic",
            SourceKind::HowLongToBeat => "hltb",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail data fetched for a matched candidate
#[derive(Debug, Clone, PartialEq)]
pub enum SourceData {
    Steam(SteamResult),
    Gog(GogResult),
    Metacritic(MetacriticResult),
    HowLongToBeat(HowLongToBeatResult),
}

impl SourceData {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceData::Steam(_) => SourceKind::Steam,
            SourceData::Gog(_) => SourceKind::Gog,
            SourceData::Metacritic(_) => SourceKind::Metacritic,
            SourceData::HowLongToBeat(_) => SourceKind::HowLongToBeat,
        }
    }

    /// Name of the game as the source spells it
    pub fn name(&self) -> &str {
        match self {
            SourceData::Steam(r) => &r.name,
            SourceData::Gog(r) => &r.name,
            SourceData::Metacritic(r) => &r.name,
            SourceData::HowLongToBeat(r) => &r.name,
        }
    }
}

/// One site integration (Steam, GOG, Metacritic, How Long to Beat)
///
/// Implementations own the transport and the markup extraction. The
/// aggregator only sees search candidates and the fetched detail data;
/// choosing which candidate to fetch is done by the matching module.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Which site this adapter talks to
    fn kind(&self) -> SourceKind;

    /// Search the site, returning its results in site order
    async fn search(&self, title: &str) -> Result<Vec<SearchCandidate>>;

    /// Fetch scores/times for a chosen candidate
    async fn fetch(&self, candidate: &SearchCandidate) -> Result<SourceData>;
}
