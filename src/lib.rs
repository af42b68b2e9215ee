//! # Game Score Aggregator
//!
//! Collects review scores and completion times for a game from several
//! sites and merges them into one record:
//! - Fuzzy best-match selection of a site's search results (LCS + Levenshtein)
//! - Source adapter seam for Steam, GOG, Metacritic and How Long to Beat
//! - Concurrent per-title lookups with a derived aggregate score
//! - Platform name classification for per-platform scores
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use game_score_aggregator::{Aggregator, AggregatorOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let aggregator = Aggregator::new(AggregatorOptions::from_env());
//!     // aggregator.add_source(Arc::new(MySteamAdapter::new()));
//!
//!     let record = aggregator.lookup("Half-Life 2").await;
//!
//!     println!("{}", record.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod core;
pub mod error;
pub mod matching;
pub mod platform;
pub mod sources;

// Re-export primary types
pub use aggregator::{Aggregator, AggregatorOptions};
pub use crate::core::{GameRecord, SearchCandidate};
pub use error::{AggregatorError, Result};
pub use matching::{select_best_match, select_best_match_with, MatchOptions, DEFAULT_LCS_FLOOR};
pub use platform::{Platform, PlatformClassifier};
pub use sources::{SourceAdapter, SourceData, SourceKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
