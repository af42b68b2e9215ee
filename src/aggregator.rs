use futures_util::future::join_all;
use futures_util::stream::{self, StreamExt};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::{GameRecord, SearchCandidate};
use crate::error::{AggregatorError, Result};
use crate::matching::{select_best_match_scored, MatchOptions};
use crate::sources::{SourceAdapter, SourceData, SourceKind};

/// Looks a game up on every registered source and merges the results
pub struct Aggregator {
    sources: Vec<Arc<dyn SourceAdapter>>,
    options: AggregatorOptions,
}

/// Aggregator configuration
#[derive(Debug, Clone)]
pub struct AggregatorOptions {
    /// How search results are matched against the requested title
    pub matching: MatchOptions,
    /// Upper bound for one source's search + fetch
    pub source_timeout: Duration,
    /// Titles looked up at once by [`Aggregator::lookup_all`]
    pub max_concurrent_titles: usize,
}

impl Default for AggregatorOptions {
    fn default() -> Self {
        Self {
            matching: MatchOptions::default(),
            source_timeout: Duration::from_secs(10),
            max_concurrent_titles: 4,
        }
    }
}

impl AggregatorOptions {
    /// Defaults overridden by `GAME_AGG_LCS_FLOOR`, `GAME_AGG_SOURCE_TIMEOUT_MS`
    /// and `GAME_AGG_MAX_CONCURRENT_TITLES` when set and valid
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            matching: MatchOptions {
                lcs_floor: env_value("GAME_AGG_LCS_FLOOR").unwrap_or(defaults.matching.lcs_floor),
            },
            source_timeout: env_value("GAME_AGG_SOURCE_TIMEOUT_MS")
                .filter(|&ms: &u64| ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.source_timeout),
            max_concurrent_titles: env_value("GAME_AGG_MAX_CONCURRENT_TITLES")
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.max_concurrent_titles),
        }
    }
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Aggregator {
    pub fn new(options: AggregatorOptions) -> Self {
        Self {
            sources: Vec::new(),
            options,
        }
    }

    /// Register a source adapter
    pub fn add_source(&mut self, source: Arc<dyn SourceAdapter>) {
        self.sources.push(source);
    }

    /// Kinds of the registered sources, in registration order
    pub fn source_kinds(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|s| s.kind()).collect()
    }

    pub fn options(&self) -> &AggregatorOptions {
        &self.options
    }

    /// Search one source, pick the best matching result and fetch its details.
    ///
    /// `Ok(None)` means the source had no result close enough to `title`.
    pub async fn lookup_source(&self, source: &dyn SourceAdapter, title: &str) -> Result<Option<SourceData>> {
        let candidates = source.search(title).await?;
        tracing::debug!("Source {} returned {} results for '{}'", source.kind(), candidates.len(), title);

        let best = match select_best_match_scored(title, &candidates, SearchCandidate::name, &self.options.matching) {
            Some(best) => best,
            None => {
                tracing::debug!("Source {} has no match for '{}'", source.kind(), title);
                return Ok(None);
            }
        };

        tracing::debug!(
            "Source {} matched '{}' → '{}' (lcs {}, distance {})",
            source.kind(),
            title,
            best.candidate.name,
            best.score.lcs,
            best.score.edit_distance
        );

        source.fetch(best.candidate).await.map(Some)
    }

    async fn lookup_source_bounded(&self, source: &dyn SourceAdapter, title: &str) -> Result<Option<SourceData>> {
        let timeout = self.options.source_timeout;

        match tokio::time::timeout(timeout, self.lookup_source(source, title)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(AggregatorError::SourceTimeout {
                adapter: source.kind().to_string(),
                timeout_ms: timeout.as_millis() as u64,
            }),
        }
    }

    /// Build the record for one title.
    ///
    /// All sources run concurrently. A source that fails or times out is
    /// logged and leaves its slot empty.
    pub async fn lookup(&self, title: &str) -> GameRecord {
        let start = Instant::now();
        let mut record = GameRecord::new(title);

        let lookups = self.sources.iter().map(|source| async move {
            let outcome = self.lookup_source_bounded(source.as_ref(), title).await;
            (source.kind(), outcome)
        });

        for (kind, outcome) in join_all(lookups).await {
            match outcome {
                Ok(Some(data)) => record.merge(data),
                Ok(None) => {}
                Err(e) => tracing::warn!("Source {} failed for '{}': {}", kind, title, e),
            }
        }

        record.refresh_aggregate();

        tracing::debug!(
            "Looked up '{}' on {} sources in {:.2}ms (aggregate {:?})",
            title,
            self.sources.len(),
            start.elapsed().as_secs_f64() * 1000.0,
            record.aggregate_score
        );

        record
    }

    /// Look up many titles, returning records in input order.
    ///
    /// Titles are trimmed and blank ones skipped.
    pub async fn lookup_all<I, S>(&self, titles: I) -> Vec<GameRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let titles: Vec<String> = titles
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        stream::iter(titles.iter())
            .map(|title| self.lookup(title))
            .buffered(self.options.max_concurrent_titles.max(1))
            .collect()
            .await
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(AggregatorOptions::default())
    }
}
