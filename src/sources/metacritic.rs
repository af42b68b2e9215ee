use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Metacritic critic and user scores for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetacriticResult {
    pub name: String,
    pub url: String,
    /// Critic score out of 100, best of the requested platforms.
    /// `metascore_url` is set whenever this is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metascore: Option<u8>,
    /// User score out of 10.
    /// `userscore_url` is set whenever this is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userscore: Option<f64>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metascore_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userscore_url: Option<String>,
}

/// Critic score shown for one platform on a game page
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformScore {
    pub platform: Platform,
    pub metascore: u8,
    pub url: Option<String>,
}

impl MetacriticResult {
    /// Build a result from a game page.
    ///
    /// Only platform scores for `wanted` platforms are considered and the
    /// highest one is kept.
    pub fn from_scores(
        name: impl Into<String>,
        url: impl Into<String>,
        platform_scores: &[PlatformScore],
        wanted: &[Platform],
        userscore: Option<f64>,
        release_date: Option<String>,
    ) -> Self {
        let url = url.into();
        let best = best_platform_score(platform_scores, wanted);
        let userscore = userscore.filter(|s| s.is_finite());

        Self {
            name: name.into(),
            metascore: best.map(|s| s.metascore),
            metascore_url: best.and_then(|s| s.url.clone()).or_else(|| best.map(|_| url.clone())),
            userscore_url: userscore.map(|_| url.clone()),
            userscore,
            release_date: release_date.unwrap_or_default(),
            url,
        }
    }
}

/// Highest metascore among the `wanted` platforms; the first one wins a tie
pub fn best_platform_score<'a>(scores: &'a [PlatformScore], wanted: &[Platform]) -> Option<&'a PlatformScore> {
    scores
        .iter()
        .filter(|s| wanted.contains(&s.platform))
        .fold(None, |best: Option<&PlatformScore>, s| match best {
            Some(b) if b.metascore >= s.metascore => Some(b),
            _ => Some(s),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://www.metacritic.com/game/elden-ring/";

    fn scores() -> Vec<PlatformScore> {
        vec![
            PlatformScore {
                platform: Platform::PlayStation5,
                metascore: 96,
                url: Some("https://www.metacritic.com/game/elden-ring/critic-reviews/?platform=playstation-5".into()),
            },
            PlatformScore {
                platform: Platform::Pc,
                metascore: 94,
                url: Some("https://www.metacritic.com/game/elden-ring/critic-reviews/?platform=pc".into()),
            },
            PlatformScore {
                platform: Platform::XboxSeriesX,
                metascore: 96,
                url: None,
            },
        ]
    }

    #[test]
    fn test_best_score_among_wanted() {
        let all = scores();
        let best = best_platform_score(&all, &[Platform::Pc, Platform::XboxSeriesX]).unwrap();
        assert_eq!(best.platform, Platform::XboxSeriesX);

        let best = best_platform_score(&all, &[Platform::Pc]).unwrap();
        assert_eq!(best.metascore, 94);
    }

    #[test]
    fn test_first_wins_on_equal_scores() {
        let all = scores();
        let best = best_platform_score(&all, &Platform::ALL).unwrap();
        assert_eq!(best.platform, Platform::PlayStation5);
    }

    #[test]
    fn test_no_wanted_platform() {
        let all = scores();
        assert!(best_platform_score(&all, &[Platform::Switch]).is_none());
        assert!(best_platform_score(&[], &Platform::ALL).is_none());
    }

    #[test]
    fn test_from_scores() {
        let result = MetacriticResult::from_scores(
            "Elden Ring",
            PAGE,
            &scores(),
            &[Platform::Pc],
            Some(8.2),
            Some("Feb 25, 2022".into()),
        );

        assert_eq!(result.metascore, Some(94));
        assert!(result.metascore_url.unwrap().ends_with("platform=pc"));
        assert_eq!(result.userscore, Some(8.2));
        assert_eq!(result.userscore_url.as_deref(), Some(PAGE));
        assert_eq!(result.release_date, "Feb 25, 2022");
    }

    #[test]
    fn test_score_urls_follow_scores() {
        let result = MetacriticResult::from_scores("Elden Ring", PAGE, &scores(), &[Platform::Switch], None, None);
        assert_eq!(result.metascore, None);
        assert_eq!(result.metascore_url, None);
        assert_eq!(result.userscore, None);
        assert_eq!(result.userscore_url, None);
        assert_eq!(result.release_date, "");

        // a platform score without its own link falls back to the page
        let result = MetacriticResult::from_scores("Elden Ring", PAGE, &scores(), &[Platform::XboxSeriesX], None, None);
        assert_eq!(result.metascore, Some(96));
        assert_eq!(result.metascore_url.as_deref(), Some(PAGE));
    }

    #[test]
    fn test_nan_userscore_dropped() {
        let result = MetacriticResult::from_scores("Elden Ring", PAGE, &[], &[], Some(f64::NAN), None);
        assert_eq!(result.userscore, None);
        assert_eq!(result.userscore_url, None);
    }
}
