use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AggregatorError, Result};

/// Platforms that review sites break scores down by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[serde(rename = "playstation")]
    PlayStation,
    #[serde(rename = "playstation-2")]
    PlayStation2,
    #[serde(rename = "playstation-3")]
    PlayStation3,
    #[serde(rename = "playstation-4")]
    PlayStation4,
    #[serde(rename = "playstation-5")]
    PlayStation5,
    #[serde(rename = "playstation-vita")]
    PlayStationVita,
    Psp,
    Xbox,
    #[serde(rename = "xbox-360")]
    Xbox360,
    XboxOne,
    XboxSeriesX,
    Pc,
    Switch,
    Wii,
    WiiU,
    Gamecube,
    #[serde(rename = "nintendo-64")]
    Nintendo64,
    #[serde(rename = "3ds")]
    Nintendo3ds,
    Ds,
    GameBoyAdvance,
    Ios,
    Dreamcast,
}

impl Platform {
    pub const ALL: [Platform; 22] = [
        Platform::PlayStation,
        Platform::PlayStation2,
        Platform::PlayStation3,
        Platform::PlayStation4,
        Platform::PlayStation5,
        Platform::PlayStationVita,
        Platform::Psp,
        Platform::Xbox,
        Platform::Xbox360,
        Platform::XboxOne,
        Platform::XboxSeriesX,
        Platform::Pc,
        Platform::Switch,
        Platform::Wii,
        Platform::WiiU,
        Platform::Gamecube,
        Platform::Nintendo64,
        Platform::Nintendo3ds,
        Platform::Ds,
        Platform::GameBoyAdvance,
        Platform::Ios,
        Platform::Dreamcast,
    ];

    /// Slug used in review site URLs
    pub fn slug(&self) -> &'static str {
        match self {
            Platform::PlayStation => "playstation",
            Platform::PlayStation2 => "playstation-2",
            Platform::PlayStation3 => "playstation-3",
            Platform::PlayStation4 => "playstation-4",
            Platform::PlayStation5 => "playstation-5",
            Platform::PlayStationVita => "playstation-vita",
            Platform::Psp => "psp",
            Platform::Xbox => "xbox",
            Platform::Xbox360 => "xbox-360",
            Platform::XboxOne => "xbox-one",
            Platform::XboxSeriesX => "xbox-series-x",
            Platform::Pc => "pc",
            Platform::Switch => "switch",
            Platform::Wii => "wii",
            Platform::WiiU => "wii-u",
            Platform::Gamecube => "gamecube",
            Platform::Nintendo64 => "nintendo-64",
            Platform::Nintendo3ds => "3ds",
            Platform::Ds => "ds",
            Platform::GameBoyAdvance => "game-boy-advance",
            Platform::Ios => "ios",
            Platform::Dreamcast => "dreamcast",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Pattern table for [`PlatformClassifier::standard`], tried top to bottom.
///
/// Handheld and suffixed variants come before the generic entries they
/// would otherwise be swallowed by.
const STANDARD_PATTERNS: &[(&str, Platform)] = &[
    (r"^(ps|playstation).*v(ita)?$", Platform::PlayStationVita),
    (r"^(ps|playstation).*(p|portable)$", Platform::Psp),
    (r"^(ps|playstation).*5$", Platform::PlayStation5),
    (r"^(ps|playstation).*4$", Platform::PlayStation4),
    (r"^(ps|playstation).*3$", Platform::PlayStation3),
    (r"^(ps|playstation).*2$", Platform::PlayStation2),
    (r"^(ps|playstation).*1?$", Platform::PlayStation),
    (r"^xbox.*series.*$", Platform::XboxSeriesX),
    (r"^xbox.*(one|1)$", Platform::XboxOne),
    (r"^xbox.*360$", Platform::Xbox360),
    (r"^xbox$", Platform::Xbox),
    (r"^(pc|windows|mac|linux|desktop)$", Platform::Pc),
    (r"^(nintendo.*)?switch$", Platform::Switch),
    (r"^(nintendo.*)?wii.*u$", Platform::WiiU),
    (r"^(nintendo.*)?wii$", Platform::Wii),
    (r"^(nintendo.*)?gamecube$", Platform::Gamecube),
    (r"^n(intendo)?.*64$", Platform::Nintendo64),
    (r"^(nintendo.*)?3ds$", Platform::Nintendo3ds),
    (r"^(nintendo.*)?ds.*$", Platform::Ds),
    (r"^(nintendo.*)?(game.*boy.*advance|gba)$", Platform::GameBoyAdvance),
    (r"^(ios|android|mobile|(smart)?phone|tablet)$", Platform::Ios),
    (r"^(sega.*)?dreamcast$", Platform::Dreamcast),
];

/// Maps free-form platform names ("PS4", "Nintendo Switch") to [`Platform`]s.
///
/// The table is ordered and owned by the classifier; the first pattern
/// that matches wins.
#[derive(Debug, Clone)]
pub struct PlatformClassifier {
    patterns: Vec<(Regex, Platform)>,
}

impl PlatformClassifier {
    pub fn new(patterns: Vec<(Regex, Platform)>) -> Self {
        Self { patterns }
    }

    /// Classifier with the built-in, case-insensitive table
    pub fn standard() -> Result<Self> {
        let patterns = STANDARD_PATTERNS
            .iter()
            .map(|&(pattern, platform)| {
                let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
                Ok::<_, AggregatorError>((regex, platform))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(patterns))
    }

    pub fn classify(&self, name: &str) -> Option<Platform> {
        let name = name.trim();
        self.patterns
            .iter()
            .find(|(regex, _)| regex.is_match(name))
            .map(|&(_, platform)| platform)
    }

    /// Parse a comma separated list such as `"ps4, pc,switch"`.
    ///
    /// Blank entries are skipped. An unrecognised entry fails the whole
    /// list with [`AggregatorError::UnknownPlatform`].
    pub fn parse_list(&self, list: &str) -> Result<Vec<Platform>> {
        let mut platforms = Vec::new();

        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match self.classify(entry) {
                Some(platform) => platforms.push(platform),
                None => return Err(unknown_platform(entry)),
            }
        }

        Ok(platforms)
    }
}

fn unknown_platform(input: &str) -> AggregatorError {
    let valid: Vec<&str> = Platform::ALL.iter().map(Platform::slug).collect();
    AggregatorError::UnknownPlatform(format!(
        "Could not parse platform: \"{}\"\nIt should be similar to one of:\n{}",
        input,
        valid.join("\n")
    ))
}
