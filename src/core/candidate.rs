use serde::{Deserialize, Serialize};

/// One entry of a site's search results: a display name and where it lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    /// Name as displayed by the site
    pub name: String,

    /// Detail page or API locator
    pub url: String,
}

impl SearchCandidate {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
