use super::NavigationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level section of the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKey {
    Company,
    Philosophy,
    Ecosystem,
    Direction,
    Governance,
    Ethics,
}

impl TabKey {
    pub const COUNT: usize = 6;

    /// All tabs in display order.
    pub const ALL: [TabKey; Self::COUNT] = [
        TabKey::Company,
        TabKey::Philosophy,
        TabKey::Ecosystem,
        TabKey::Direction,
        TabKey::Governance,
        TabKey::Ethics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabKey::Company => "company",
            TabKey::Philosophy => "philosophy",
            TabKey::Ecosystem => "ecosystem",
            TabKey::Direction => "direction",
            TabKey::Governance => "governance",
            TabKey::Ethics => "ethics",
        }
    }

    /// Position in [`TabKey::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TabKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabKey {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TabKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| NavigationError::UnknownTab(s.to_string()))
    }
}
