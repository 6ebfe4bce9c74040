//! Setting-name profiles of the numeric attribute.
//!
//! Deployments differ in which generic settings a numeric attribute accepts.
//! Each known variant is a profile; `Full` is the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsProfile {
    /// Without `mandatory`
    Legacy,
    #[default]
    Full,
    /// Without `sortable` and `flag`
    Reduced,
}

impl SettingsProfile {
    /// Setting keys the numeric attribute adds on top of the base keys.
    pub fn extension_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Legacy => &["filterable", "searchable", "sortable", "flag"],
            Self::Full => &["mandatory", "filterable", "searchable", "sortable", "flag"],
            Self::Reduced => &["mandatory", "filterable", "searchable"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Full => "full",
            Self::Reduced => "reduced",
        }
    }
}

impl fmt::Display for SettingsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "full" => Ok(Self::Full),
            "reduced" => Ok(Self::Reduced),
            other => Err(format!(
                "Unknown settings profile '{other}'. Expected one of: legacy, full, reduced"
            )),
        }
    }
}
