//! Ordered, duplicate-free sets of attribute setting names.

use serde::{Deserialize, Serialize};

/// Ordered set of setting keys recognized by an attribute type.
///
/// Insertion order is preserved and a key is only ever stored once, so a
/// derived attribute extending its base keeps the base keys first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SettingNames(Vec<String>);

impl SettingNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key unless it is already present.
    ///
    /// Returns `true` if the key was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    /// Union of `self` followed by `extension`, keeping the first occurrence.
    pub fn extended<I, S>(mut self, extension: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in extension {
            self.insert(name);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for SettingNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new().extended(iter)
    }
}

impl From<Vec<String>> for SettingNames {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<SettingNames> for Vec<String> {
    fn from(names: SettingNames) -> Self {
        names.0
    }
}
