use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Selectors to test for presence, in file order until [`CheckList::sorted`] is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CheckList(Vec<String>);

impl CheckList {
    pub fn new(selectors: Vec<String>) -> Self {
        Self(selectors)
    }

    /// Ascending lexicographic order. Duplicates are kept.
    pub fn sorted(mut self) -> Self {
        self.0.sort();
        self
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
}

impl From<Vec<String>> for CheckList {
    fn from(selectors: Vec<String>) -> Self {
        Self::new(selectors)
    }
}

/// Selector to presence. Keys iterate and serialize in sorted order, which is
/// the order a sorted check list records them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ReportMap(BTreeMap<String, bool>);

impl ReportMap {
    /// Last write wins for a repeated selector.
    pub fn record(&mut self, selector: &str, present: bool) {
        self.0.insert(selector.to_string(), present);
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Local { html: PathBuf },
    /// The fetched body is written to `download` and graded from there.
    Remote { url: String, download: PathBuf },
}

/// Run configuration after input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub checks: PathBuf,
    pub mode: Mode,
    pub timeout: Option<Duration>,
}
