use crate::error::GradeError;
use scraper::{Html, Selector};
use std::path::Path;

/// Parsed HTML document queryable by CSS selector.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// The HTML5 tree builder repairs tag soup the way browsers do, so any text parses.
    pub fn parse(markup: &str) -> Self {
        let markup = markup.strip_prefix('\u{feff}').unwrap_or(markup);
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Bytes that are not UTF-8 (Latin-1 pages and the like) are decoded lossily.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    pub fn load(path: &Path) -> Result<Self, GradeError> {
        let bytes = std::fs::read(path).map_err(|source| GradeError::io(path, source))?;
        let doc = Self::from_bytes(&bytes);
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "parsed document");
        Ok(doc)
    }

    /// Number of matching elements, or `None` when `selector` does not parse.
    pub fn count(&self, selector: &str) -> Option<usize> {
        let sel = Selector::parse(selector).ok()?;
        Some(self.html.select(&sel).count())
    }

    /// Unparseable selectors are absent.
    pub fn contains(&self, selector: &str) -> bool {
        self.count(selector).is_some_and(|n| n > 0)
    }
}
